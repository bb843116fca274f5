mod event;
mod sink;

pub use event::{Event, PayloadEnabledToggle, PayloadOptionToggle, PayloadProfileSelect};

pub use sink::EventSink;
