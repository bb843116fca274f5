use log::trace;

use super::Event;

/// Receiver of kiosk [`Event`]s.
///
/// Implemented for crossbeam senders and for plain closures, so callers can
/// forward events wherever they keep application state.
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        // Receiver gone means nobody listens anymore.
        if let Err(err) = crossbeam::channel::Sender::send(self, event) {
            trace!("dropping kiosk event: {err}");
        }
    }
}

impl<F> EventSink for F
where
    F: Fn(Event),
{
    fn send(&self, event: Event) {
        self(event);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::events::PayloadEnabledToggle;

    fn event() -> Event {
        Event::EnabledToggle(PayloadEnabledToggle { enabled: true })
    }

    #[test]
    fn test_channel_sink() {
        let (tx, rx) = crossbeam::channel::unbounded();
        EventSink::send(&tx, event());
        assert_eq!(rx.try_recv().unwrap(), event());

        drop(rx);
        EventSink::send(&tx, event());
    }

    #[test]
    fn test_closure_sink() {
        let got = RefCell::new(Vec::new());
        let sink = |e: Event| got.borrow_mut().push(e);
        sink.send(event());
        assert_eq!(got.into_inner(), vec![event()]);
    }
}
