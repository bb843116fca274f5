mod chrome;
mod config;
mod error;
mod gate;
mod mode;
mod nav;
mod profile;
mod resolver;
mod session;
mod settings;
mod settings_view;

#[cfg(feature = "events")]
pub mod events;

pub use self::chrome::{
    dash_nav, side_menu, time_controls, PageToolbar, PageToolbarResponse, ToolbarButton,
};
pub use self::config::Configuration;
pub use self::error::ConfigError;
pub use self::gate::{Capability, Chrome, KioskContext};
pub use self::mode::{ElementConfig, Mode};
pub use self::nav::{ElementPath, NavConfig, NavElement};
pub use self::profile::Profile;
pub use self::resolver::{lookup, resolve, select_profile, toggle_option};
pub use self::session::KioskSession;
pub use self::settings::{AppConfig, FeatureToggles};
pub use self::settings_view::{KioskSettingsView, CONFIGURABLE_OPTIONS};
