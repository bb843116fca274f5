use std::hash::Hash;

use egui::{Context, Id};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    config::Configuration,
    gate::KioskContext,
    mode::Mode,
    nav::ElementPath,
    profile::Profile,
    resolver,
    settings::FeatureToggles,
};

const KEY_SESSION: &str = "egui_kiosk_session";
const KEY_CUSTOM: &str = "egui_kiosk_custom";

/// Kiosk state of one mounted dashboard view.
///
/// Lives in egui temporary memory between [`KioskSession::mount`] and
/// [`KioskSession::unmount`]. Each mount starts over from the standard
/// profile with kiosk mode off. The custom configuration the user has edited
/// is kept in persisted memory and outlives the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KioskSession {
    enabled: bool,
    config: Configuration,
    custom: Configuration,
}

impl Default for KioskSession {
    fn default() -> Self {
        Self::with_custom(Configuration::custom())
    }
}

impl KioskSession {
    fn with_custom(custom: Configuration) -> Self {
        Self {
            enabled: false,
            config: Configuration::standard(),
            custom,
        }
    }

    /// Starts a fresh session for `dashboard` and stores it.
    pub fn mount(ctx: &Context, dashboard: impl Hash) -> Self {
        let session = Self::with_custom(load_custom(ctx));
        session.save(ctx, dashboard);
        debug!("kiosk session mounted");
        session
    }

    /// Session of `dashboard`, or a fresh one when it was never mounted.
    pub fn load(ctx: &Context, dashboard: impl Hash) -> Self {
        let id = session_id(dashboard);
        ctx.data_mut(|data| data.get_temp::<Self>(id))
            .unwrap_or_else(|| Self::with_custom(load_custom(ctx)))
    }

    pub fn save(self, ctx: &Context, dashboard: impl Hash) {
        let id = session_id(dashboard);
        ctx.data_mut(|data| {
            data.insert_temp(id, self);
            data.insert_persisted(Id::new(KEY_CUSTOM), self.custom);
        });
    }

    /// Drops the session of `dashboard`. The custom configuration is kept.
    pub fn unmount(ctx: &Context, dashboard: impl Hash) {
        let id = session_id(dashboard);
        ctx.data_mut(|data| data.remove::<Self>(id));
        debug!("kiosk session unmounted");
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Stored configuration, regardless of whether kiosk mode is on.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Last custom configuration, edited or not.
    pub fn custom(&self) -> &Configuration {
        &self.custom
    }

    /// Configuration in effect.
    pub fn effective(&self) -> Configuration {
        resolver::resolve(&self.config, self.enabled)
    }

    /// Gate context for the current frame.
    pub fn context(&self, features: FeatureToggles) -> KioskContext {
        KioskContext::new(features, self.effective())
    }

    /// Replaces the whole configuration. A custom configuration also becomes
    /// the one restored when the custom profile is selected again.
    pub fn set_config(&mut self, config: Configuration) {
        if config.profile.is_custom() {
            self.custom = config;
        }
        self.config = config;
    }

    /// Flips kiosk mode and returns the new state.
    pub fn toggle_enabled(&mut self) -> bool {
        self.enabled = !self.enabled;
        debug!("kiosk mode enabled: {}", self.enabled);
        self.enabled
    }

    /// Switches to the named profile. Unknown names are ignored.
    /// Returns whether the stored configuration changed.
    pub fn select_profile(&mut self, name: &str) -> bool {
        match Profile::from_name(name) {
            Some(profile) => self.select(profile),
            None => {
                debug!("ignoring unknown kiosk profile {name:?}");
                false
            }
        }
    }

    /// Switches to `profile`. Returns whether the stored configuration changed.
    pub fn select(&mut self, profile: Profile) -> bool {
        let before = self.config;
        self.config = if profile.is_custom() {
            self.custom
        } else {
            resolver::select_profile(&before, profile.name())
        };

        self.config != before
    }

    /// Toggles an option of the custom configuration and makes it active.
    /// Returns the new mode, or `None` when nothing could be toggled.
    pub fn toggle_option(&mut self, path: &str) -> Option<Mode> {
        let next = resolver::toggle_option(&self.custom, path);
        if next == self.custom {
            return None;
        }

        self.custom = next;
        self.config = next;

        Some(resolver::lookup(&next, path).mode)
    }

    /// Mode of `path` in the stored configuration.
    pub fn option(&self, path: ElementPath) -> Mode {
        self.config.get(path).mode
    }
}

fn session_id(dashboard: impl Hash) -> Id {
    Id::new(KEY_SESSION).with(dashboard)
}

fn load_custom(ctx: &Context) -> Configuration {
    ctx.data_mut(|data| data.get_persisted::<Configuration>(Id::new(KEY_CUSTOM)))
        .unwrap_or_else(Configuration::custom)
}
