use serde::{Deserialize, Serialize};

use crate::{mode::Mode, profile::Profile};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadProfileSelect {
    pub profile: Profile,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadOptionToggle {
    /// Dotted path of the toggled option, e.g. `dashNav.title`
    pub path: String,
    pub mode: Mode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadEnabledToggle {
    pub enabled: bool,
}

/// Change made by the user through the kiosk settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    ProfileSelect(PayloadProfileSelect),
    OptionToggle(PayloadOptionToggle),
    EnabledToggle(PayloadEnabledToggle),
}
