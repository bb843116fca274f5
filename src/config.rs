use serde::{Deserialize, Serialize};

use crate::{
    mode::ElementConfig,
    nav::{ElementPath, NavConfig},
    profile::Profile,
};

const STANDARD: Configuration = Configuration {
    profile: Profile::Standard,
    dash_nav: NavConfig {
        time_picker: ElementConfig::EDITABLE,
        title: ElementConfig::EDITABLE,
        tv_toggle: ElementConfig::EDITABLE,
        ..NavConfig::uniform(ElementConfig::HIDDEN)
    },
};

const TV: Configuration = Configuration {
    profile: Profile::Tv,
    dash_nav: NavConfig::uniform(ElementConfig::HIDDEN),
};

const CUSTOM: Configuration = Configuration {
    profile: Profile::Custom,
    dash_nav: NavConfig::uniform(ElementConfig::EDITABLE),
};

const DISABLED: Configuration = Configuration {
    profile: Profile::Disabled,
    dash_nav: NavConfig::uniform(ElementConfig::EDITABLE),
};

/// Kiosk configuration: the profile it came from and the resulting
/// navigation rules.
///
/// A payload without `dashNav` takes the rules of its profile's static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ConfigurationRepr")]
pub struct Configuration {
    pub profile: Profile,
    pub dash_nav: NavConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigurationRepr {
    profile: Profile,
    #[serde(default)]
    dash_nav: Option<NavConfig>,
}

impl From<ConfigurationRepr> for Configuration {
    fn from(repr: ConfigurationRepr) -> Self {
        let dash_nav = repr
            .dash_nav
            .unwrap_or(Configuration::of(repr.profile).dash_nav);
        Self {
            profile: repr.profile,
            dash_nav,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        STANDARD
    }
}

impl Configuration {
    /// Static configuration of a profile. For [`Profile::Custom`] this is the
    /// initial state before any user edits.
    pub const fn of(profile: Profile) -> Self {
        match profile {
            Profile::Standard => STANDARD,
            Profile::Tv => TV,
            Profile::Custom => CUSTOM,
            Profile::Disabled => DISABLED,
        }
    }

    pub const fn standard() -> Self {
        STANDARD
    }

    pub const fn tv() -> Self {
        TV
    }

    pub const fn custom() -> Self {
        CUSTOM
    }

    pub const fn disabled() -> Self {
        DISABLED
    }

    pub fn get(&self, path: ElementPath) -> ElementConfig {
        self.dash_nav.get(path)
    }

    /// Returns a copy with `path` set to `item`.
    pub fn with(self, path: ElementPath, item: ElementConfig) -> Self {
        Self {
            dash_nav: self.dash_nav.with(path, item),
            ..self
        }
    }
}
