use std::fmt;

use serde::{Deserialize, Serialize};

/// Named preset of visibility rules for the dashboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Standard,
    Tv,
    /// The only profile the user can edit.
    Custom,
    /// Everything visible; used while kiosk mode is switched off.
    Disabled,
}

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::Standard,
        Profile::Tv,
        Profile::Custom,
        Profile::Disabled,
    ];

    /// Profiles offered in the settings view.
    pub const SELECTABLE: [Profile; 3] = [Profile::Standard, Profile::Tv, Profile::Custom];

    /// Parses a profile name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Standard => "standard",
            Profile::Tv => "tv",
            Profile::Custom => "custom",
            Profile::Disabled => "disabled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Profile::Standard => "Standard",
            Profile::Tv => "TV",
            Profile::Custom => "Custom",
            Profile::Disabled => "Disabled",
        }
    }

    pub fn is_custom(self) -> bool {
        self == Profile::Custom
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
