use serde::{Deserialize, Serialize};

use crate::gate::Capability;

/// How a single piece of navigation chrome is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Not drawn at all.
    Hidden,
    /// Reserved. Consumers currently draw it like [`Mode::Editable`].
    ReadOnly,
    /// Drawn normally.
    #[default]
    Editable,
}

impl Mode {
    /// Capability a gate grants to chrome in this mode.
    pub fn capability(self) -> Capability {
        match self {
            Mode::Hidden => Capability::Suppress,
            Mode::ReadOnly => Capability::RenderRestricted,
            Mode::Editable => Capability::Render,
        }
    }

    /// Flips between hidden and editable. Read-only stays read-only.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Hidden => Mode::Editable,
            Mode::Editable => Mode::Hidden,
            Mode::ReadOnly => Mode::ReadOnly,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == Mode::Hidden
    }
}

/// Visibility rule for one navigation element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ElementConfig {
    pub mode: Mode,
}

impl ElementConfig {
    pub const HIDDEN: Self = Self::new(Mode::Hidden);
    pub const EDITABLE: Self = Self::new(Mode::Editable);

    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }
}
