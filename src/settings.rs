use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureToggles {
    /// Kiosk customization. When off, every gate renders normally and the
    /// settings view is not shown.
    pub custom_kiosk: bool,
}

/// Application configuration read by the dashboard at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub feature_toggles: FeatureToggles,
}

impl AppConfig {
    /// Parses configuration from json. Missing fields default to off.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `text` is not valid json for
    /// [`AppConfig`].
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a json configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&text)
    }
}
