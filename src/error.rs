use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while loading application configuration.
///
/// Kiosk resolution itself never fails; only reading the surrounding
/// application config from disk can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}
