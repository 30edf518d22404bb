//! Host runtime errors

use std::path::PathBuf;

use duotone_core::config::ConfigError;
use duotone_display::DisplayError;
use thiserror::Error;

/// Errors reported by the host runtime
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid face configuration: {0:?}")]
    InvalidFace(ConfigError),

    #[error("invalid host configuration: {0}")]
    InvalidHost(&'static str),

    #[error("script has more than {0} steps")]
    ScriptTooLong(usize),

    #[error("display error: {0:?}")]
    Display(DisplayError),
}

impl From<ConfigError> for HostError {
    fn from(err: ConfigError) -> Self {
        HostError::InvalidFace(err)
    }
}

impl From<DisplayError> for HostError {
    fn from(err: DisplayError) -> Self {
        HostError::Display(err)
    }
}
