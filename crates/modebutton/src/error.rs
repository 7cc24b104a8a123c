//! Error types for the mode button crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`ModeButton`](crate::widget::widgets::ModeButton) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeButtonError {
    /// The index is neither -1 (where allowed) nor an existing segment index.
    #[error("segment index {index} is out of range for {count} segment(s)")]
    InvalidIndex {
        /// The rejected index.
        index: i32,
        /// The number of segments at the time of the call.
        count: i32,
    },
}

/// Result type for mode button operations.
pub type Result<T> = std::result::Result<T, ModeButtonError>;

/// Errors raised while loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or does not match the schema.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field holds a value outside its allowed range.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a value error.
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
