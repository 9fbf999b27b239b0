//! # UI Error Types

use thiserror::Error;

/// Errors from the presentation surface.
#[derive(Error, Debug)]
pub enum UiError {
    /// Preference file could not be read or written.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// The file or directory that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Preference file is not valid.
    #[error("failed to parse preference file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Preference could not be encoded.
    #[error("failed to encode preference file: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The platform has no config directory.
    #[error("no config directory on this platform")]
    NoConfigDir,
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
