//! # Wheel Error Types
//!
//! All errors that can occur in the wheel spin engine.

use thiserror::Error;

/// Errors that can occur in the wheel spin engine.
#[derive(Error, Debug)]
pub enum WheelError {
    /// A wheel needs at least one segment.
    #[error("wheel has no segments")]
    EmptyWheel,

    /// A scripted spin named a segment the wheel does not have.
    #[error("segment {index} out of range for a wheel of {len}")]
    SegmentOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of segments on the wheel.
        len: usize,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config or catalog file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Config or catalog file is not valid TOML for its schema.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The renderer failed to draw a frame.
    #[error("renderer failed: {0}")]
    Render(String),

    /// The presenter failed to display a result.
    #[error("presenter failed: {0}")]
    Present(String),
}

/// Result type for wheel operations.
pub type WheelResult<T> = Result<T, WheelError>;
