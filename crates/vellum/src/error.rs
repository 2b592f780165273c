//! # Sketch Error Types
//!
//! Everything that can stop a sketch from rendering.

use std::path::PathBuf;

use thiserror::Error;
use vellum_random::RandomError;

/// Errors that can occur while configuring or rendering a sketch.
#[derive(Error, Debug)]
pub enum SketchError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for a sketch.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The canvas has no area.
    #[error("canvas must be non-empty, got {width} x {height}")]
    InvalidCanvas {
        /// Configured width in pixels.
        width: u32,
        /// Configured height in pixels.
        height: u32,
    },

    /// The random engine rejected a request.
    #[error(transparent)]
    Random(#[from] RandomError),

    /// Command-line arguments could not be understood.
    #[error("{0}")]
    Usage(String),
}

/// Result type for sketch operations.
pub type SketchResult<T> = Result<T, SketchError>;
