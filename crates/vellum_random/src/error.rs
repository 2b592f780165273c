//! # Random Engine Error Types
//!
//! All errors that can occur while drawing from the engine or its collaborators.

use thiserror::Error;

/// Errors that can occur in the random engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomError {
    /// Noise was requested for a dimension tag other than `1d`..`4d`.
    #[error("dimensionality of the noise is not supported: {0}")]
    UnsupportedDimension(String),

    /// Fewer coordinates were supplied than the noise dimension needs.
    #[error("{dimension} noise needs {expected} coordinates, got {got}")]
    MissingCoordinates {
        /// The requested dimension tag.
        dimension: &'static str,
        /// Coordinates required by that dimension.
        expected: usize,
        /// Coordinates actually supplied.
        got: usize,
    },

    /// Poisson-disk spacing must be a positive, finite distance.
    #[error("invalid poisson spacing: {0}")]
    InvalidSpacing(f64),

    /// Poisson-disk region must have finite, non-negative extents.
    #[error("invalid poisson region: {width} x {height}")]
    InvalidRegion {
        /// Region width.
        width: f64,
        /// Region height.
        height: f64,
    },

    /// Poisson-disk region needs more grid cells than the sampler allocates.
    #[error("poisson region {width} x {height} at spacing {spacing} needs more than {limit} grid cells")]
    RegionTooLarge {
        /// Region width.
        width: f64,
        /// Region height.
        height: f64,
        /// Requested spacing.
        spacing: f64,
        /// Largest grid the sampler will allocate.
        limit: usize,
    },

    /// A seed could not be parsed from text.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}

/// Result type for random engine operations.
pub type RandomResult<T> = Result<T, RandomError>;
