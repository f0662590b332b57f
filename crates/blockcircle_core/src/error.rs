//! # Circle Error Types
//!
//! All errors that can occur while validating circle input.

use thiserror::Error;

/// Errors that can occur in the circle engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CircleError {
    /// Radius outside the supported range.
    #[error("radius {radius} out of range: must be within {min}..={max}")]
    RadiusOutOfRange {
        /// The rejected radius.
        radius: i64,
        /// Smallest accepted radius.
        min: i32,
        /// Largest accepted radius.
        max: i32,
    },

    /// Mode string that names no known fill mode.
    #[error("unknown circle mode: {0:?} (expected \"outline\" or \"filled\")")]
    UnknownMode(String),
}

/// Result type for circle engine operations.
pub type CircleResult<T> = Result<T, CircleError>;
