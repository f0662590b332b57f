//! # Export Error Types
//!
//! All errors that can occur while serializing a circle.

use blockcircle_core::CircleError;
use thiserror::Error;

/// Errors that can occur during export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Export requested before its input exists.
    #[error("export precondition failed: {0}")]
    Precondition(&'static str),

    /// PNG encoder failure.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// JSON serialization or parse failure.
    #[error("block document JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A parsed document describes a circle the engine does not accept.
    #[error("block document rejected: {0}")]
    InvalidDocument(#[from] CircleError),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
