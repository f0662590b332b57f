//! # Block Document
//!
//! JSON export of a circle's configuration and ordered block list.
//!
//! ```json
//! {
//!   "radius": 1,
//!   "mode": "outline",
//!   "blocks": [
//!     { "x": 0, "y": 1, "z": 0 },
//!     ...
//!   ]
//! }
//! ```
//!
//! Key names and order are read by other tools and must not change.

use blockcircle_core::{BlockPosition, CircleConfig, CircleMode, CoordinateSet};
use serde::{Deserialize, Serialize};

use crate::error::ExportResult;

/// Serialized form of one circle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleDocument {
    /// Radius in blocks.
    pub radius: i32,
    /// Fill mode.
    pub mode: CircleMode,
    /// Blocks in builder order.
    pub blocks: Vec<BlockPosition>,
}

impl CircleDocument {
    /// Captures `config` and its block set.
    #[must_use]
    pub fn new(config: CircleConfig, blocks: &CoordinateSet) -> Self {
        Self {
            radius: config.radius(),
            mode: config.mode(),
            blocks: blocks.as_slice().to_vec(),
        }
    }

    /// Serializes with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExportError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a document produced by [`CircleDocument::to_json_pretty`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExportError::Json`] for malformed input.
    pub fn from_json(json: &str) -> ExportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Re-validates the configuration this document describes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExportError::InvalidDocument`] if the radius is
    /// outside the supported range.
    pub fn config(&self) -> ExportResult<CircleConfig> {
        Ok(CircleConfig::new(i64::from(self.radius), self.mode)?)
    }
}

/// Serializes `config` and `blocks` to pretty JSON bytes.
///
/// # Errors
///
/// Returns [`crate::ExportError::Json`] if serialization fails.
pub fn export_document(config: CircleConfig, blocks: &CoordinateSet) -> ExportResult<Vec<u8>> {
    let json = CircleDocument::new(config, blocks).to_json_pretty()?;
    tracing::debug!(
        radius = config.radius(),
        blocks = blocks.len(),
        bytes = json.len(),
        "document exported"
    );
    Ok(json.into_bytes())
}
