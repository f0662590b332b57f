//! Summary figures shown next to a circle preview.

use crate::config::{CircleConfig, CircleMode};
use crate::coords::CoordinateSet;

/// Headline numbers for one configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleStats {
    /// Radius in blocks.
    pub radius: i32,
    /// Width in blocks, center included.
    pub diameter: i32,
    /// Blocks needed to build it.
    pub total_blocks: usize,
    /// Fill mode.
    pub mode: CircleMode,
}

impl CircleStats {
    /// Collects stats for `config` and its built block set.
    #[must_use]
    pub fn new(config: CircleConfig, blocks: &CoordinateSet) -> Self {
        Self {
            radius: config.radius(),
            diameter: config.diameter(),
            total_blocks: blocks.len(),
            mode: config.mode(),
        }
    }
}
