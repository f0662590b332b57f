//! # Scale Planner
//!
//! Picks a pixel-per-block size so the whole circle stays on the canvas.
//!
//! ```text
//! diameter_blocks = 2r + 1 + padding
//! block_size_px   = clamp(floor(extent / diameter_blocks), min, max)
//! center_px       = (extent / 2, extent / 2)
//! ```
//!
//! Flooring keeps block edges on whole pixels. The clamp stops tiny radii
//! from producing huge blocks and big radii from vanishing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canvas extent of the reference preview.
pub const DEFAULT_CANVAS_EXTENT_PX: u32 = 600;

/// Scale parameters that cannot produce a usable plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidScale {
    /// Minimum block size of zero.
    #[error("min_block_px must be at least 1")]
    ZeroMinimum,

    /// Clamp bounds in the wrong order.
    #[error("min_block_px ({min}) exceeds max_block_px ({max})")]
    InvertedClamp {
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },
}

/// Tunable constants of the planner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaleParams {
    /// Blocks of empty margin added across the diameter.
    pub padding_blocks: u32,
    /// Smallest block size in pixels.
    pub min_block_px: u32,
    /// Largest block size in pixels.
    pub max_block_px: u32,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            padding_blocks: 4,
            min_block_px: 2,
            max_block_px: 40,
        }
    }
}

impl ScaleParams {
    /// Checks that the clamp range is usable.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidScale`] for a zero minimum or an inverted range.
    pub fn validate(&self) -> Result<(), InvalidScale> {
        if self.min_block_px == 0 {
            return Err(InvalidScale::ZeroMinimum);
        }
        if self.min_block_px > self.max_block_px {
            return Err(InvalidScale::InvertedClamp {
                min: self.min_block_px,
                max: self.max_block_px,
            });
        }
        Ok(())
    }

    /// Plans a circle of `radius` blocks on an `extent` x `extent` canvas.
    #[must_use]
    pub fn plan(&self, radius: i32, canvas_extent_px: u32) -> ScalePlan {
        let diameter_blocks = 2 * radius.unsigned_abs() + 1 + self.padding_blocks;
        let fitted = canvas_extent_px / diameter_blocks;
        // Minimum wins if the range is ever inverted. Never below one pixel.
        let block_size_px = self
            .max_block_px
            .min(fitted)
            .max(self.min_block_px.max(1));
        let half = canvas_extent_px as f32 / 2.0;

        ScalePlan {
            block_size_px,
            center_px: (half, half),
            canvas_extent_px,
        }
    }
}

/// Where and how large blocks are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePlan {
    /// Side of one block in pixels.
    pub block_size_px: u32,
    /// Pixel position of the center of block `(0, 0)`.
    pub center_px: (f32, f32),
    /// Canvas extent the plan was made for.
    pub canvas_extent_px: u32,
}

impl ScalePlan {
    /// Top-left pixel corner of block `(x, y)`.
    #[inline]
    #[must_use]
    pub fn block_origin(&self, x: i32, y: i32) -> (f32, f32) {
        let size = self.block_size_px as f32;
        (
            self.center_px.0 + x as f32 * size - size / 2.0,
            self.center_px.1 + y as f32 * size - size / 2.0,
        )
    }
}

/// Plans with the default parameters.
#[must_use]
pub fn plan(radius: i32, canvas_extent_px: u32) -> ScalePlan {
    ScaleParams::default().plan(radius, canvas_extent_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_fifty_on_reference_canvas() {
        // floor(600 / 105) = 5
        let p = plan(50, 600);
        assert_eq!(p.block_size_px, 5);
        assert_eq!(p.center_px, (300.0, 300.0));
    }

    #[test]
    fn test_small_radius_hits_upper_clamp() {
        assert_eq!(plan(1, 600).block_size_px, 40);
        assert_eq!(plan(5, 600).block_size_px, 40);
        assert_eq!(plan(10, 600).block_size_px, 24);
    }

    #[test]
    fn test_tiny_canvas_hits_lower_clamp() {
        assert_eq!(plan(50, 100).block_size_px, 2);
    }

    #[test]
    fn test_block_size_never_grows_with_radius() {
        for extent in [64, 301, 600, 1024] {
            let mut previous = u32::MAX;
            for radius in 1..=50 {
                let size = plan(radius, extent).block_size_px;
                assert!((2..=40).contains(&size), "r={radius} extent={extent}: {size}");
                assert!(size <= previous, "r={radius} extent={extent}: grew to {size}");
                previous = size;
            }
        }
    }

    #[test]
    fn test_odd_extent_center_is_fractional() {
        assert_eq!(plan(3, 601).center_px, (300.5, 300.5));
    }

    #[test]
    fn test_custom_params() {
        let params = ScaleParams {
            padding_blocks: 0,
            min_block_px: 1,
            max_block_px: 100,
        };
        assert_eq!(params.plan(1, 300).block_size_px, 100);
        assert_eq!(params.plan(2, 300).block_size_px, 60);
    }

    #[test]
    fn test_zero_minimum_still_plans_visible_blocks() {
        let params = ScaleParams {
            min_block_px: 0,
            ..ScaleParams::default()
        };
        // floor(100 / 105) = 0 before the floor of one pixel.
        assert_eq!(params.plan(50, 100).block_size_px, 1);
        assert_eq!(params.plan(50, 0).block_size_px, 1);
    }

    #[test]
    fn test_validate() {
        assert!(ScaleParams::default().validate().is_ok());
        let zero = ScaleParams {
            min_block_px: 0,
            ..ScaleParams::default()
        };
        assert_eq!(zero.validate(), Err(InvalidScale::ZeroMinimum));
        let inverted = ScaleParams {
            min_block_px: 9,
            max_block_px: 3,
            ..ScaleParams::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(InvalidScale::InvertedClamp { min: 9, max: 3 })
        );
    }

    #[test]
    fn test_block_origin() {
        let p = plan(1, 600);
        assert_eq!(p.block_origin(0, 0), (280.0, 280.0));
        assert_eq!(p.block_origin(1, -1), (320.0, 240.0));
    }
}
