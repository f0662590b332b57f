//! # Grid Renderer
//!
//! Draws one circle preview onto a caller-owned [`Surface`].
//!
//! ## Draw Order
//!
//! ```text
//! 1. Clear to background
//! 2. Grid lines, expanding outward from the center in both directions
//! 3. Every block: filled square + one-pixel edge
//! 4. Center marker at (0, 0), last so nothing covers it
//! ```
//!
//! The grid starts at the center rather than the canvas edge so it stays
//! symmetric for any block size parity.

use blockcircle_core::CoordinateSet;

use crate::scale::ScalePlan;
use crate::style::{BlockStyle, Palette};
use crate::surface::Surface;

/// Paints circle previews with a fixed palette.
#[derive(Clone, Debug, Default)]
pub struct GridRenderer {
    palette: Palette,
}

impl GridRenderer {
    /// Creates a renderer using `palette`.
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// The palette in use.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Renders `blocks` onto `surface` using `plan`.
    ///
    /// A missing surface is the normal state before a canvas is attached,
    /// so `None` draws nothing.
    pub fn render(&self, surface: Option<&mut Surface>, plan: &ScalePlan, blocks: &CoordinateSet) {
        let Some(surface) = surface else {
            tracing::debug!("no surface attached, skipping render");
            return;
        };

        surface.clear(self.palette.background);
        self.draw_grid(surface, plan);
        for block in blocks {
            draw_block(surface, plan, block.x, block.y, self.palette.block);
        }
        draw_block(surface, plan, 0, 0, self.palette.center);

        tracing::debug!(
            blocks = blocks.len(),
            block_size_px = plan.block_size_px,
            "preview rendered"
        );
    }

    fn draw_grid(&self, surface: &mut Surface, plan: &ScalePlan) {
        if plan.block_size_px == 0 {
            return;
        }
        let step = plan.block_size_px as f32;
        let color = self.palette.grid;
        let (cx, cy) = plan.center_px;
        let width = surface.width() as f32;
        let height = surface.height() as f32;

        let mut x = cx;
        while x <= width {
            surface.vline(x, color);
            x += step;
        }
        // The center line is already drawn.
        let mut x = cx - step;
        while x >= 0.0 {
            surface.vline(x, color);
            x -= step;
        }

        let mut y = cy;
        while y <= height {
            surface.hline(y, color);
            y += step;
        }
        let mut y = cy - step;
        while y >= 0.0 {
            surface.hline(y, color);
            y -= step;
        }
    }
}

fn draw_block(surface: &mut Surface, plan: &ScalePlan, x: i32, y: i32, style: BlockStyle) {
    let (px, py) = plan.block_origin(x, y);
    let size = plan.block_size_px as f32;
    surface.fill_rect(px, py, size, size, style.fill);
    surface.stroke_rect(px, py, size, size, style.stroke);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::plan;
    use crate::style::Color;
    use blockcircle_core::{build, CircleConfig, CircleMode};

    fn render(radius: i64, mode: CircleMode, extent: u32) -> Surface {
        let config = CircleConfig::new(radius, mode).unwrap();
        let mut surface = Surface::square(extent);
        GridRenderer::default().render(
            Some(&mut surface),
            &plan(config.radius(), extent),
            &build(config),
        );
        surface
    }

    #[test]
    fn test_center_marker_is_drawn() {
        let s = render(1, CircleMode::Outline, 600);
        // Block (0, 0) spans pixels 280..320.
        assert_eq!(s.pixel(300, 300), Some(Color::RED));
        assert_eq!(s.pixel(280, 300), Some(Color::RED_DARK));
    }

    #[test]
    fn test_blocks_are_painted() {
        let s = render(1, CircleMode::Outline, 600);
        // Block (1, 0) spans x 320..360, y 280..320.
        assert_eq!(s.pixel(340, 300), Some(Color::EMERALD));
        assert_eq!(s.pixel(359, 300), Some(Color::EMERALD_DARK));
        // Block (0, -1) spans y 240..280.
        assert_eq!(s.pixel(300, 260), Some(Color::EMERALD));
        // Diagonal (1, 1) is not part of a radius-1 outline.
        assert_ne!(s.pixel(340, 340), Some(Color::EMERALD));
    }

    #[test]
    fn test_center_marker_wins_over_filled_center() {
        let s = render(5, CircleMode::Filled, 600);
        assert_eq!(s.pixel(300, 300), Some(Color::RED));
        assert_eq!(s.pixel(340, 300), Some(Color::EMERALD));
    }

    #[test]
    fn test_grid_is_centered() {
        let s = render(1, CircleMode::Outline, 600);
        let grid = Color::GRID;
        // Lines every 40 px through the center: ..., 20, 60, ..., 300, ..., 580.
        assert_eq!(s.pixel(20, 5), Some(grid));
        assert_eq!(s.pixel(580, 5), Some(grid));
        assert_eq!(s.pixel(5, 20), Some(grid));
        assert_eq!(s.pixel(21, 5), Some(Color::TRANSPARENT));
        // Both lines crossing: grid blended over itself.
        assert_eq!(s.pixel(20, 20), Some(grid.over(grid)));
    }

    #[test]
    fn test_radius_fifty_fits_canvas() {
        let s = render(50, CircleMode::Outline, 600);
        // Block size 5: block (50, 0) spans x 548..553 (297.5 + 250 rounds up).
        assert_eq!(s.pixel(550, 300), Some(Color::EMERALD));
        assert_eq!(s.pixel(50, 300), Some(Color::EMERALD));
    }

    #[test]
    fn test_missing_surface_is_noop() {
        let config = CircleConfig::default();
        GridRenderer::default().render(None, &plan(config.radius(), 600), &build(config));
    }

    #[test]
    fn test_zero_block_size_draws_no_grid() {
        let config = CircleConfig::default();
        let degenerate = ScalePlan {
            block_size_px: 0,
            ..plan(config.radius(), 100)
        };
        let mut s = Surface::square(100);
        GridRenderer::default().render(Some(&mut s), &degenerate, &build(config));
        assert!(s.pixels().iter().all(|&p| p == Color::TRANSPARENT));
    }

    #[test]
    fn test_background_is_applied() {
        let palette = Palette {
            background: Color::BLACK,
            ..Palette::default()
        };
        let config = CircleConfig::default();
        let mut s = Surface::square(64);
        GridRenderer::new(palette).render(Some(&mut s), &plan(config.radius(), 64), &build(config));
        assert_eq!(s.pixel(0, 1).map(|c| c.a), Some(255));
    }
}
