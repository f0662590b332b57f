//! # Raster Surface
//!
//! A caller-owned RGBA8 pixel buffer, row-major, origin top-left.
//!
//! Drawing primitives take pixel coordinates as `f32` and snap them to the
//! nearest whole pixel. Everything outside the surface is clipped silently.

use crate::style::Color;

/// A rectangular RGBA8 raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Surface {
    /// Creates a transparent surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Creates a transparent `extent` x `extent` surface.
    #[must_use]
    pub fn square(extent: u32) -> Self {
        Self::new(extent, extent)
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in row-major order.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw RGBA bytes, 4 per pixel.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Reads one pixel.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(i64::from(x), i64::from(y)).map(|i| self.pixels[i])
    }

    /// Overwrites every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Composites `color` onto one pixel.
    #[inline]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.over(self.pixels[i]);
        }
    }

    /// Fills the pixel rectangle covering `[x, x + w) x [y, y + h)`.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Draws a one-pixel border just inside `[x, x + w) x [y, y + h)`.
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let (x0, y0) = (snap(x), snap(y));
        let (x1, y1) = (snap(x + w), snap(y + h));
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        for px in x0..x1 {
            self.blend_pixel(px, y0, color);
            if y1 - 1 > y0 {
                self.blend_pixel(px, y1 - 1, color);
            }
        }
        for py in (y0 + 1)..(y1 - 1) {
            self.blend_pixel(x0, py, color);
            if x1 - 1 > x0 {
                self.blend_pixel(x1 - 1, py, color);
            }
        }
    }

    /// Draws a full-height one-pixel line at column `floor(x)`.
    pub fn vline(&mut self, x: f32, color: Color) {
        let col = x.floor() as i64;
        for py in 0..i64::from(self.height) {
            self.blend_pixel(col, py, color);
        }
    }

    /// Draws a full-width one-pixel line at row `floor(y)`.
    pub fn hline(&mut self, y: f32, color: Color) {
        let row = y.floor() as i64;
        for px in 0..i64::from(self.width) {
            self.blend_pixel(px, row, color);
        }
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Snapped pixel bounds of a rectangle, clipped to the surface.
    fn clip(&self, x: f32, y: f32, w: f32, h: f32) -> Option<(i64, i64, i64, i64)> {
        let x0 = snap(x).max(0);
        let y0 = snap(y).max(0);
        let x1 = snap(x + w).min(i64::from(self.width));
        let y1 = snap(y + h).min(i64::from(self.height));
        (x1 > x0 && y1 > y0).then_some((x0, y0, x1, y1))
    }
}

#[inline]
fn snap(v: f32) -> i64 {
    v.round() as i64
}
