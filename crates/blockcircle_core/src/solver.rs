//! # Midpoint Circle Solver
//!
//! Integer-only rasterization of one circle octant.
//!
//! ## Algorithm
//!
//! The classic midpoint decision variable, scaled by 4 so every update is an
//! integer:
//!
//! ```text
//! x = 0, y = r, d = 3 - 2r
//! emit (x, y)
//! while y >= x:
//!     x += 1
//!     if d > 0: y -= 1; d += 4(x - y) + 10
//!     else:             d += 4x + 6
//!     emit (x, y)
//! ```
//!
//! `x` grows by one every step and `y` never grows, so the loop runs at most
//! `r + 1` times. The final emitted point sits just past the diagonal; the
//! eight-way reflection in the builder absorbs it as a duplicate.

use std::iter::FusedIterator;

/// A block position relative to the circle center, before screen mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LatticeOffset {
    /// Horizontal offset in blocks.
    pub dx: i32,
    /// Vertical offset in blocks.
    pub dy: i32,
}

impl LatticeOffset {
    /// Creates a new offset.
    #[inline]
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// The eight octant reflections of this offset.
    ///
    /// Order is fixed: `(x,y) (-x,y) (x,-y) (-x,-y) (y,x) (-y,x) (y,-x) (-y,-x)`.
    /// Exported block order depends on it.
    #[inline]
    #[must_use]
    pub const fn reflections(self) -> [Self; 8] {
        let (x, y) = (self.dx, self.dy);
        [
            Self::new(x, y),
            Self::new(-x, y),
            Self::new(x, -y),
            Self::new(-x, -y),
            Self::new(y, x),
            Self::new(-y, x),
            Self::new(y, -x),
            Self::new(-y, -x),
        ]
    }

    /// Chebyshev distance from the origin.
    #[inline]
    #[must_use]
    pub const fn chebyshev(self) -> i32 {
        let ax = self.dx.abs();
        let ay = self.dy.abs();
        if ax > ay {
            ax
        } else {
            ay
        }
    }
}

/// Lazily walks the octant points of a circle.
#[derive(Clone, Debug)]
pub struct OctantIter {
    x: i32,
    y: i32,
    d: i32,
    started: bool,
    done: bool,
}

impl OctantIter {
    /// Starts a walk for `radius`.
    ///
    /// Callers pass radii validated by [`crate::CircleConfig`].
    #[inline]
    #[must_use]
    pub const fn new(radius: i32) -> Self {
        Self {
            x: 0,
            y: radius,
            d: 3 - 2 * radius,
            started: false,
            done: false,
        }
    }
}

impl Iterator for OctantIter {
    type Item = LatticeOffset;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(LatticeOffset::new(self.x, self.y));
        }
        if self.y < self.x {
            self.done = true;
            return None;
        }

        self.x += 1;
        if self.d > 0 {
            self.y -= 1;
            self.d += 4 * (self.x - self.y) + 10;
        } else {
            self.d += 4 * self.x + 6;
        }
        Some(LatticeOffset::new(self.x, self.y))
    }
}

impl FusedIterator for OctantIter {}

/// Solves one octant of a circle of `radius` blocks.
///
/// Returns the same sequence for the same radius on every call.
#[must_use]
pub fn solve(radius: i32) -> Vec<LatticeOffset> {
    let points: Vec<LatticeOffset> = OctantIter::new(radius).collect();
    tracing::debug!(radius, steps = points.len(), "octant solved");
    points
}
