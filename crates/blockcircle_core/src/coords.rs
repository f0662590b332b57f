//! # Coordinate Sets
//!
//! Insertion-ordered block positions with O(1) membership.
//!
//! The builder revisits cells from several octant passes, so every insert
//! first checks membership. Order of first insertion is preserved because
//! the exported document lists blocks in that order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::solver::LatticeOffset;

/// One block in an exported circle.
///
/// `z` is always `0`. It exists for tools that place blocks in 3-D.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPosition {
    /// Horizontal offset from the center block.
    pub x: i32,
    /// Vertical offset from the center block.
    pub y: i32,
    /// Layer, always 0.
    pub z: i32,
}

impl BlockPosition {
    /// Creates a position on the z = 0 layer.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }
}

impl From<LatticeOffset> for BlockPosition {
    #[inline]
    fn from(offset: LatticeOffset) -> Self {
        Self::new(offset.dx, offset.dy)
    }
}

/// Deduplicated, insertion-ordered set of blocks.
#[derive(Clone, Debug, Default)]
pub struct CoordinateSet {
    /// Blocks in order of first insertion.
    order: Vec<BlockPosition>,
    /// Membership index keyed by `(x, y)`.
    seen: HashSet<(i32, i32)>,
}

impl CoordinateSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set sized for `capacity` blocks.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Inserts `(x, y)` unless already present.
    ///
    /// Returns true if the block was new.
    #[inline]
    pub fn insert(&mut self, x: i32, y: i32) -> bool {
        if !self.seen.insert((x, y)) {
            return false;
        }
        self.order.push(BlockPosition::new(x, y));
        true
    }

    /// Returns true if `(x, y)` is in the set.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.seen.contains(&(x, y))
    }

    /// Number of blocks.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if there are no blocks.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Blocks in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[BlockPosition] {
        &self.order
    }

    /// Iterates blocks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, BlockPosition> {
        self.order.iter()
    }

    /// Returns true if every block of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.seen.is_subset(&self.seen)
    }
}

impl PartialEq for CoordinateSet {
    /// Sets are equal when they hold the same blocks in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for CoordinateSet {}

impl<'a> IntoIterator for &'a CoordinateSet {
    type Item = &'a BlockPosition;
    type IntoIter = std::slice::Iter<'a, BlockPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(i32, i32)> for CoordinateSet {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (x, y) in iter {
            set.insert(x, y);
        }
        set
    }
}
