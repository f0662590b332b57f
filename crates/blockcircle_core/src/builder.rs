//! # Coordinate Set Builder
//!
//! Expands solver octant points into the full block set for a fill mode.
//!
//! - **Outline**: each octant point is reflected eight ways.
//! - **Filled**: each octant point contributes two horizontal span pairs,
//!   `[-x, x]` at rows `±y` and `[-y, y]` at rows `±x`. Spans, not just
//!   reflected points, because the boundary's horizontal extent changes at
//!   every solver step and interior rows would otherwise be left open.

use crate::config::{CircleConfig, CircleMode};
use crate::coords::CoordinateSet;
use crate::solver::{LatticeOffset, OctantIter};

/// Builds the block set for `config`.
///
/// Output order is insertion order and is identical for identical input.
#[must_use]
pub fn build(config: CircleConfig) -> CoordinateSet {
    let radius = config.radius();
    let mut set = CoordinateSet::with_capacity(capacity_hint(config));

    for point in OctantIter::new(radius) {
        match config.mode() {
            CircleMode::Outline => plot_outline(&mut set, point),
            CircleMode::Filled => plot_filled(&mut set, point),
        }
    }

    tracing::debug!(
        radius,
        mode = %config.mode(),
        blocks = set.len(),
        "coordinate set built"
    );
    set
}

#[inline]
fn plot_outline(set: &mut CoordinateSet, point: LatticeOffset) {
    for p in point.reflections() {
        set.insert(p.dx, p.dy);
    }
}

#[inline]
fn plot_filled(set: &mut CoordinateSet, point: LatticeOffset) {
    let LatticeOffset { dx: x, dy: y } = point;
    for i in -x..=x {
        set.insert(i, y);
        set.insert(i, -y);
    }
    for i in -y..=y {
        set.insert(i, x);
        set.insert(i, -x);
    }
}

/// Upper-bound estimate so large radii insert without rehashing.
fn capacity_hint(config: CircleConfig) -> usize {
    let r = config.radius() as usize;
    match config.mode() {
        CircleMode::Outline => 8 * (r + 1),
        CircleMode::Filled => (2 * r + 1) * (2 * r + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RADIUS_MAX;
    use crate::coords::BlockPosition;

    fn config(radius: i64, mode: CircleMode) -> CircleConfig {
        CircleConfig::new(radius, mode).unwrap()
    }

    #[test]
    fn test_radius_one_outline_is_four_neighbourhood() {
        let set = build(config(1, CircleMode::Outline));
        assert_eq!(
            set.as_slice(),
            &[
                BlockPosition::new(0, 1),
                BlockPosition::new(0, -1),
                BlockPosition::new(1, 0),
                BlockPosition::new(-1, 0),
            ]
        );
    }

    #[rustfmt::skip]
    #[test]
    fn test_radius_three_outline_order() {
        let got: Vec<(i32, i32)> = build(config(3, CircleMode::Outline))
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        assert_eq!(
            got,
            vec![
                (0, 3), (0, -3), (3, 0), (-3, 0),
                (1, 3), (-1, 3), (1, -3), (-1, -3),
                (3, 1), (-3, 1), (3, -1), (-3, -1),
                (2, 2), (-2, 2), (2, -2), (-2, -2),
            ]
        );
    }

    #[test]
    fn test_known_block_counts() {
        let cases = [
            (1, 4, 5),
            (2, 12, 21),
            (3, 16, 37),
            (5, 24, 81),
            (10, 52, 321),
            (50, 276, 7857),
        ];
        for (radius, outline, filled) in cases {
            let got = build(config(radius, CircleMode::Outline)).len();
            assert_eq!(got, outline, "outline r={radius}");
            let got = build(config(radius, CircleMode::Filled)).len();
            assert_eq!(got, filled, "filled r={radius}");
        }
    }

    #[test]
    fn test_outline_is_mirror_symmetric() {
        for radius in 1..=i64::from(RADIUS_MAX) {
            let set = build(config(radius, CircleMode::Outline));
            for p in &set {
                assert!(set.contains(-p.x, p.y), "r={radius}: missing mirror of {p:?}");
                assert!(set.contains(p.x, -p.y), "r={radius}: missing mirror of {p:?}");
                assert!(set.contains(-p.x, -p.y), "r={radius}: missing mirror of {p:?}");
            }
        }
    }

    #[test]
    fn test_filled_contains_outline() {
        for radius in 1..=i64::from(RADIUS_MAX) {
            let outline = build(config(radius, CircleMode::Outline));
            let filled = build(config(radius, CircleMode::Filled));
            assert!(filled.is_superset(&outline), "r={radius}");
            assert!(filled.len() > outline.len(), "r={radius}");
            assert!(filled.contains(0, 0), "r={radius}: filled circle lost its center");
        }
    }

    #[test]
    fn test_no_block_exceeds_radius() {
        for radius in 1..=RADIUS_MAX {
            for mode in CircleMode::ALL {
                let set = build(config(i64::from(radius), mode));
                let max = set.iter().map(|p| p.x.abs().max(p.y.abs())).max().unwrap();
                assert_eq!(max, radius, "r={radius} {mode}");
            }
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        for radius in 1..=i64::from(RADIUS_MAX) {
            for mode in CircleMode::ALL {
                let c = config(radius, mode);
                assert_eq!(build(c), build(c));
            }
        }
    }

    #[test]
    fn test_outline_never_contains_center() {
        for radius in 1..=i64::from(RADIUS_MAX) {
            assert!(!build(config(radius, CircleMode::Outline)).contains(0, 0));
        }
    }
}
