//! # BLOCKCIRCLE Core
//!
//! Integer rasterization of circles onto a square block lattice.
//!
//! ## Design Principles
//!
//! 1. **Integer only**: no floating point, no trigonometry
//! 2. **Octant symmetry**: solve 1/8 of the boundary, reflect the rest
//! 3. **Deduplicated**: every block appears exactly once, in first-insertion order
//! 4. **Deterministic**: preview and export see bit-identical sets
//!
//! ## Core Components
//!
//! - `solve`: Midpoint circle solver over one octant
//! - `build`: Expands octant points into a `CoordinateSet` per `CircleMode`
//! - `BlockCache`: Memoized sets keyed by `(radius, mode)`
//! - `CircleStats`: Diameter and block count for display
//!
//! ## Example
//!
//! ```rust
//! use blockcircle_core::{build, CircleConfig, CircleMode};
//!
//! let config = CircleConfig::new(1, CircleMode::Outline)?;
//! let blocks = build(config);
//!
//! assert_eq!(blocks.len(), 4);
//! assert!(blocks.contains(0, 1) && blocks.contains(-1, 0));
//! # Ok::<(), blockcircle_core::CircleError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod builder;
pub mod cache;
pub mod config;
pub mod coords;
pub mod error;
pub mod solver;
pub mod stats;

pub use builder::build;
pub use cache::{BlockCache, CacheStats};
pub use config::{CircleConfig, CircleMode, DEFAULT_RADIUS, RADIUS_MAX, RADIUS_MIN};
pub use coords::{BlockPosition, CoordinateSet};
pub use error::{CircleError, CircleResult};
pub use solver::{solve, LatticeOffset, OctantIter};
pub use stats::CircleStats;
