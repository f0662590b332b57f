//! # BLOCKCIRCLE Rendering
//!
//! CPU renderer for circle previews.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    PREVIEW PIPELINE                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  radius ──> ScaleParams::plan ──> ScalePlan              │
//! │                                       │                  │
//! │  CoordinateSet ──────────────> GridRenderer ──> Surface  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The surface belongs to the caller. The renderer keeps no state between
//! calls beyond its palette.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod renderer;
pub mod scale;
pub mod style;
pub mod surface;

pub use renderer::GridRenderer;
pub use scale::{plan, InvalidScale, ScaleParams, ScalePlan, DEFAULT_CANVAS_EXTENT_PX};
pub use style::{BlockStyle, Color, InvalidColor, Palette};
pub use surface::Surface;
