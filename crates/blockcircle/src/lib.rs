//! # BLOCKCIRCLE
//!
//! Block-perfect circles for Minecraft builds, integrating all stages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           BLOCKCIRCLE                               │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  ┌─────────────────┐     ┌─────────────────┐     ┌───────────────┐  │
//! │  │   CORE          │     │   RENDERING     │     │   EXPORT      │  │
//! │  │                 │────>│                 │────>│               │  │
//! │  │  • Solver       │     │  • Scale Planner│     │  • PNG        │  │
//! │  │  • Builder      │     │  • Surface      │     │  • JSON       │  │
//! │  │  • Cache        │     │  • Grid Renderer│     │  • File names │  │
//! │  └─────────────────┘     └─────────────────┘     └───────────────┘  │
//! │           │                       │                      │          │
//! │           └──────────────> CirclePipeline <──────────────┘          │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `pipeline`: Recompute-on-change composition of the stages
//! - `settings`: TOML-loaded canvas, scale and palette settings
//! - `cli`: Command line input boundary and file writing

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cli;
pub mod pipeline;
pub mod settings;

// Re-export the stages
pub use blockcircle_core as core;
pub use blockcircle_export as export;
pub use blockcircle_rendering as rendering;

pub use cli::{coerce_radius, Cli, CliError};
pub use pipeline::CirclePipeline;
pub use settings::{EngineSettings, SettingsError, SettingsResult};
