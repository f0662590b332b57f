//! # BLOCKCIRCLE Export
//!
//! Turns a rendered preview and its block set into files.
//!
//! - `export_raster`: PNG bytes of a [`blockcircle_rendering::Surface`]
//! - `export_document`: JSON block list with a stable schema
//! - `file_name`: `minecraft-circle-r{radius}-{mode}.{png,json}`
//!
//! Writing the bytes anywhere is the caller's business.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod document;
pub mod error;
pub mod naming;
pub mod raster;

pub use document::{export_document, CircleDocument};
pub use error::{ExportError, ExportResult};
pub use naming::{file_name, ExportKind, FILE_PREFIX};
pub use raster::export_raster;
