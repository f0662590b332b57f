//! # Raster Export
//!
//! Lossless PNG snapshot of a rendered [`Surface`].

use blockcircle_rendering::Surface;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{ExportError, ExportResult};

/// Encodes the current contents of `surface` as PNG.
///
/// # Errors
///
/// Returns [`ExportError::Precondition`] when no surface is attached and
/// [`ExportError::Encode`] if the encoder fails.
pub fn export_raster(surface: Option<&Surface>) -> ExportResult<Vec<u8>> {
    let surface = surface.ok_or(ExportError::Precondition(
        "no render surface attached; nothing to snapshot",
    ))?;

    let mut png = Vec::with_capacity(surface.as_bytes().len() / 4);
    PngEncoder::new(&mut png).write_image(
        surface.as_bytes(),
        surface.width(),
        surface.height(),
        ExtendedColorType::Rgba8,
    )?;

    tracing::debug!(
        width = surface.width(),
        height = surface.height(),
        bytes = png.len(),
        "raster exported"
    );
    Ok(png)
}
