//! # Engine Settings
//!
//! Canvas size, scale constants and palette, loaded once from TOML.
//!
//! Every field has a default, so an empty file is a valid settings file:
//!
//! ```toml
//! canvas_extent_px = 600
//!
//! [scale]
//! padding_blocks = 4
//! min_block_px = 2
//! max_block_px = 40
//!
//! [palette]
//! background = "#00000000"
//! grid = "#37415180"
//! block = { fill = "#10b981", stroke = "#059669" }
//! center = { fill = "#ef4444", stroke = "#dc2626" }
//! ```

use std::path::{Path, PathBuf};

use blockcircle_rendering::{InvalidScale, Palette, ScaleParams, DEFAULT_CANVAS_EXTENT_PX};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for these settings.
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Scale clamp range is unusable.
    #[error("invalid scale settings: {0}")]
    Scale(#[from] InvalidScale),

    /// Canvas of zero pixels.
    #[error("canvas_extent_px must be greater than zero")]
    ZeroCanvas,
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Everything the pipeline needs besides the circle itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    /// Side of the square preview canvas in pixels.
    pub canvas_extent_px: u32,
    /// Scale planner constants.
    pub scale: ScaleParams,
    /// Preview colors.
    pub palette: Palette,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            canvas_extent_px: DEFAULT_CANVAS_EXTENT_PX,
            scale: ScaleParams::default(),
            palette: Palette::default(),
        }
    }
}

impl EngineSettings {
    /// Parses and validates settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] for malformed TOML and a validation
    /// error for unusable values.
    pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`EngineSettings::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Checks that the settings can drive the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroCanvas`] or [`SettingsError::Scale`].
    pub fn validate(&self) -> SettingsResult<()> {
        if self.canvas_extent_px == 0 {
            return Err(SettingsError::ZeroCanvas);
        }
        self.scale.validate()?;
        Ok(())
    }
}
