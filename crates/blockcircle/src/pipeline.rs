//! # Circle Pipeline
//!
//! Recompute-on-change composition of the engine stages.
//!
//! ```text
//! apply(config):
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ 1. BUILD     BlockCache::get(config)  (solve + build, memoized)  │
//! │ 2. PLAN      ScaleParams::plan(radius, canvas extent)            │
//! │ 3. RENDER    GridRenderer::render(surface?, plan, blocks)        │
//! └─────────────────────────────────────────────────────────────────┘
//!
//! export_*():
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ 1. BUILD     BlockCache::get(config)  (same Arc as the preview)  │
//! │ 2. EXPORT    PNG snapshot of the surface / JSON block document   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every change starts from scratch. Nothing from the previous
//! configuration is carried over except cached block sets.

use std::sync::Arc;

use blockcircle_core::{BlockCache, CacheStats, CircleConfig, CircleStats, CoordinateSet};
use blockcircle_export::{export_document, export_raster, file_name, ExportKind, ExportResult};
use blockcircle_rendering::{GridRenderer, ScalePlan, Surface};

use crate::settings::{EngineSettings, SettingsResult};

/// Owns the current configuration and everything derived from it.
pub struct CirclePipeline {
    settings: EngineSettings,
    renderer: GridRenderer,
    cache: BlockCache,
    surface: Option<Surface>,
    config: CircleConfig,
    blocks: Arc<CoordinateSet>,
    plan: ScalePlan,
}

impl CirclePipeline {
    /// Creates a pipeline showing the default circle, with no surface yet.
    ///
    /// # Errors
    ///
    /// Returns the [`EngineSettings::validate`] error for unusable settings.
    pub fn new(settings: EngineSettings) -> SettingsResult<Self> {
        settings.validate()?;
        Ok(Self::with_valid_settings(settings))
    }

    fn with_valid_settings(settings: EngineSettings) -> Self {
        let cache = BlockCache::new();
        let config = CircleConfig::default();
        let blocks = cache.get(config);
        let plan = settings.scale.plan(config.radius(), settings.canvas_extent_px);

        Self {
            settings,
            renderer: GridRenderer::new(settings.palette),
            cache,
            surface: None,
            config,
            blocks,
            plan,
        }
    }

    /// Allocates the preview canvas and draws the current circle on it.
    pub fn attach_surface(&mut self) {
        self.surface = Some(Surface::square(self.settings.canvas_extent_px));
        self.redraw();
    }

    /// Releases the preview canvas, returning its last contents.
    pub fn detach_surface(&mut self) -> Option<Surface> {
        self.surface.take()
    }

    /// Switches to `config` and recomputes the preview.
    pub fn apply(&mut self, config: CircleConfig) {
        tracing::info!(radius = config.radius(), mode = %config.mode(), "configuration changed");

        self.config = config;
        self.blocks = self.cache.get(config);
        self.plan = self
            .settings
            .scale
            .plan(config.radius(), self.settings.canvas_extent_px);
        self.redraw();
    }

    fn redraw(&mut self) {
        self.renderer
            .render(self.surface.as_mut(), &self.plan, &self.blocks);
    }

    /// PNG snapshot of the preview.
    ///
    /// # Errors
    ///
    /// Returns [`blockcircle_export::ExportError::Precondition`] if no
    /// surface is attached.
    pub fn export_raster(&self) -> ExportResult<Vec<u8>> {
        let png = export_raster(self.surface.as_ref())?;
        self.log_export(ExportKind::Png, png.len());
        Ok(png)
    }

    /// JSON block document for the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`blockcircle_export::ExportError::Json`] if serialization
    /// fails.
    pub fn export_document(&self) -> ExportResult<Vec<u8>> {
        let blocks = self.cache.get(self.config);
        let json = export_document(self.config, &blocks)?;
        self.log_export(ExportKind::Json, json.len());
        Ok(json)
    }

    fn log_export(&self, kind: ExportKind, bytes: usize) {
        tracing::info!(
            file = %self.export_file_name(kind),
            mime = kind.mime_type(),
            bytes,
            "export ready"
        );
    }

    /// File name an export of `kind` should be saved under.
    #[must_use]
    pub fn export_file_name(&self, kind: ExportKind) -> String {
        file_name(self.config, kind)
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> CircleConfig {
        self.config
    }

    /// Blocks of the current configuration.
    #[must_use]
    pub fn blocks(&self) -> &CoordinateSet {
        &self.blocks
    }

    /// Scale plan of the current configuration.
    #[must_use]
    pub const fn plan(&self) -> &ScalePlan {
        &self.plan
    }

    /// Preview canvas, if attached.
    #[must_use]
    pub const fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Settings the pipeline was built with.
    #[must_use]
    pub const fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Diameter and block count of the current configuration.
    #[must_use]
    pub fn stats(&self) -> CircleStats {
        CircleStats::new(self.config, &self.blocks)
    }

    /// Block cache counters.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Default for CirclePipeline {
    fn default() -> Self {
        Self::with_valid_settings(EngineSettings::default())
    }
}
