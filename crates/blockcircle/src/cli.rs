//! # Command Line Frontend
//!
//! The input boundary of the engine. User input is coerced into range here,
//! the way a radius slider would, so the engine itself can stay strict.

use std::path::{Path, PathBuf};

use blockcircle_core::{CircleConfig, CircleError, CircleStats, RADIUS_MAX, RADIUS_MIN};
use blockcircle_export::{ExportError, ExportKind};
use clap::Parser;
use thiserror::Error;

use crate::pipeline::CirclePipeline;
use crate::settings::{EngineSettings, SettingsError};

/// Generate block-perfect circles for Minecraft builds.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "blockcircle", version, about)]
pub struct Cli {
    /// Circle radius in blocks (coerced into 1..=50).
    #[arg(short, long, default_value = "5", allow_hyphen_values = true)]
    pub radius: String,

    /// Fill mode: "outline" or "filled".
    #[arg(short, long, default_value = "outline")]
    pub mode: String,

    /// Directory exported files are written to.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// TOML settings file (canvas size, scale, palette).
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Write the PNG preview.
    #[arg(long)]
    pub png: bool,

    /// Write the JSON block document.
    #[arg(long)]
    pub json: bool,

    /// Print circle statistics.
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    /// Export kinds requested; both when neither flag is given.
    #[must_use]
    pub fn export_kinds(&self) -> Vec<ExportKind> {
        match (self.png, self.json) {
            (false, false) => vec![ExportKind::Png, ExportKind::Json],
            (png, json) => [(png, ExportKind::Png), (json, ExportKind::Json)]
                .into_iter()
                .filter_map(|(wanted, kind)| wanted.then_some(kind))
                .collect(),
        }
    }
}

/// Errors surfaced to the command line user.
#[derive(Error, Debug)]
pub enum CliError {
    /// Rejected circle configuration.
    #[error(transparent)]
    Circle(#[from] CircleError),

    /// Unusable settings file.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Export failure.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

/// Coerces raw radius input into the supported range.
///
/// Only the leading integer counts, so `"7.5"` and `"7 blocks"` are 7.
/// Input without one, or zero, becomes the minimum radius.
#[must_use]
pub fn coerce_radius(raw: &str) -> i64 {
    match leading_integer(raw) {
        None | Some(0) => i64::from(RADIUS_MIN),
        Some(r) => r.clamp(i64::from(RADIUS_MIN), i64::from(RADIUS_MAX)),
    }
}

/// Optional sign and decimal digits at the start of `raw`, after whitespace.
/// Digit runs too long for `i64` saturate.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let magnitude = rest[..len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Runs one invocation: configure, render, export.
///
/// # Errors
///
/// Returns [`CliError`] for an unknown mode, a bad settings file, an export
/// failure, or an unwritable output directory.
pub fn run(cli: &Cli) -> Result<Vec<PathBuf>, CliError> {
    let settings = match &cli.settings {
        Some(path) => EngineSettings::load(path)?,
        None => EngineSettings::default(),
    };
    let config = CircleConfig::parse(coerce_radius(&cli.radius), &cli.mode)?;

    let mut pipeline = CirclePipeline::new(settings)?;
    pipeline.attach_surface();
    pipeline.apply(config);

    if cli.stats {
        println!("{}", format_stats(&pipeline.stats()));
    }

    let mut written = Vec::new();
    for kind in cli.export_kinds() {
        let bytes = match kind {
            ExportKind::Png => pipeline.export_raster()?,
            ExportKind::Json => pipeline.export_document()?,
        };
        let path = cli.out_dir.join(pipeline.export_file_name(kind));
        write_file(&path, &bytes)?;
        written.push(path);
    }
    Ok(written)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    std::fs::write(path, bytes).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved");
    Ok(())
}

/// Renders stats as the preview side panel shows them.
#[must_use]
pub fn format_stats(stats: &CircleStats) -> String {
    format!(
        "Radius:       {} blocks\nDiameter:     {} blocks\nTotal Blocks: {}\nMode:         {}",
        stats.radius, stats.diameter, stats.total_blocks, stats.mode
    )
}
