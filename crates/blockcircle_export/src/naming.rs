//! Export file names: `minecraft-circle-r{radius}-{mode}.{ext}`.

use blockcircle_core::CircleConfig;

/// Prefix shared by every exported file.
pub const FILE_PREFIX: &str = "minecraft-circle";

/// Kind of exported artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportKind {
    /// PNG snapshot of the preview.
    Png,
    /// JSON block document.
    Json,
}

impl ExportKind {
    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Json => "json",
        }
    }

    /// MIME type of the artifact.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Json => "application/json",
        }
    }
}

/// File name for exporting `config` as `kind`.
#[must_use]
pub fn file_name(config: CircleConfig, kind: ExportKind) -> String {
    format!(
        "{FILE_PREFIX}-r{}-{}.{}",
        config.radius(),
        config.mode(),
        kind.extension()
    )
}
