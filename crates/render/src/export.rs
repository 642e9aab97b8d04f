//! Encoding rendered images for export.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::{ImageFormat, RgbImage};
use tracing::info;

use crate::error::RenderError;
use crate::heatmap::RenderedImage;

/// Resolution used when rendering for export.
pub const EXPORT_DPI: u32 = 300;

/// File name of the exported view.
pub const EXPORT_FILE_NAME: &str = "no2_data.png";

/// Requested export encoding. Only [`ExportFormat::Png`] has an encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Png,
    Pdf,
    Csv,
}

impl ExportFormat {
    /// Lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "pdf" => Ok(Self::Pdf),
            "csv" => Ok(Self::Csv),
            _ => Err(RenderError::InvalidConfig {
                reason: format!("unknown export format: {s:?}"),
            }),
        }
    }
}

/// Encoded bytes ready to be written or served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    file_name: String,
    mime: &'static str,
    bytes: Vec<u8>,
}

impl ExportArtifact {
    /// PNG-encodes `image` under `file_name`.
    pub fn png(file_name: impl Into<String>, image: &RgbImage) -> Result<Self, RenderError> {
        Ok(Self {
            file_name: file_name.into(),
            mime: "image/png",
            bytes: encode_png(image)?,
        })
    }

    /// Suggested file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// MIME type of the bytes.
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Encoded contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Writes the artifact into `dir`, creating it if needed, and returns the
    /// full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, RenderError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        info!(path = %path.display(), bytes = self.bytes.len(), "artifact written");
        Ok(path)
    }
}

/// PNG-encodes `image` into an in-memory buffer.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Encodes `image` as [`EXPORT_FILE_NAME`] in the requested format.
///
/// # Errors
///
/// Returns [`RenderError::UnsupportedFormat`] for PDF and CSV.
#[tracing::instrument(skip_all, fields(format = %format, title = image.title()))]
pub fn export(image: &RenderedImage, format: ExportFormat) -> Result<ExportArtifact, RenderError> {
    match format {
        ExportFormat::Png => ExportArtifact::png(EXPORT_FILE_NAME, image.image()),
        ExportFormat::Pdf | ExportFormat::Csv => Err(RenderError::UnsupportedFormat { format }),
    }
}
