use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::cli::PipelineArgs;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "nox.toml";

/// Top-level nox configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoxConfig {
    /// Synthetic data settings.
    #[serde(default)]
    pub source: SourceToml,

    /// Smoothing settings.
    #[serde(default)]
    pub smoothing: SmoothingToml,

    /// Rendering settings.
    #[serde(default)]
    pub display: DisplayToml,

    /// Downscaling settings.
    #[serde(default)]
    pub downscale: DownscaleToml,

    /// Export settings.
    #[serde(default)]
    pub export: ExportToml,
}

impl NoxConfig {
    /// Reads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and built-in defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    info!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Applies CLI overrides on top of file values.
    pub fn with_overrides(mut self, args: &PipelineArgs) -> Self {
        if let Some(dir) = &args.output_dir {
            self.export.dir = dir.clone();
        }
        if let Some(seed) = args.seed {
            self.source.seed = Some(seed);
        }
        if let Some(sigma) = args.sigma {
            self.smoothing.sigma = sigma;
        }
        if let Some(factor) = args.factor {
            self.downscale.factor = factor;
        }
        if let Some(method) = &args.method {
            self.downscale.method = method.clone();
        }
        if let Some(colormap) = &args.colormap {
            self.display.colormap = colormap.clone();
        }
        self
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceToml {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(default = "default_noise_sd")]
    pub noise_sd: f64,
    #[serde(default)]
    pub missing_fraction: f64,
}

impl Default for SourceToml {
    fn default() -> Self {
        Self {
            seed: None,
            rows: default_rows(),
            cols: default_cols(),
            noise_sd: default_noise_sd(),
            missing_fraction: 0.0,
        }
    }
}

fn default_rows() -> usize {
    180
}
fn default_cols() -> usize {
    360
}
fn default_noise_sd() -> f64 {
    0.1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmoothingToml {
    #[serde(default = "default_sigma")]
    pub sigma: f64,
}

impl Default for SmoothingToml {
    fn default() -> Self {
        Self {
            sigma: default_sigma(),
        }
    }
}

fn default_sigma() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default)]
    pub vmin: f64,
    #[serde(default = "default_vmax")]
    pub vmax: f64,
    #[serde(default = "default_colormap")]
    pub colormap: String,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            vmin: 0.0,
            vmax: default_vmax(),
            colormap: default_colormap(),
            dpi: default_dpi(),
        }
    }
}

fn default_vmax() -> f64 {
    0.5
}
fn default_colormap() -> String {
    "viridis".to_string()
}
fn default_dpi() -> u32 {
    100
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DownscaleToml {
    #[serde(default = "default_factor")]
    pub factor: usize,
    #[serde(default = "default_method")]
    pub method: String,
}

impl Default for DownscaleToml {
    fn default() -> Self {
        Self {
            factor: default_factor(),
            method: default_method(),
        }
    }
}

fn default_factor() -> usize {
    4
}
fn default_method() -> String {
    "bilinear".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for ExportToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            dir: default_dir(),
        }
    }
}

fn default_format() -> String {
    "png".to_string()
}
fn default_dir() -> PathBuf {
    PathBuf::from("output")
}
