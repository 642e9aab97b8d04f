//! Pure conversion functions: TOML config structs -> crate API config types.
//!
//! All range checks happen here, before any computation starts.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::config::*;

use nox_grid::SyntheticSource;
use nox_render::{Colormap, ExportFormat, RenderConfig};
use nox_resample::{ResampleConfig, ResampleMethod};

const SIGMA_RANGE: RangeInclusive<f64> = 0.1..=5.0;
const DISPLAY_RANGE: RangeInclusive<f64> = 0.0..=1.0;
const FACTOR_RANGE: RangeInclusive<usize> = 2..=10;

/// Everything a pipeline run needs, validated.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: SyntheticSource,
    pub sigma: f64,
    pub resample: ResampleConfig,
    pub render: RenderConfig,
    pub export_format: ExportFormat,
    pub output_dir: PathBuf,
}

/// Parses a downscaling method name into the corresponding enum variant.
pub fn parse_method(s: &str) -> Result<ResampleMethod> {
    s.parse()
        .with_context(|| format!("invalid downscale method {s:?}"))
}

/// Parses a colormap name. Only the sequential maps are selectable.
pub fn parse_colormap(s: &str) -> Result<Colormap> {
    let map: Colormap = s.parse().with_context(|| format!("invalid colormap {s:?}"))?;
    if !Colormap::SEQUENTIAL.contains(&map) {
        bail!("colormap {map} is reserved for difference maps");
    }
    Ok(map)
}

/// Parses an export format name.
pub fn parse_export_format(s: &str) -> Result<ExportFormat> {
    s.parse()
        .with_context(|| format!("invalid export format {s:?}"))
}

/// Builds a [`SyntheticSource`] from the TOML source configuration.
pub fn build_source(source: &SourceToml) -> Result<SyntheticSource> {
    let mut src = SyntheticSource::new()
        .with_shape(source.rows, source.cols)
        .with_noise_sd(source.noise_sd)
        .with_missing_fraction(source.missing_fraction);
    if let Some(s) = source.seed {
        src = src.with_seed(s);
    }
    src.validate().context("invalid [source] settings")?;
    Ok(src)
}

/// Checks the smoothing sigma against its allowed range.
pub fn build_sigma(smoothing: &SmoothingToml) -> Result<f64> {
    let sigma = smoothing.sigma;
    if !SIGMA_RANGE.contains(&sigma) {
        bail!(
            "sigma must be in [{}, {}], got {sigma}",
            SIGMA_RANGE.start(),
            SIGMA_RANGE.end()
        );
    }
    Ok(sigma)
}

/// Builds a [`ResampleConfig`] from the TOML downscale configuration.
pub fn build_resample_config(downscale: &DownscaleToml) -> Result<ResampleConfig> {
    if !FACTOR_RANGE.contains(&downscale.factor) {
        bail!(
            "downscale factor must be in [{}, {}], got {}",
            FACTOR_RANGE.start(),
            FACTOR_RANGE.end(),
            downscale.factor
        );
    }
    let method = parse_method(&downscale.method)?;
    let cfg = ResampleConfig::new()
        .with_factor(downscale.factor)
        .with_method(method);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`RenderConfig`] from the TOML display configuration.
pub fn build_render_config(display: &DisplayToml) -> Result<RenderConfig> {
    for (name, v) in [("vmin", display.vmin), ("vmax", display.vmax)] {
        if !DISPLAY_RANGE.contains(&v) {
            bail!("{name} must be in [0, 1], got {v}");
        }
    }
    if display.vmin >= display.vmax {
        bail!(
            "vmin ({}) must be less than vmax ({})",
            display.vmin,
            display.vmax
        );
    }
    let cfg = RenderConfig::new()
        .with_range(display.vmin, display.vmax)
        .with_colormap(parse_colormap(&display.colormap)?)
        .with_dpi(display.dpi);
    cfg.validate().context("invalid [display] settings")?;
    Ok(cfg)
}

/// Builds and validates every stage's settings.
pub fn build_settings(config: &NoxConfig) -> Result<Settings> {
    Ok(Settings {
        source: build_source(&config.source)?,
        sigma: build_sigma(&config.smoothing)?,
        resample: build_resample_config(&config.downscale)?,
        render: build_render_config(&config.display)?,
        export_format: parse_export_format(&config.export.format)?,
        output_dir: config.export.dir.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let s = build_settings(&NoxConfig::default()).unwrap();
        assert_eq!(s.sigma, 1.0);
        assert_eq!(s.resample.factor(), 4);
        assert_eq!(s.resample.method(), ResampleMethod::Bilinear);
        assert_eq!(s.render.colormap(), Colormap::Viridis);
        assert_eq!(s.export_format, ExportFormat::Png);
        assert_eq!(s.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn sigma_range() {
        assert!(build_sigma(&SmoothingToml { sigma: 0.1 }).is_ok());
        assert!(build_sigma(&SmoothingToml { sigma: 5.0 }).is_ok());
        assert!(build_sigma(&SmoothingToml { sigma: 0.05 }).is_err());
        assert!(build_sigma(&SmoothingToml { sigma: 5.5 }).is_err());
        assert!(build_sigma(&SmoothingToml { sigma: f64::NAN }).is_err());
    }

    #[test]
    fn factor_range() {
        let ds = |factor| DownscaleToml {
            factor,
            method: "bilinear".to_string(),
        };
        assert!(build_resample_config(&ds(1)).is_err());
        assert!(build_resample_config(&ds(2)).is_ok());
        assert!(build_resample_config(&ds(10)).is_ok());
        assert!(build_resample_config(&ds(11)).is_err());
    }

    #[test]
    fn method_names() {
        assert_eq!(
            parse_method("gaussian-nearest").unwrap(),
            ResampleMethod::GaussianNearest
        );
        assert_eq!(
            parse_method("Cubic Spline").unwrap(),
            ResampleMethod::CubicSpline
        );
        let err = parse_method("nearest-ish").unwrap_err();
        assert!(format!("{err:#}").contains("unknown resample method"));
    }

    #[test]
    fn coolwarm_not_selectable() {
        assert_eq!(parse_colormap("cividis").unwrap(), Colormap::Cividis);
        assert!(parse_colormap("coolwarm").is_err());
        assert!(parse_colormap("rainbow").is_err());
    }

    #[test]
    fn display_range_checks() {
        let display = |vmin, vmax| DisplayToml {
            vmin,
            vmax,
            ..DisplayToml::default()
        };
        assert!(build_render_config(&display(0.0, 0.5)).is_ok());
        assert!(build_render_config(&display(0.5, 0.5)).is_err());
        assert!(build_render_config(&display(0.6, 0.2)).is_err());
        assert!(build_render_config(&display(-0.1, 0.5)).is_err());
        assert!(build_render_config(&display(0.0, 1.5)).is_err());
    }

    #[test]
    fn export_formats_parse() {
        assert_eq!(parse_export_format("PDF").unwrap(), ExportFormat::Pdf);
        assert!(parse_export_format("svg").is_err());
    }

    #[test]
    fn invalid_source_reported() {
        let source = SourceToml {
            rows: 1,
            ..SourceToml::default()
        };
        let err = build_source(&source).unwrap_err();
        assert!(format!("{err:#}").contains("[source]"));
    }
}
