//! The processing chain: load, smooth, downscale, difference, summarise.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use nox_grid::{Field, GridData, GridSource};
use nox_resample::{ResampleConfig, ResampleResult, difference, resample_grid};
use nox_smooth::smooth;

/// Every intermediate field of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Field as loaded, possibly with missing cells.
    pub original: GridData,
    /// Gap-filled and smoothed field, on the original axes.
    pub processed: GridData,
    /// Upsampled field and its finer axes.
    pub downscaled: ResampleResult,
    /// Downscaled minus block-replicated processed field.
    pub difference: Field,
    /// Statistics for each stage.
    pub summary: Summary,
}

/// Summary statistics for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageSummary {
    pub rows: usize,
    pub cols: usize,
    /// `None` when every cell is missing.
    pub mean: Option<f64>,
    pub sd: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub missing: usize,
}

impl StageSummary {
    /// Statistics over the non-missing cells of `field`.
    fn ignoring_missing(field: &Field) -> Self {
        let values = field.values();
        let kept: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        Self::build(field, nox_stats::nanmean(values), &kept)
    }

    /// Statistics over every cell of a gap-free `field`.
    fn complete(field: &Field) -> Self {
        let values = field.values();
        Self::build(field, Some(nox_stats::mean(values)), values)
    }

    fn build(field: &Field, mean: Option<f64>, kept: &[f64]) -> Self {
        let range = nox_stats::min_max(kept);
        Self {
            rows: field.rows(),
            cols: field.cols(),
            mean,
            sd: nox_stats::sd(kept),
            min: range.map(|r| r.0),
            max: range.map(|r| r.1),
            missing: nox_stats::count_missing(field.values()),
        }
    }
}

/// Statistics for the whole run, plus the settings that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub sigma: f64,
    pub factor: usize,
    pub method: String,
    pub original: StageSummary,
    pub processed: StageSummary,
    pub downscaled: StageSummary,
    pub difference: StageSummary,
}

/// Runs every stage on the grid produced by `source`.
pub fn run(
    source: &impl GridSource,
    sigma: f64,
    resample: &ResampleConfig,
) -> Result<PipelineOutput> {
    let _span = info_span!("pipeline", sigma, factor = resample.factor(), method = %resample.method())
        .entered();

    let original = source.load().context("failed to load source grid")?;
    info!(
        rows = original.field().rows(),
        cols = original.field().cols(),
        missing = original.field().count_missing(),
        "source grid loaded"
    );

    let smoothed = smooth(original.field(), sigma).context("smoothing failed")?;
    let processed = GridData::new(smoothed, original.axes().clone())?;

    let downscaled = resample_grid(&processed, resample).context("downscaling failed")?;
    info!(
        rows = downscaled.field().rows(),
        cols = downscaled.field().cols(),
        "field downscaled"
    );

    let difference = difference(downscaled.field(), processed.field(), resample.factor())
        .context("difference map failed")?;

    let summary = Summary {
        sigma,
        factor: resample.factor(),
        method: resample.method().to_string(),
        original: StageSummary::ignoring_missing(original.field()),
        processed: StageSummary::complete(processed.field()),
        downscaled: StageSummary::complete(downscaled.field()),
        difference: StageSummary::complete(&difference),
    };

    Ok(PipelineOutput {
        original,
        processed,
        downscaled,
        difference,
        summary,
    })
}
