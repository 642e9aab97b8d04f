//! Run command: full pipeline, one image per stage, JSON summary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use nox_grid::{AxisPair, Field};
use nox_render::{ExportArtifact, HeatmapRenderer, Renderer};

use crate::cli::RunArgs;
use crate::config::NoxConfig;
use crate::convert;
use crate::pipeline;

/// File name of the statistics report.
const SUMMARY_FILE: &str = "summary.json";

/// Run the pipeline and write every stage to the output directory.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();

    // 1. Load config and validate every setting before computing anything
    let config = NoxConfig::load(args.pipeline.config.as_deref())?.with_overrides(&args.pipeline);
    let settings = convert::build_settings(&config)?;

    // 2. Process
    let output = pipeline::run(&settings.source, settings.sigma, &settings.resample)?;

    // 3. Render each stage
    let dir = settings.output_dir.as_path();
    let stage = HeatmapRenderer::new(settings.render.clone());
    let diff = HeatmapRenderer::new(settings.render.for_difference());
    let factor = settings.resample.factor();

    write_stage(
        &stage,
        output.original.field(),
        output.original.axes(),
        "Original NO₂ Data",
        "original.png",
        dir,
    )?;
    write_stage(
        &stage,
        output.processed.field(),
        output.processed.axes(),
        "Processed NO₂ Data",
        "processed.png",
        dir,
    )?;
    write_stage(
        &stage,
        output.downscaled.field(),
        output.downscaled.axes(),
        &format!("Downscaled NO₂ Data ({factor}x)"),
        "downscaled.png",
        dir,
    )?;
    write_stage(
        &diff,
        &output.difference,
        output.downscaled.axes(),
        "Difference: Downscaled - Original",
        "difference.png",
        dir,
    )?;

    // 4. Statistics
    let summary_path = dir.join(SUMMARY_FILE);
    let json =
        serde_json::to_string_pretty(&output.summary).context("failed to serialise summary")?;
    fs::write(&summary_path, json)
        .with_context(|| format!("failed to write summary: {}", summary_path.display()))?;

    let s = &output.summary;
    info!(
        original_mean = ?s.original.mean,
        processed_mean = ?s.processed.mean,
        downscaled_mean = ?s.downscaled.mean,
        "run complete"
    );
    println!("Original Mean:   {}", format_mean(s.original.mean));
    println!("Processed Mean:  {}", format_mean(s.processed.mean));
    println!("Downscaled Mean: {}", format_mean(s.downscaled.mean));
    println!("Output written to {}", dir.display());
    Ok(())
}

fn write_stage(
    renderer: &HeatmapRenderer,
    field: &Field,
    axes: &AxisPair,
    title: &str,
    file_name: &str,
    dir: &Path,
) -> Result<()> {
    let image = renderer
        .render(field, axes, title)
        .with_context(|| format!("failed to render {title:?}"))?;
    ExportArtifact::png(file_name, image.image())
        .and_then(|a| a.write_to(dir))
        .with_context(|| format!("failed to write {file_name} to {}", dir.display()))?;
    Ok(())
}

fn format_mean(mean: Option<f64>) -> String {
    mean.map_or_else(|| "n/a".to_string(), |m| format!("{m:.4}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn means_use_four_decimals() {
        assert_eq!(format_mean(Some(2.0 / 3.0)), "0.6667");
        assert_eq!(format_mean(None), "n/a");
    }
}
