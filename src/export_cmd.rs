//! Export command: render the downscaled view at export resolution.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use nox_render::{EXPORT_DPI, HeatmapRenderer, Renderer, export};

use crate::cli::ExportArgs;
use crate::config::NoxConfig;
use crate::convert;
use crate::pipeline;

/// Run the pipeline and export the downscaled field.
pub fn run(args: ExportArgs) -> Result<()> {
    let _cmd = info_span!("export").entered();

    let mut config = NoxConfig::load(args.pipeline.config.as_deref())?.with_overrides(&args.pipeline);
    if let Some(format) = args.format {
        config.export.format = format;
    }
    let settings = convert::build_settings(&config)?;

    let output = pipeline::run(&settings.source, settings.sigma, &settings.resample)?;

    let renderer = HeatmapRenderer::new(settings.render.clone().with_dpi(EXPORT_DPI));
    let title = format!("Downscaled NO₂ Data ({}x)", settings.resample.factor());
    let image = renderer
        .render(output.downscaled.field(), output.downscaled.axes(), &title)
        .context("failed to render downscaled view")?;

    let artifact = export(&image, settings.export_format)
        .with_context(|| format!("cannot export as {}", settings.export_format))?;
    let path = artifact
        .write_to(&settings.output_dir)
        .with_context(|| format!("failed to write export to {}", settings.output_dir.display()))?;

    info!(path = %path.display(), mime = artifact.mime(), "export complete");
    println!("Exported {} ({})", path.display(), artifact.mime());
    Ok(())
}
