use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// nox gridded NO₂ downscaling toolkit.
#[derive(Parser)]
#[command(
    name = "nox",
    version,
    about = "Smooth, downscale and render gridded NO₂ fields"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline and write one image per stage plus a summary.
    Run(RunArgs),
    /// Run the pipeline and export the downscaled view.
    Export(ExportArgs),
}

/// Options shared by every subcommand that runs the pipeline.
#[derive(clap::Args)]
pub struct PipelineArgs {
    /// Path to TOML configuration file [default: nox.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override output directory from config.
    #[arg(short, long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Override synthetic data RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override smoothing sigma (0.1 to 5.0).
    #[arg(long)]
    pub sigma: Option<f64>,

    /// Override downscaling factor (2 to 10).
    #[arg(short, long)]
    pub factor: Option<usize>,

    /// Override downscaling method (gaussian-nearest, bilinear, cubic-spline,
    /// regression-fit).
    #[arg(short, long)]
    pub method: Option<String>,

    /// Override colormap (viridis, plasma, inferno, magma, cividis).
    #[arg(long)]
    pub colormap: Option<String>,
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Override export format (png, pdf, csv).
    #[arg(long)]
    pub format: Option<String>,
}
