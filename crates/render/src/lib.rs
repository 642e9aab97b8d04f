//! # nox-render
//!
//! Turns gridded fields into colour-mapped RGB rasters and encodes them for
//! export.
//!
//! ```text
//!   Field + AxisPair ──▶ HeatmapRenderer ──▶ RenderedImage ──▶ export ──▶ ExportArtifact
//!                         (vmin, vmax,                           (PNG, in-memory)
//!                          colormap, dpi)
//! ```
//!
//! The raster is a plain plate-carrée projection, north up: every pixel takes
//! the value of the grid cell nearest to its centre. Values are normalised to
//! `[vmin, vmax]`, clamped, and looked up in a [`Colormap`]. Missing cells are
//! drawn in a neutral grey.
//!
//! # Quick start
//!
//! ```
//! use nox_grid::{AxisPair, Field};
//! use nox_render::{ExportFormat, HeatmapRenderer, RenderConfig, Renderer, export};
//!
//! let field = Field::filled(4, 8, 0.25).unwrap();
//! let axes = AxisPair::global(4, 8).unwrap();
//! let renderer = HeatmapRenderer::new(RenderConfig::new().with_dpi(10));
//! let image = renderer.render(&field, &axes, "Flat field").unwrap();
//! assert_eq!(image.dimensions(), (120, 60));
//!
//! let artifact = export(&image, ExportFormat::Png).unwrap();
//! assert_eq!(artifact.mime(), "image/png");
//! ```

mod colormap;
mod config;
mod error;
mod export;
mod heatmap;

pub use colormap::Colormap;
pub use config::{DIFFERENCE_RANGE, RenderConfig};
pub use error::RenderError;
pub use export::{EXPORT_DPI, EXPORT_FILE_NAME, ExportArtifact, ExportFormat, encode_png, export};
pub use heatmap::{HeatmapRenderer, MISSING_COLOUR, RenderedImage, Renderer};
