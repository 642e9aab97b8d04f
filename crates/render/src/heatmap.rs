//! Plate-carrée heatmap rendering.

use image::{Rgb, RgbImage};
use nox_grid::{AxisPair, Field};
use tracing::debug;

use crate::config::RenderConfig;
use crate::error::RenderError;

/// Colour used for missing (NaN) cells.
pub const MISSING_COLOUR: Rgb<u8> = Rgb([128, 128, 128]);

/// A rendered raster and the title it was drawn under.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    title: String,
    image: RgbImage,
}

impl RenderedImage {
    /// The title given at render time.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The RGB raster.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Consumes the rendering and returns the raster.
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

/// Something that draws a field located by its axes.
pub trait Renderer {
    /// Renders `field` over `axes`.
    fn render(&self, field: &Field, axes: &AxisPair, title: &str)
    -> Result<RenderedImage, RenderError>;
}

/// Nearest-cell colour-mapped raster, north up.
#[derive(Debug, Clone, Default)]
pub struct HeatmapRenderer {
    config: RenderConfig,
}

impl HeatmapRenderer {
    /// Creates a renderer. The configuration is validated on each render.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Renderer for HeatmapRenderer {
    #[tracing::instrument(skip_all, fields(title = title, rows = field.rows(), cols = field.cols()))]
    fn render(
        &self,
        field: &Field,
        axes: &AxisPair,
        title: &str,
    ) -> Result<RenderedImage, RenderError> {
        self.config.validate()?;
        if !axes.matches(field) {
            return Err(RenderError::ShapeMismatch {
                field: field.shape(),
                axes: (axes.lats().len(), axes.lons().len()),
            });
        }

        let (width, height) = self.config.pixel_size();
        let (lon_lo, lon_hi) = axes.lon_bounds();
        let (lat_lo, lat_hi) = axes.lat_bounds();

        // Pixel centres map linearly onto the axis bounds.
        let cols: Vec<usize> = (0..width)
            .map(|x| axes.nearest_col(pixel_centre(x, width, lon_lo, lon_hi)))
            .collect();
        let rows: Vec<usize> = (0..height)
            .map(|y| axes.nearest_row(pixel_centre(y, height, lat_hi, lat_lo)))
            .collect();

        let colormap = self.config.colormap();
        let view = field.view();
        let image = RgbImage::from_fn(width, height, |x, y| {
            let v = view[[rows[y as usize], cols[x as usize]]];
            if v.is_nan() {
                MISSING_COLOUR
            } else {
                colormap.sample(self.config.normalise(v))
            }
        });
        debug!(width, height, colormap = %colormap, "heatmap rendered");

        Ok(RenderedImage {
            title: title.to_string(),
            image,
        })
    }
}

/// Coordinate at the centre of pixel `i` of `n`, spanning `from` to `to`.
fn pixel_centre(i: u32, n: u32, from: f64, to: f64) -> f64 {
    from + (i as f64 + 0.5) / n as f64 * (to - from)
}
