//! Rendering configuration.

use crate::colormap::Colormap;
use crate::error::RenderError;

/// Fixed colour range for difference maps.
pub const DIFFERENCE_RANGE: (f64, f64) = (-0.2, 0.2);

/// Upper bound on either raster dimension, in pixels.
const MAX_PIXELS: f64 = 16_384.0;

/// Configuration for [`HeatmapRenderer`](crate::HeatmapRenderer).
///
/// The raster is `figure_width · dpi` by `figure_height · dpi` pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    vmin: f64,
    vmax: f64,
    colormap: Colormap,
    dpi: u32,
    figure_width: f64,
    figure_height: f64,
}

impl RenderConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `vmin = 0.0`, `vmax = 0.5`, `colormap = viridis`,
    /// `dpi = 100`, figure `12 x 6` inches.
    pub fn new() -> Self {
        Self {
            vmin: 0.0,
            vmax: 0.5,
            colormap: Colormap::Viridis,
            dpi: 100,
            figure_width: 12.0,
            figure_height: 6.0,
        }
    }

    /// Sets the value range mapped onto the colormap.
    pub fn with_range(mut self, vmin: f64, vmax: f64) -> Self {
        self.vmin = vmin;
        self.vmax = vmax;
        self
    }

    /// Sets the colormap.
    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    /// Sets the resolution in pixels per inch.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Sets the figure size in inches.
    pub fn with_figure_size(mut self, width: f64, height: f64) -> Self {
        self.figure_width = width;
        self.figure_height = height;
        self
    }

    /// Same raster geometry, drawn with `coolwarm` over [`DIFFERENCE_RANGE`].
    pub fn for_difference(&self) -> Self {
        self.clone()
            .with_range(DIFFERENCE_RANGE.0, DIFFERENCE_RANGE.1)
            .with_colormap(Colormap::Coolwarm)
    }

    // --- Accessors ---

    /// Returns the lower bound of the colour range.
    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    /// Returns the upper bound of the colour range.
    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    /// Returns the colormap.
    pub fn colormap(&self) -> Colormap {
        self.colormap
    }

    /// Returns the resolution in pixels per inch.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Returns the figure size in inches.
    pub fn figure_size(&self) -> (f64, f64) {
        (self.figure_width, self.figure_height)
    }

    /// Raster `(width, height)` in pixels, at least 1x1.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        let px = |inches: f64| ((inches * dpi).round() as u32).max(1);
        (px(self.figure_width), px(self.figure_height))
    }

    /// Normalises `value` into `[0, 1]` relative to the colour range.
    pub fn normalise(&self, value: f64) -> f64 {
        ((value - self.vmin) / (self.vmax - self.vmin)).clamp(0.0, 1.0)
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.vmin.is_finite() || !self.vmax.is_finite() {
            return Err(RenderError::InvalidConfig {
                reason: format!(
                    "colour range must be finite, got [{}, {}]",
                    self.vmin, self.vmax
                ),
            });
        }
        if self.vmin >= self.vmax {
            return Err(RenderError::InvalidConfig {
                reason: format!(
                    "vmin ({}) must be less than vmax ({})",
                    self.vmin, self.vmax
                ),
            });
        }
        if self.dpi == 0 {
            return Err(RenderError::InvalidConfig {
                reason: "dpi must be positive".to_string(),
            });
        }
        for (name, inches) in [("width", self.figure_width), ("height", self.figure_height)] {
            if !inches.is_finite() || inches <= 0.0 {
                return Err(RenderError::InvalidConfig {
                    reason: format!("figure {name} must be positive, got {inches}"),
                });
            }
            if inches * self.dpi as f64 > MAX_PIXELS {
                return Err(RenderError::InvalidConfig {
                    reason: format!(
                        "figure {name} of {inches} in at {} dpi exceeds {MAX_PIXELS} pixels",
                        self.dpi
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}
