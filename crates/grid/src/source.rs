//! Providers of base fields.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::axis::AxisPair;
use crate::error::GridError;
use crate::field::Field;
use crate::grid::GridData;

/// Anything that can supply a base field over a latitude/longitude grid.
pub trait GridSource {
    /// Produces the field and its axes.
    fn load(&self) -> Result<GridData, GridError>;
}

/// A rectangular concentration bump added on top of the background pattern.
///
/// Row and column extents are fractions of the grid size so that the same
/// hotspot lands on the same region whatever the resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    /// Row extent as `(start, end)` fractions of the row count.
    pub rows: (f64, f64),
    /// Column extent as `(start, end)` fractions of the column count.
    pub cols: (f64, f64),
    /// Value added to every covered cell.
    pub amplitude: f64,
}

impl Hotspot {
    fn row_range(&self, n_rows: usize) -> Range<usize> {
        fraction_range(self.rows, n_rows)
    }

    fn col_range(&self, n_cols: usize) -> Range<usize> {
        fraction_range(self.cols, n_cols)
    }
}

fn fraction_range((start, end): (f64, f64), n: usize) -> Range<usize> {
    let lo = ((start * n as f64).round() as usize).min(n);
    let hi = ((end * n as f64).round() as usize).min(n);
    lo..hi.max(lo)
}

/// Default hotspots. On a 180 x 360 grid they cover rows 60..80 x cols
/// 100..120, rows 30..50 x cols 200..220 and rows 20..40 x cols 70..90.
const DEFAULT_HOTSPOTS: [Hotspot; 3] = [
    Hotspot {
        rows: (60.0 / 180.0, 80.0 / 180.0),
        cols: (100.0 / 360.0, 120.0 / 360.0),
        amplitude: 0.5,
    },
    Hotspot {
        rows: (30.0 / 180.0, 50.0 / 180.0),
        cols: (200.0 / 360.0, 220.0 / 360.0),
        amplitude: 0.4,
    },
    Hotspot {
        rows: (20.0 / 180.0, 40.0 / 180.0),
        cols: (70.0 / 360.0, 90.0 / 360.0),
        amplitude: 0.6,
    },
];

/// Synthetic NO₂-like field on a global grid.
///
/// The background is `sin²(2·lat) · cos(lon) / 2` (degrees), with rectangular
/// hotspots and additive Gaussian noise on top. Cells can optionally be
/// knocked out as missing (NaN).
///
/// # Example
///
/// ```
/// use nox_grid::{GridSource, SyntheticSource};
///
/// let grid = SyntheticSource::new().with_seed(1).load().unwrap();
/// assert_eq!(grid.field().shape(), (180, 360));
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    rows: usize,
    cols: usize,
    noise_sd: f64,
    missing_fraction: f64,
    hotspots: Vec<Hotspot>,
    seed: Option<u64>,
}

impl SyntheticSource {
    /// Creates a source with defaults.
    ///
    /// Defaults: `rows = 180`, `cols = 360`, `noise_sd = 0.1`,
    /// `missing_fraction = 0.0`, three default hotspots, unseeded.
    pub fn new() -> Self {
        Self {
            rows: 180,
            cols: 360,
            noise_sd: 0.1,
            missing_fraction: 0.0,
            hotspots: DEFAULT_HOTSPOTS.to_vec(),
            seed: None,
        }
    }

    /// Sets the grid shape.
    pub fn with_shape(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Sets the standard deviation of the additive noise.
    pub fn with_noise_sd(mut self, sd: f64) -> Self {
        self.noise_sd = sd;
        self
    }

    /// Sets the probability that a cell is replaced by NaN.
    pub fn with_missing_fraction(mut self, fraction: f64) -> Self {
        self.missing_fraction = fraction;
        self
    }

    /// Replaces the hotspot list.
    pub fn with_hotspots(mut self, hotspots: Vec<Hotspot>) -> Self {
        self.hotspots = hotspots;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    // --- Accessors ---

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the noise standard deviation.
    pub fn noise_sd(&self) -> f64 {
        self.noise_sd
    }

    /// Returns the missing-cell probability.
    pub fn missing_fraction(&self) -> f64 {
        self.missing_fraction
    }

    /// Returns the hotspots.
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Returns the RNG seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows < 2 || self.cols < 2 {
            return Err(GridError::InvalidConfig {
                reason: format!(
                    "grid must be at least 2x2, got {}x{}",
                    self.rows, self.cols
                ),
            });
        }
        if !self.noise_sd.is_finite() || self.noise_sd < 0.0 {
            return Err(GridError::InvalidConfig {
                reason: format!(
                    "noise_sd must be finite and non-negative, got {}",
                    self.noise_sd
                ),
            });
        }
        if !(0.0..1.0).contains(&self.missing_fraction) {
            return Err(GridError::InvalidConfig {
                reason: format!(
                    "missing_fraction must be in [0, 1), got {}",
                    self.missing_fraction
                ),
            });
        }
        Ok(())
    }

    fn background(lat: f64, lon: f64) -> f64 {
        (2.0 * lat).to_radians().sin().powi(2) * lon.to_radians().cos() / 2.0
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSource for SyntheticSource {
    #[tracing::instrument(skip_all, fields(rows = self.rows, cols = self.cols, seed = ?self.seed))]
    fn load(&self) -> Result<GridData, GridError> {
        self.validate()?;

        let axes = AxisPair::global(self.rows, self.cols)?;
        let mut values = Vec::with_capacity(self.rows * self.cols);
        for &lat in axes.lats() {
            for &lon in axes.lons() {
                values.push(Self::background(lat, lon));
            }
        }

        for hotspot in &self.hotspots {
            for r in hotspot.row_range(self.rows) {
                for c in hotspot.col_range(self.cols) {
                    values[r * self.cols + c] += hotspot.amplitude;
                }
            }
        }

        let mut rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };

        if self.noise_sd > 0.0 {
            let noise = Normal::new(0.0, self.noise_sd).map_err(|e| GridError::InvalidConfig {
                reason: format!("noise distribution: {e}"),
            })?;
            for v in &mut values {
                *v += noise.sample(&mut rng);
            }
        }

        let mut n_missing = 0usize;
        if self.missing_fraction > 0.0 {
            for v in &mut values {
                if rng.random::<f64>() < self.missing_fraction {
                    *v = f64::NAN;
                    n_missing += 1;
                }
            }
        }
        debug!(n_missing, "synthetic field generated");

        let field = Field::new(self.rows, self.cols, values)?;
        GridData::new(field, axes)
    }
}
