//! Configuration for grid upsampling.

use crate::error::ResampleError;
use crate::method::ResampleMethod;

/// Configuration for [`resample`](crate::resample).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use nox_resample::{ResampleConfig, ResampleMethod};
///
/// let config = ResampleConfig::new()
///     .with_factor(3)
///     .with_method(ResampleMethod::CubicSpline);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResampleConfig {
    factor: usize,
    method: ResampleMethod,
}

impl ResampleConfig {
    /// Smallest accepted upsampling factor.
    pub const MIN_FACTOR: usize = 2;

    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `factor = 4`, `method = Bilinear`.
    pub fn new() -> Self {
        Self {
            factor: 4,
            method: ResampleMethod::Bilinear,
        }
    }

    /// Sets the integer upsampling factor applied to both axes.
    pub fn with_factor(mut self, factor: usize) -> Self {
        self.factor = factor;
        self
    }

    /// Sets the resampling policy.
    pub fn with_method(mut self, method: ResampleMethod) -> Self {
        self.method = method;
        self
    }

    // --- Accessors ---

    /// Returns the upsampling factor.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Returns the resampling policy.
    pub fn method(&self) -> ResampleMethod {
        self.method
    }

    /// Output shape for an input of `(rows, cols)`.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::InvalidConfig`] if the upsampled field would
    /// be too large to allocate.
    pub fn output_shape(&self, shape: (usize, usize)) -> Result<(usize, usize), ResampleError> {
        scaled_shape(shape, self.factor)
    }

    /// Validates this configuration.
    ///
    /// A factor of 1 would be a no-op and is rejected along with 0.
    pub fn validate(&self) -> Result<(), ResampleError> {
        if self.factor < Self::MIN_FACTOR {
            return Err(ResampleError::InvalidConfig {
                reason: format!(
                    "factor must be >= {}, got {}",
                    Self::MIN_FACTOR,
                    self.factor
                ),
            });
        }
        Ok(())
    }
}

/// `(rows·factor, cols·factor)`, checked so that the cell count fits in an
/// allocation of `f64`s.
pub(crate) fn scaled_shape(
    (rows, cols): (usize, usize),
    factor: usize,
) -> Result<(usize, usize), ResampleError> {
    let max_cells = isize::MAX as usize / std::mem::size_of::<f64>();
    rows.checked_mul(factor)
        .zip(cols.checked_mul(factor))
        .filter(|&(r, c)| r.checked_mul(c).is_some_and(|n| n <= max_cells))
        .ok_or_else(|| ResampleError::InvalidConfig {
            reason: format!("factor {factor} is too large for a {rows}x{cols} field"),
        })
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self::new()
    }
}
