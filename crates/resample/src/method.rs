//! Resampling policy selector.

use std::fmt;
use std::str::FromStr;

use crate::error::ResampleError;

/// The upsampling policy applied by [`resample`](crate::resample).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResampleMethod {
    /// Gaussian blur with σ = 1, then nearest-neighbour block replication.
    GaussianNearest,
    /// Bilinear interpolation between the four surrounding samples.
    #[default]
    Bilinear,
    /// Separable natural cubic spline interpolation.
    CubicSpline,
    /// Global least-squares plane evaluated on the fine grid.
    RegressionFit,
}

impl ResampleMethod {
    /// All methods, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::GaussianNearest,
        Self::Bilinear,
        Self::CubicSpline,
        Self::RegressionFit,
    ];

    /// Canonical configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GaussianNearest => "gaussian-nearest",
            Self::Bilinear => "bilinear",
            Self::CubicSpline => "cubic-spline",
            Self::RegressionFit => "regression-fit",
        }
    }

    /// Whether the method interpolates between neighbouring samples and
    /// therefore needs at least two rows and two columns.
    pub fn needs_neighbours(&self) -> bool {
        !matches!(self, Self::GaussianNearest)
    }
}

impl fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResampleMethod {
    type Err = ResampleError;

    /// Accepts the canonical names, case-insensitively, plus the long
    /// display labels (`"Bilinear Interpolation"`, `"Regression-Based"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '_'], "-");
        match key.as_str() {
            "gaussian-nearest" | "gaussian" | "gaussian-smoothing" => Ok(Self::GaussianNearest),
            "bilinear" | "bilinear-interpolation" => Ok(Self::Bilinear),
            "cubic-spline" | "cubic" => Ok(Self::CubicSpline),
            "regression-fit" | "regression" | "regression-based" => Ok(Self::RegressionFit),
            _ => Err(ResampleError::InvalidConfig {
                reason: format!("unknown resample method: {s:?}"),
            }),
        }
    }
}
