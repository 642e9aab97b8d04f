//! Error types for the nox-resample crate.

use crate::method::ResampleMethod;

/// Error type for all fallible operations in the nox-resample crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResampleError {
    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a field is too small for an interpolating method.
    #[error("{method} needs at least {min}x{min} cells, got {rows}x{cols}")]
    FieldTooSmall {
        /// Method that was requested.
        method: ResampleMethod,
        /// Row count of the input.
        rows: usize,
        /// Column count of the input.
        cols: usize,
        /// Minimum rows and columns.
        min: usize,
    },

    /// Returned when a field still contains missing (NaN) cells.
    #[error("{count} missing value(s) in {field}; fill them before resampling")]
    MissingValues {
        /// Name of the offending input.
        field: &'static str,
        /// Number of missing cells.
        count: usize,
    },

    /// Returned when two fields that must align do not.
    #[error(
        "shape mismatch: expected {}x{}, got {}x{}",
        expected.0,
        expected.1,
        got.0,
        got.1
    )]
    ShapeMismatch {
        /// Shape that was required.
        expected: (usize, usize),
        /// Shape that was produced.
        got: (usize, usize),
    },

    /// Returned when the least-squares system has no unique solution.
    #[error("least-squares system is singular")]
    SingularFit,

    /// Smoothing error.
    #[error(transparent)]
    Smooth(#[from] nox_smooth::SmoothError),

    /// Grid error.
    #[error(transparent)]
    Grid(#[from] nox_grid::GridError),
}
