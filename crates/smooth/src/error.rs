//! Error types for the nox-smooth crate.

/// Error type for all fallible operations in the nox-smooth crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SmoothError {
    /// Returned when sigma is negative or not finite.
    #[error("sigma must be finite and non-negative, got {sigma}")]
    InvalidSigma {
        /// The rejected sigma.
        sigma: f64,
    },

    /// Grid error.
    #[error(transparent)]
    Grid(#[from] nox_grid::GridError),
}
