//! # nox-smooth
//!
//! Separable Gaussian smoothing of [`nox_grid::Field`]s with reflective
//! boundaries.
//!
//! Missing cells are replaced by zero before filtering, so the output never
//! contains NaN.
//!
//! ```
//! use nox_grid::Field;
//! use nox_smooth::smooth;
//!
//! let field = Field::filled(4, 4, 2.0).unwrap();
//! let smoothed = smooth(&field, 1.5).unwrap();
//! assert!(smoothed.values().iter().all(|v| (v - 2.0).abs() < 1e-12));
//! ```

mod error;
mod gaussian;

pub use error::SmoothError;
pub use gaussian::{MISSING_FILL, TRUNCATE, gaussian_kernel, smooth};
