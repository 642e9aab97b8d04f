//! Grid upsampling for the nox toolkit.
//!
//! Maps a field of shape `(R, C)` onto a finer `(R·k, C·k)` grid under one of
//! four policies, and computes difference maps against the coarse field.
//!
//! # Policies
//!
//! ```text
//!  GaussianNearest  blur (σ = 1) ──▶ k×k block replication   blocky, smooth edges
//!  Bilinear         4-point linear weights                   no overshoot
//!  CubicSpline      natural C² spline, separable             may overshoot
//!  RegressionFit    global plane  v ≈ a·x + b·y + c          trend only
//! ```
//!
//! # Quick start
//!
//! ```
//! use nox_grid::Field;
//! use nox_resample::{ResampleConfig, ResampleMethod, difference, resample};
//!
//! let coarse = Field::filled(4, 4, 2.0).unwrap();
//! let config = ResampleConfig::new()
//!     .with_factor(2)
//!     .with_method(ResampleMethod::Bilinear);
//! let fine = resample(&coarse, &config).unwrap();
//! assert_eq!(fine.shape(), (8, 8));
//!
//! let diff = difference(&fine, &coarse, config.factor()).unwrap();
//! assert!(diff.values().iter().all(|d| d.abs() < 1e-12));
//! ```

mod bilinear;
mod config;
mod coords;
mod difference;
mod error;
mod method;
mod nearest;
mod regression;
mod resample;
mod result;
mod spline;

pub use config::ResampleConfig;
pub use difference::difference;
pub use error::ResampleError;
pub use method::ResampleMethod;
pub use nearest::{ANTI_ALIAS_SIGMA, replicate_blocks};
pub use regression::{PlaneFit, fit_plane};
pub use resample::{resample, resample_grid};
pub use result::ResampleResult;
