//! # nox-grid
//!
//! Scalar fields sampled on a regular latitude/longitude mesh, the coordinate
//! axes that locate them, and the sources that produce them.
//!
//! A [`Field`] is an immutable 2-D array (rows = latitude samples, columns =
//! longitude samples) that may carry missing values as NaN. Every processing
//! stage downstream takes a `&Field` and returns a new one.
//!
//! # Quick start
//!
//! ```
//! use nox_grid::{GridSource, SyntheticSource};
//!
//! let grid = SyntheticSource::new()
//!     .with_shape(18, 36)
//!     .with_seed(7)
//!     .load()
//!     .unwrap();
//! assert_eq!(grid.field().shape(), (18, 36));
//! assert_eq!(grid.axes().lats().len(), 18);
//! ```

mod axis;
mod error;
mod field;
mod grid;
mod source;

pub use axis::{AxisPair, linspace};
pub use error::GridError;
pub use field::Field;
pub use grid::GridData;
pub use source::{GridSource, Hotspot, SyntheticSource};
