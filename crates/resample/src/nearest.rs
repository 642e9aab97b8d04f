//! Block replication and the Gaussian + nearest-neighbour policy.

use ndarray::{Array2, ArrayView2};
use nox_grid::Field;

use crate::error::ResampleError;

/// Fixed blur applied before block replication.
///
/// Independent of the user-facing smoothing sigma.
pub const ANTI_ALIAS_SIGMA: f64 = 1.0;

/// Expands every cell of `src` into a `factor` x `factor` block of the same
/// value.
///
/// # Panics
///
/// Panics if the expanded shape overflows `usize`. [`resample`](crate::resample)
/// and [`difference`](crate::difference) check the shape before calling this.
pub fn replicate_blocks(src: ArrayView2<'_, f64>, factor: usize) -> Array2<f64> {
    let (rows, cols) = src.dim();
    Array2::from_shape_fn((rows * factor, cols * factor), |(i, j)| {
        src[[i / factor, j / factor]]
    })
}

pub(crate) fn gaussian_nearest(field: &Field, factor: usize) -> Result<Array2<f64>, ResampleError> {
    let blurred = nox_smooth::smooth(field, ANTI_ALIAS_SIGMA)?;
    Ok(replicate_blocks(blurred.view(), factor))
}
