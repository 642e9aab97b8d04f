//! Global least-squares plane fit.

use ndarray::{Array2, ArrayView2};
use nox_grid::linspace;
use tracing::debug;

use crate::error::ResampleError;

/// Pivots smaller than this are treated as zero.
const PIVOT_EPS: f64 = 1e-12;

/// Coefficients of the plane `v ≈ a·x + b·y + c` over the unit square, where
/// `x` runs along columns and `y` along rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFit {
    /// Slope along the column (longitude) direction.
    pub a: f64,
    /// Slope along the row (latitude) direction.
    pub b: f64,
    /// Intercept at `(0, 0)`.
    pub c: f64,
}

impl PlaneFit {
    /// Evaluates the plane at normalised coordinates.
    pub fn predict(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y + self.c
    }
}

/// Ordinary least-squares fit of a plane to every cell of `src`, with column
/// index mapped to `x ∈ [0, 1]` and row index to `y ∈ [0, 1]`.
///
/// # Errors
///
/// Returns [`ResampleError::SingularFit`] if the normal equations have no
/// unique solution (fewer than two rows or two columns).
pub fn fit_plane(src: ArrayView2<'_, f64>) -> Result<PlaneFit, ResampleError> {
    let (rows, cols) = src.dim();
    let xs = linspace(0.0, 1.0, cols);
    let ys = linspace(0.0, 1.0, rows);

    // Normal equations (XᵀX) β = Xᵀv for X = [x, y, 1].
    let mut xtx = [[0.0_f64; 3]; 3];
    let mut xtv = [0.0_f64; 3];
    for ((r, c), &v) in src.indexed_iter() {
        let row = [xs[c], ys[r], 1.0];
        for i in 0..3 {
            for j in 0..3 {
                xtx[i][j] += row[i] * row[j];
            }
            xtv[i] += row[i] * v;
        }
    }

    let [a, b, c] = solve3(xtx, xtv).ok_or(ResampleError::SingularFit)?;
    debug!(a, b, c, "plane fitted");
    Ok(PlaneFit { a, b, c })
}

/// Gaussian elimination with partial pivoting on a 3 x 3 system.
fn solve3(mut m: [[f64; 3]; 3], mut rhs: [f64; 3]) -> Option<[f64; 3]> {
    for col in 0..3 {
        let pivot = (col..3).max_by(|&i, &j| m[i][col].abs().total_cmp(&m[j][col].abs()))?;
        if m[pivot][col].abs() < PIVOT_EPS {
            return None;
        }
        m.swap(col, pivot);
        rhs.swap(col, pivot);
        for row in col + 1..3 {
            let f = m[row][col] / m[col][col];
            for k in col..3 {
                m[row][k] -= f * m[col][k];
            }
            rhs[row] -= f * rhs[col];
        }
    }

    let mut x = [0.0; 3];
    for row in (0..3).rev() {
        let tail: f64 = (row + 1..3).map(|k| m[row][k] * x[k]).sum();
        x[row] = (rhs[row] - tail) / m[row][row];
    }
    Some(x)
}

/// Fits a plane to `src` and evaluates it on an evenly spaced `shape` grid
/// over the same unit square.
pub(crate) fn regression_fit(
    src: ArrayView2<'_, f64>,
    shape: (usize, usize),
) -> Result<Array2<f64>, ResampleError> {
    let plane = fit_plane(src)?;
    let xs = linspace(0.0, 1.0, shape.1);
    let ys = linspace(0.0, 1.0, shape.0);
    Ok(Array2::from_shape_fn(shape, |(r, c)| {
        plane.predict(xs[c], ys[r])
    }))
}
