//! Gaussian kernel construction and separable convolution.

use ndarray::{Array2, ArrayView1, ArrayViewMut1, Axis};
use nox_grid::Field;
use tracing::debug;

use crate::error::SmoothError;

/// Kernel half-width in standard deviations.
pub const TRUNCATE: f64 = 4.0;

/// Value substituted for missing cells before filtering.
pub const MISSING_FILL: f64 = 0.0;

/// Normalised 1-D Gaussian weights for standard deviation `sigma`.
///
/// The kernel has `2r + 1` taps with radius `r = ⌊TRUNCATE·σ + 0.5⌋`.
/// `sigma == 0` yields the single-tap identity kernel `[1.0]`.
///
/// # Errors
///
/// Returns [`SmoothError::InvalidSigma`] if `sigma` is negative or not finite.
pub fn gaussian_kernel(sigma: f64) -> Result<Vec<f64>, SmoothError> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(SmoothError::InvalidSigma { sigma });
    }
    if sigma == 0.0 {
        return Ok(vec![1.0]);
    }
    let radius = (TRUNCATE * sigma + 0.5).floor() as isize;
    let denom = 2.0 * sigma * sigma;
    let mut weights: Vec<f64> = (-radius..=radius)
        .map(|x| (-((x * x) as f64) / denom).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= total;
    }
    Ok(weights)
}

/// Smooths `field` with a Gaussian of standard deviation `sigma` along both
/// axes.
///
/// Missing cells are first replaced by [`MISSING_FILL`]. Boundaries reflect
/// about the edge (`d c b a | a b c d | d c b a`). The input is not modified.
///
/// # Errors
///
/// Returns [`SmoothError::InvalidSigma`] if `sigma` is negative or not finite.
#[tracing::instrument(skip_all, fields(sigma = sigma, rows = field.rows(), cols = field.cols()))]
pub fn smooth(field: &Field, sigma: f64) -> Result<Field, SmoothError> {
    let kernel = gaussian_kernel(sigma)?;
    let n_missing = field.count_missing();
    if n_missing > 0 {
        debug!(n_missing, fill = MISSING_FILL, "filling missing cells");
    }
    let filled = field.fill_missing(MISSING_FILL);
    if kernel.len() == 1 {
        return Ok(filled);
    }

    let input = filled.into_array();
    let along_rows = convolve_axis(&input, &kernel, Axis(0));
    let smoothed = convolve_axis(&along_rows, &kernel, Axis(1));
    debug!(taps = kernel.len(), "gaussian filter applied");
    Ok(Field::from_array(smoothed)?)
}

/// Convolves every lane running along `axis` with `kernel`.
fn convolve_axis(input: &Array2<f64>, kernel: &[f64], axis: Axis) -> Array2<f64> {
    let mut output = Array2::zeros(input.raw_dim());
    for (src, dst) in input.lanes(axis).into_iter().zip(output.lanes_mut(axis)) {
        convolve_lane(src, dst, kernel);
    }
    output
}

fn convolve_lane(src: ArrayView1<'_, f64>, mut dst: ArrayViewMut1<'_, f64>, kernel: &[f64]) {
    let n = src.len();
    let radius = (kernel.len() / 2) as isize;
    for i in 0..n {
        let mut acc = 0.0;
        for (k, &w) in kernel.iter().enumerate() {
            let j = reflect_index(i as isize + k as isize - radius, n);
            acc += w * src[j];
        }
        dst[i] = acc;
    }
}

/// Maps an out-of-range index back into `0..n` by reflecting about the edges,
/// repeating as often as needed.
fn reflect_index(i: isize, n: usize) -> usize {
    let n = n as isize;
    let period = 2 * n;
    let m = i.rem_euclid(period);
    (if m >= n { period - 1 - m } else { m }) as usize
}
