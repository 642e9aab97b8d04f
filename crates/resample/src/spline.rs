//! Separable natural cubic spline interpolation.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::coords::{aligned_positions, left_knot};

/// Second derivatives of the natural cubic spline through `y` at unit knot
/// spacing. The end values are zero.
fn second_derivatives(y: &[f64]) -> Vec<f64> {
    let n = y.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }

    // Interior rows: m[i-1] + 4 m[i] + m[i+1] = 6 (y[i+1] - 2 y[i] + y[i-1]).
    // Thomas algorithm over the k = n - 2 unknowns m[1..n-1].
    let k = n - 2;
    let mut c_prime = vec![0.0; k];
    let mut d_prime = vec![0.0; k];
    for j in 0..k {
        let i = j + 1;
        let rhs = 6.0 * (y[i + 1] - 2.0 * y[i] + y[i - 1]);
        let (prev_c, prev_d) = if j == 0 {
            (0.0, 0.0)
        } else {
            (c_prime[j - 1], d_prime[j - 1])
        };
        let denom = 4.0 - prev_c;
        c_prime[j] = 1.0 / denom;
        d_prime[j] = (rhs - prev_d) / denom;
    }

    m[k] = d_prime[k - 1];
    for j in (0..k - 1).rev() {
        m[j + 1] = d_prime[j] - c_prime[j] * m[j + 2];
    }
    m
}

/// Evaluates the spline defined by knots `y` and second derivatives `m` at
/// source coordinate `x`.
fn evaluate(y: ArrayView1<'_, f64>, m: &[f64], x: f64) -> f64 {
    let i = left_knot(x, y.len());
    let t = x - i as f64;
    let u = 1.0 - t;
    u * y[i] + t * y[i + 1] + ((u * u * u - u) * m[i] + (t * t * t - t) * m[i + 1]) / 6.0
}

/// Fits a spline along every lane of `input` running along `axis` and samples
/// it at `n_out` evenly spaced positions.
fn spline_axis(input: ArrayView2<'_, f64>, n_out: usize, axis: Axis) -> Array2<f64> {
    let n_in = input.len_of(axis);
    let positions = aligned_positions(n_in, n_out);
    let mut shape = input.raw_dim();
    shape[axis.index()] = n_out;
    let mut output = Array2::zeros(shape);
    for (src, mut dst) in input.lanes(axis).into_iter().zip(output.lanes_mut(axis)) {
        let knots = src.to_vec();
        let m = second_derivatives(&knots);
        for (o, &x) in positions.iter().enumerate() {
            dst[o] = evaluate(src, &m, x);
        }
    }
    output
}

/// Cubic spline upsampling of `src` (at least 2 x 2) to `shape`: columns
/// first, then rows.
pub(crate) fn cubic_spline(src: ArrayView2<'_, f64>, shape: (usize, usize)) -> Array2<f64> {
    let wide = spline_axis(src, shape.1, Axis(1));
    spline_axis(wide.view(), shape.0, Axis(0))
}
