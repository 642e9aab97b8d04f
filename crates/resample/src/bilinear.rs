//! Bilinear interpolation.

use ndarray::{Array2, ArrayView2};

use crate::coords::{aligned_positions, left_knot};

/// Left knot and fractional offset of one output sample.
#[derive(Debug, Clone, Copy)]
struct Tap {
    lo: usize,
    t: f64,
}

fn taps(n_in: usize, n_out: usize) -> Vec<Tap> {
    aligned_positions(n_in, n_out)
        .into_iter()
        .map(|x| {
            let lo = left_knot(x, n_in);
            Tap {
                lo,
                t: x - lo as f64,
            }
        })
        .collect()
}

/// Bilinear upsampling of `src` (at least 2 x 2) to `shape`.
pub(crate) fn bilinear(src: ArrayView2<'_, f64>, shape: (usize, usize)) -> Array2<f64> {
    let (rows, cols) = src.dim();
    let row_taps = taps(rows, shape.0);
    let col_taps = taps(cols, shape.1);
    Array2::from_shape_fn(shape, |(i, j)| {
        let r = row_taps[i];
        let c = col_taps[j];
        let top = src[[r.lo, c.lo]] * (1.0 - c.t) + src[[r.lo, c.lo + 1]] * c.t;
        let bottom = src[[r.lo + 1, c.lo]] * (1.0 - c.t) + src[[r.lo + 1, c.lo + 1]] * c.t;
        top * (1.0 - r.t) + bottom * r.t
    })
}
