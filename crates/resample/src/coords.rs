//! Output-to-source coordinate mapping shared by the interpolating policies.

/// Source coordinate of each of `n_out` output samples along an axis of
/// `n_in` source samples.
///
/// The first and last output samples land exactly on the first and last
/// source samples; the rest are evenly spaced between them.
pub(crate) fn aligned_positions(n_in: usize, n_out: usize) -> Vec<f64> {
    if n_out < 2 || n_in < 2 {
        return vec![0.0; n_out];
    }
    let span = (n_in - 1) as f64;
    let steps = (n_out - 1) as f64;
    (0..n_out).map(|o| o as f64 * span / steps).collect()
}

/// Index of the left knot of the interval containing `x`, so that
/// `lo + 1 < n` always holds. Requires `n >= 2`.
pub(crate) fn left_knot(x: f64, n: usize) -> usize {
    (x.floor().max(0.0) as usize).min(n - 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_hit_both_ends() {
        let p = aligned_positions(4, 8);
        assert_eq!(p.len(), 8);
        assert_eq!(p[0], 0.0);
        assert_eq!(p[7], 3.0);
        assert!(p.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn positions_degenerate() {
        assert_eq!(aligned_positions(1, 3), vec![0.0; 3]);
        assert_eq!(aligned_positions(5, 1), vec![0.0]);
    }

    #[test]
    fn left_knot_clamps() {
        assert_eq!(left_knot(0.0, 4), 0);
        assert_eq!(left_knot(1.5, 4), 1);
        assert_eq!(left_knot(3.0, 4), 2);
    }
}
