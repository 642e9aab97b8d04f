//! Statistical helper functions for the nox toolkit.
//!
//! All functions take plain slices. Missing values are NaN; only the `nan*`
//! and range helpers skip them.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
///
/// NaN inputs propagate; use [`nanmean`] for fields with missing cells.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Mean over the non-NaN values. Returns `None` if every value is missing
/// (or the slice is empty).
pub fn nanmean(data: &[f64]) -> Option<f64> {
    let (sum, n) = data
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), &v| (s + v, n + 1));
    if n == 0 { None } else { Some(sum / n as f64) }
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Smallest and largest non-NaN values, or `None` if there are none.
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
}

/// Number of NaN values.
pub fn count_missing(data: &[f64]) -> usize {
    data.iter().filter(|v| v.is_nan()).count()
}
