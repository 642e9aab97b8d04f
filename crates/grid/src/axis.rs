//! Latitude/longitude coordinate axes.

use crate::error::GridError;
use crate::field::Field;

const LAT_RANGE: (f64, f64) = (-90.0, 90.0);
const LON_RANGE: (f64, f64) = (-180.0, 180.0);

/// `n` evenly spaced samples from `start` to `end`, both inclusive.
///
/// A single sample is `start`; zero samples is an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// The latitude and longitude sample positions of a [`Field`].
///
/// Both axes are strictly increasing; latitudes lie in [-90, 90] and
/// longitudes in [-180, 180].
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPair {
    lats: Vec<f64>,
    lons: Vec<f64>,
}

impl AxisPair {
    /// Creates an axis pair after validating ordering and geographic range.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyField`] if either axis is empty,
    /// [`GridError::AxisOutOfRange`] for values outside the geographic range
    /// (or non-finite), and [`GridError::NonMonotonicAxis`] if an axis is not
    /// strictly increasing.
    pub fn new(lats: Vec<f64>, lons: Vec<f64>) -> Result<Self, GridError> {
        if lats.is_empty() || lons.is_empty() {
            return Err(GridError::EmptyField {
                rows: lats.len(),
                cols: lons.len(),
            });
        }
        validate_axis("latitude", &lats, LAT_RANGE)?;
        validate_axis("longitude", &lons, LON_RANGE)?;
        Ok(Self { lats, lons })
    }

    /// Evenly spaced axes over the given latitude and longitude bounds.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AxisPair::new`].
    pub fn linspace(
        lat_bounds: (f64, f64),
        lon_bounds: (f64, f64),
        rows: usize,
        cols: usize,
    ) -> Result<Self, GridError> {
        Self::new(
            linspace(lat_bounds.0, lat_bounds.1, rows),
            linspace(lon_bounds.0, lon_bounds.1, cols),
        )
    }

    /// Evenly spaced axes covering the whole globe.
    pub fn global(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::linspace(LAT_RANGE, LON_RANGE, rows, cols)
    }

    /// Latitude samples, one per field row.
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Longitude samples, one per field column.
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// `(first, last)` latitude.
    pub fn lat_bounds(&self) -> (f64, f64) {
        bounds(&self.lats)
    }

    /// `(first, last)` longitude.
    pub fn lon_bounds(&self) -> (f64, f64) {
        bounds(&self.lons)
    }

    /// Axes with the same bounds respaced to `rows` x `cols` samples.
    pub fn resampled(&self, rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::linspace(self.lat_bounds(), self.lon_bounds(), rows, cols)
    }

    /// Index of the latitude sample closest to `lat`.
    pub fn nearest_row(&self, lat: f64) -> usize {
        nearest_index(&self.lats, lat)
    }

    /// Index of the longitude sample closest to `lon`.
    pub fn nearest_col(&self, lon: f64) -> usize {
        nearest_index(&self.lons, lon)
    }

    /// Whether the axis lengths match the field's shape.
    pub fn matches(&self, field: &Field) -> bool {
        field.shape() == (self.lats.len(), self.lons.len())
    }
}

fn bounds(axis: &[f64]) -> (f64, f64) {
    match (axis.first(), axis.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (0.0, 0.0),
    }
}

fn validate_axis(name: &'static str, axis: &[f64], range: (f64, f64)) -> Result<(), GridError> {
    if let Some(&value) = axis
        .iter()
        .find(|v| !v.is_finite() || **v < range.0 || **v > range.1)
    {
        return Err(GridError::AxisOutOfRange {
            axis: name,
            value,
            min: range.0,
            max: range.1,
        });
    }
    if let Some(i) = axis.windows(2).position(|w| w[1] <= w[0]) {
        return Err(GridError::NonMonotonicAxis {
            axis: name,
            index: i + 1,
        });
    }
    Ok(())
}

/// Closest sample in a strictly increasing axis; ties resolve to the lower index.
fn nearest_index(axis: &[f64], value: f64) -> usize {
    let upper = axis.partition_point(|&v| v < value);
    if upper == 0 {
        return 0;
    }
    if upper >= axis.len() {
        return axis.len().saturating_sub(1);
    }
    let lower = upper - 1;
    if value - axis[lower] <= axis[upper] - value {
        lower
    } else {
        upper
    }
}
