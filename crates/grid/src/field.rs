//! The `Field` value type.

use ndarray::{Array2, ArrayView2};

use crate::error::GridError;

/// A 2-D scalar field: rows are latitude samples, columns are longitude samples.
///
/// Missing cells are stored as NaN. The backing array is always in standard
/// (row-major) layout, so [`Field::values`] exposes every cell as one slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    data: Array2<f64>,
}

impl Field {
    /// Creates a field from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyField`] if either dimension is zero, or
    /// [`GridError::LengthMismatch`] if `values.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyField { rows, cols });
        }
        let got = values.len();
        let data =
            Array2::from_shape_vec((rows, cols), values).map_err(|_| GridError::LengthMismatch {
                field: "values",
                expected: rows * cols,
                got,
            })?;
        Ok(Self { data })
    }

    /// Creates a field from an existing array, copying it into standard layout
    /// if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyField`] if either dimension is zero.
    pub fn from_array(data: Array2<f64>) -> Result<Self, GridError> {
        let (rows, cols) = data.dim();
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyField { rows, cols });
        }
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data })
    }

    /// Creates a field with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyField`] if either dimension is zero.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, GridError> {
        Self::from_array(Array2::from_elem((rows, cols), value))
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Number of rows (latitude samples).
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns (longitude samples).
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: fields have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// All cells in row-major order.
    pub fn values(&self) -> &[f64] {
        // Every constructor yields a standard-layout array.
        self.data.as_slice().unwrap_or(&[])
    }

    /// Read-only view of the backing array.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Consumes the field and returns the backing array.
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Number of missing (NaN) cells.
    pub fn count_missing(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }

    /// Whether any cell is missing.
    pub fn has_missing(&self) -> bool {
        self.data.iter().any(|v| v.is_nan())
    }

    /// Returns a copy with every missing cell replaced by `value`.
    pub fn fill_missing(&self, value: f64) -> Self {
        Self {
            data: self.data.mapv(|v| if v.is_nan() { value } else { v }),
        }
    }

    /// Smallest and largest finite values, or `None` if there are none.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
