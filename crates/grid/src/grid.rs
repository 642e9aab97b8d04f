//! A field paired with its coordinate axes.

use crate::axis::AxisPair;
use crate::error::GridError;
use crate::field::Field;

/// A [`Field`] together with the [`AxisPair`] locating its samples.
#[derive(Debug, Clone, PartialEq)]
pub struct GridData {
    field: Field,
    axes: AxisPair,
}

impl GridData {
    /// Pairs a field with its axes.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LengthMismatch`] if the latitude axis length differs
    /// from the row count or the longitude axis length from the column count.
    pub fn new(field: Field, axes: AxisPair) -> Result<Self, GridError> {
        if axes.lats().len() != field.rows() {
            return Err(GridError::LengthMismatch {
                field: "lats",
                expected: field.rows(),
                got: axes.lats().len(),
            });
        }
        if axes.lons().len() != field.cols() {
            return Err(GridError::LengthMismatch {
                field: "lons",
                expected: field.cols(),
                got: axes.lons().len(),
            });
        }
        Ok(Self { field, axes })
    }

    /// The sampled values.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The coordinate axes.
    pub fn axes(&self) -> &AxisPair {
        &self.axes
    }

    /// Consumes the grid and returns its parts.
    pub fn into_parts(self) -> (Field, AxisPair) {
        (self.field, self.axes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_axes() {
        let field = Field::filled(3, 4, 1.0).unwrap();
        let axes = AxisPair::global(4, 4).unwrap();
        assert!(matches!(
            GridData::new(field, axes),
            Err(GridError::LengthMismatch {
                field: "lats",
                expected: 3,
                got: 4,
            })
        ));
    }

    #[test]
    fn into_parts() {
        let field = Field::filled(2, 3, 1.0).unwrap();
        let axes = AxisPair::global(2, 3).unwrap();
        let grid = GridData::new(field.clone(), axes.clone()).unwrap();
        assert_eq!(grid.into_parts(), (field, axes));
    }
}
