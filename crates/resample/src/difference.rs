//! Residuals between a resampled field and its coarse source.

use nox_grid::Field;

use crate::config::{ResampleConfig, scaled_shape};
use crate::error::ResampleError;
use crate::nearest::replicate_blocks;

/// Returns `resampled − upsampled(pre_resample)`, where the coarse field is
/// expanded by plain block replication (no smoothing) to the fine shape.
///
/// # Errors
///
/// - [`ResampleError::InvalidConfig`] if `factor` is below
///   [`ResampleConfig::MIN_FACTOR`] or too large to allocate.
/// - [`ResampleError::MissingValues`] if either input contains NaN.
/// - [`ResampleError::ShapeMismatch`] if the replicated coarse field does not
///   match `resampled` exactly. This indicates a caller bug.
#[tracing::instrument(skip_all, fields(factor = factor))]
pub fn difference(
    resampled: &Field,
    pre_resample: &Field,
    factor: usize,
) -> Result<Field, ResampleError> {
    if factor < ResampleConfig::MIN_FACTOR {
        return Err(ResampleError::InvalidConfig {
            reason: format!(
                "factor must be >= {}, got {factor}",
                ResampleConfig::MIN_FACTOR
            ),
        });
    }
    for (name, field) in [("resampled", resampled), ("pre_resample", pre_resample)] {
        let count = field.count_missing();
        if count > 0 {
            return Err(ResampleError::MissingValues { field: name, count });
        }
    }

    let upsampled_shape = scaled_shape(pre_resample.shape(), factor)?;
    if upsampled_shape != resampled.shape() {
        return Err(ResampleError::ShapeMismatch {
            expected: resampled.shape(),
            got: upsampled_shape,
        });
    }
    let upsampled = replicate_blocks(pre_resample.view(), factor);
    Ok(Field::from_array(&resampled.view() - &upsampled)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_replicated_source() {
        let coarse = Field::new(1, 2, vec![1.0, 2.0]).unwrap();
        let fine = Field::new(2, 4, vec![1.0, 1.5, 2.0, 2.5, 0.0, 1.0, 2.0, 3.0]).unwrap();
        let diff = difference(&fine, &coarse, 2).unwrap();
        assert_eq!(
            diff.values(),
            &[0.0, 0.5, 0.0, 0.5, -1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn wrong_factor_is_a_shape_mismatch() {
        let coarse = Field::filled(3, 3, 0.0).unwrap();
        let fine = Field::filled(6, 6, 0.0).unwrap();
        assert!(matches!(
            difference(&fine, &coarse, 3),
            Err(ResampleError::ShapeMismatch {
                expected: (6, 6),
                got: (9, 9),
            })
        ));
    }

    #[test]
    fn factor_below_two_is_rejected() {
        let f = Field::filled(2, 2, 0.0).unwrap();
        for factor in [0, 1] {
            assert!(matches!(
                difference(&f, &f, factor),
                Err(ResampleError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn huge_factor_is_rejected_without_allocating() {
        let coarse = Field::filled(3, 3, 0.0).unwrap();
        let fine = Field::filled(6, 6, 0.0).unwrap();
        assert!(matches!(
            difference(&fine, &coarse, usize::MAX / 2),
            Err(ResampleError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn missing_values_are_rejected() {
        let coarse = Field::new(1, 2, vec![1.0, f64::NAN]).unwrap();
        let fine = Field::filled(2, 4, 0.0).unwrap();
        assert!(matches!(
            difference(&fine, &coarse, 2),
            Err(ResampleError::MissingValues {
                field: "pre_resample",
                count: 1,
            })
        ));
    }
}
