//! Entry points that validate inputs and dispatch on the configured policy.

use nox_grid::{Field, GridData};
use tracing::debug;

use crate::bilinear::bilinear;
use crate::config::ResampleConfig;
use crate::error::ResampleError;
use crate::method::ResampleMethod;
use crate::nearest::gaussian_nearest;
use crate::regression::regression_fit;
use crate::result::ResampleResult;
use crate::spline::cubic_spline;

/// Minimum rows and columns for the interpolating policies.
const MIN_NEIGHBOURS: usize = 2;

/// Upsamples `field` to `(rows·factor, cols·factor)` with the configured policy.
///
/// The input is not modified.
///
/// # Errors
///
/// - [`ResampleError::InvalidConfig`] if the factor is below 2, or so large
///   that the output would not fit in memory.
/// - [`ResampleError::MissingValues`] if `field` contains NaN.
/// - [`ResampleError::FieldTooSmall`] if an interpolating policy gets fewer
///   than 2 rows or columns.
#[tracing::instrument(
    skip_all,
    fields(method = %config.method(), factor = config.factor(), rows = field.rows(), cols = field.cols())
)]
pub fn resample(field: &Field, config: &ResampleConfig) -> Result<Field, ResampleError> {
    config.validate()?;

    let count = field.count_missing();
    if count > 0 {
        return Err(ResampleError::MissingValues {
            field: "input",
            count,
        });
    }

    let method = config.method();
    let (rows, cols) = field.shape();
    let shape = config.output_shape((rows, cols))?;
    if method.needs_neighbours() && (rows < MIN_NEIGHBOURS || cols < MIN_NEIGHBOURS) {
        return Err(ResampleError::FieldTooSmall {
            method,
            rows,
            cols,
            min: MIN_NEIGHBOURS,
        });
    }

    let out = match method {
        ResampleMethod::GaussianNearest => gaussian_nearest(field, config.factor())?,
        ResampleMethod::Bilinear => bilinear(field.view(), shape),
        ResampleMethod::CubicSpline => cubic_spline(field.view(), shape),
        ResampleMethod::RegressionFit => regression_fit(field.view(), shape)?,
    };
    debug!(out_rows = shape.0, out_cols = shape.1, "field resampled");
    Ok(Field::from_array(out)?)
}

/// Upsamples a gridded field and derives the matching finer axes, which keep
/// the input's latitude and longitude bounds.
///
/// # Errors
///
/// Same conditions as [`resample`], except that every method needs at least
/// 2 rows and 2 columns: a single latitude or longitude has no span to
/// respace, so [`ResampleError::FieldTooSmall`] is returned even for
/// [`ResampleMethod::GaussianNearest`].
pub fn resample_grid(
    grid: &GridData,
    config: &ResampleConfig,
) -> Result<ResampleResult, ResampleError> {
    config.validate()?;
    let (rows, cols) = grid.field().shape();
    if rows < MIN_NEIGHBOURS || cols < MIN_NEIGHBOURS {
        return Err(ResampleError::FieldTooSmall {
            method: config.method(),
            rows,
            cols,
            min: MIN_NEIGHBOURS,
        });
    }
    let field = resample(grid.field(), config)?;
    let axes = grid.axes().resampled(field.rows(), field.cols())?;
    Ok(ResampleResult::new(
        GridData::new(field, axes)?,
        config.clone(),
    ))
}
