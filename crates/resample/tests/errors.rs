use nox_grid::{AxisPair, Field, GridData};
use nox_resample::{
    ResampleConfig, ResampleError, ResampleMethod, difference, resample, resample_grid,
};

#[test]
fn factor_below_two_is_rejected() {
    let field = Field::filled(3, 3, 1.0).unwrap();
    for factor in [0, 1] {
        let cfg = ResampleConfig::new().with_factor(factor);
        assert!(matches!(
            resample(&field, &cfg),
            Err(ResampleError::InvalidConfig { .. })
        ));
    }
}

#[test]
fn interpolating_methods_need_two_by_two() {
    let thin = Field::filled(1, 5, 1.0).unwrap();
    for method in [
        ResampleMethod::Bilinear,
        ResampleMethod::CubicSpline,
        ResampleMethod::RegressionFit,
    ] {
        let cfg = ResampleConfig::new().with_method(method).with_factor(2);
        assert!(matches!(
            resample(&thin, &cfg),
            Err(ResampleError::FieldTooSmall {
                rows: 1,
                cols: 5,
                min: 2,
                ..
            })
        ));
    }
}

#[test]
fn gaussian_nearest_accepts_single_row() {
    let thin = Field::filled(1, 5, 1.0).unwrap();
    let cfg = ResampleConfig::new()
        .with_method(ResampleMethod::GaussianNearest)
        .with_factor(2);
    assert_eq!(resample(&thin, &cfg).unwrap().shape(), (2, 10));
}

#[test]
fn grid_with_single_latitude_is_too_small() {
    let field = Field::filled(1, 4, 1.0).unwrap();
    let axes = AxisPair::new(vec![10.0], vec![0.0, 1.0, 2.0, 3.0]).unwrap();
    let grid = GridData::new(field.clone(), axes).unwrap();
    let cfg = ResampleConfig::new()
        .with_method(ResampleMethod::GaussianNearest)
        .with_factor(2);

    assert!(matches!(
        resample_grid(&grid, &cfg),
        Err(ResampleError::FieldTooSmall {
            rows: 1,
            cols: 4,
            min: 2,
            ..
        })
    ));
    // The bare field still resamples; only the axes cannot be respaced.
    assert_eq!(resample(&field, &cfg).unwrap().shape(), (2, 8));
}

#[test]
fn grid_with_single_longitude_is_too_small() {
    let field = Field::filled(3, 1, 1.0).unwrap();
    let axes = AxisPair::new(vec![-10.0, 0.0, 10.0], vec![5.0]).unwrap();
    let grid = GridData::new(field, axes).unwrap();
    let cfg = ResampleConfig::new()
        .with_method(ResampleMethod::GaussianNearest)
        .with_factor(2);

    assert!(matches!(
        resample_grid(&grid, &cfg),
        Err(ResampleError::FieldTooSmall {
            rows: 3,
            cols: 1,
            ..
        })
    ));
}

#[test]
fn oversized_factor_is_an_error() {
    let field = Field::filled(3, 3, 1.0).unwrap();
    let cfg = ResampleConfig::new()
        .with_method(ResampleMethod::Bilinear)
        .with_factor(usize::MAX / 2);

    assert!(cfg.validate().is_ok());
    assert!(cfg.output_shape(field.shape()).is_err());
    for method in ResampleMethod::ALL {
        let cfg = cfg.clone().with_method(method);
        assert!(matches!(
            resample(&field, &cfg),
            Err(ResampleError::InvalidConfig { .. })
        ));
    }
    assert!(matches!(
        difference(&field, &field, usize::MAX / 2),
        Err(ResampleError::InvalidConfig { .. })
    ));
}

#[test]
fn missing_values_are_rejected() {
    let field = Field::new(2, 2, vec![1.0, f64::NAN, f64::NAN, 4.0]).unwrap();
    for method in ResampleMethod::ALL {
        let cfg = ResampleConfig::new().with_method(method).with_factor(2);
        assert!(matches!(
            resample(&field, &cfg),
            Err(ResampleError::MissingValues { count: 2, .. })
        ));
    }
}

#[test]
fn grid_axes_follow_resampled_shape() {
    let field = Field::filled(4, 8, 0.5).unwrap();
    let axes = AxisPair::linspace((-30.0, 30.0), (0.0, 70.0), 4, 8).unwrap();
    let grid = GridData::new(field, axes).unwrap();
    let cfg = ResampleConfig::new().with_factor(3);

    let result = resample_grid(&grid, &cfg).unwrap();
    assert_eq!(result.field().shape(), (12, 24));
    assert_eq!(result.axes().lats().len(), 12);
    assert_eq!(result.axes().lons().len(), 24);
    assert_eq!(result.axes().lat_bounds(), (-30.0, 30.0));
    assert_eq!(result.axes().lon_bounds(), (0.0, 70.0));
    assert_eq!(result.config().factor(), 3);
}
