use approx::assert_relative_eq;
use nox_grid::Field;
use nox_smooth::{SmoothError, smooth};

fn impulse(rows: usize, cols: usize, at: (usize, usize)) -> Field {
    let mut values = vec![0.0; rows * cols];
    values[at.0 * cols + at.1] = 1.0;
    Field::new(rows, cols, values).unwrap()
}

#[test]
fn zero_sigma_is_identity() {
    let field = Field::new(2, 3, vec![1.0, -2.0, 3.5, 0.0, 7.0, 1.25]).unwrap();
    let out = smooth(&field, 0.0).unwrap();
    assert_eq!(out, field);
}

#[test]
fn constant_field_is_unchanged() {
    let field = Field::filled(6, 9, 0.3).unwrap();
    let out = smooth(&field, 2.0).unwrap();
    for &v in out.values() {
        assert_relative_eq!(v, 0.3, epsilon = 1e-12);
    }
}

#[test]
fn preserves_shape_and_total_mass() {
    let field = impulse(15, 21, (3, 17));
    let out = smooth(&field, 1.0).unwrap();
    assert_eq!(out.shape(), (15, 21));
    let total: f64 = out.values().iter().sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-12);
}

#[test]
fn impulse_spreads_symmetrically() {
    let field = impulse(11, 11, (5, 5));
    let out = smooth(&field, 1.0).unwrap();
    let centre = out.get(5, 5).unwrap();
    assert!(centre < 1.0);
    for d in 1..=4 {
        let up = out.get(5 - d, 5).unwrap();
        let down = out.get(5 + d, 5).unwrap();
        let left = out.get(5, 5 - d).unwrap();
        let right = out.get(5, 5 + d).unwrap();
        assert_relative_eq!(up, down, epsilon = 1e-15);
        assert_relative_eq!(left, right, epsilon = 1e-15);
        assert_relative_eq!(up, left, epsilon = 1e-15);
        assert!(up < centre);
    }
}

#[test]
fn wider_sigma_flattens_more() {
    let field = impulse(21, 21, (10, 10));
    let narrow = smooth(&field, 0.5).unwrap();
    let wide = smooth(&field, 3.0).unwrap();
    assert!(wide.get(10, 10).unwrap() < narrow.get(10, 10).unwrap());
}

#[test]
fn missing_cells_are_zero_filled() {
    let field = Field::new(2, 2, vec![1.0, f64::NAN, 3.0, 4.0]).unwrap();
    let out = smooth(&field, 0.0).unwrap();
    assert_eq!(out.values(), &[1.0, 0.0, 3.0, 4.0]);

    let out = smooth(&field, 1.0).unwrap();
    assert!(!out.has_missing());
    // Reflection conserves the zero-filled total of 8.
    assert_relative_eq!(out.values().iter().sum::<f64>(), 8.0, epsilon = 1e-12);
    // The input still carries its missing cell.
    assert_eq!(field.count_missing(), 1);
}

#[test]
fn kernel_wider_than_field() {
    let field = Field::new(1, 3, vec![0.0, 3.0, 0.0]).unwrap();
    let out = smooth(&field, 5.0).unwrap();
    assert_eq!(out.shape(), (1, 3));
    assert_relative_eq!(out.values().iter().sum::<f64>(), 3.0, epsilon = 1e-12);
}

#[test]
fn negative_sigma_is_rejected() {
    let field = Field::filled(3, 3, 1.0).unwrap();
    assert!(matches!(
        smooth(&field, -1.0),
        Err(SmoothError::InvalidSigma { .. })
    ));
}
