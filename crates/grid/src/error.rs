//! Error types for the nox-grid crate.

/// Error type for all fallible operations in the nox-grid crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GridError {
    /// Returned when a field would have zero rows or columns.
    #[error("field is empty: {rows}x{cols}")]
    EmptyField {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Returned when array lengths don't match.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched field.
        field: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when an axis is not strictly increasing.
    #[error("{axis} axis is not strictly increasing at index {index}")]
    NonMonotonicAxis {
        /// Axis name (`latitude` or `longitude`).
        axis: &'static str,
        /// Index of the first offending sample.
        index: usize,
    },

    /// Returned when an axis value falls outside its geographic range.
    #[error("{axis} value {value} outside [{min}, {max}]")]
    AxisOutOfRange {
        /// Axis name (`latitude` or `longitude`).
        axis: &'static str,
        /// Offending value.
        value: f64,
        /// Lower bound of the valid range.
        min: f64,
        /// Upper bound of the valid range.
        max: f64,
    },

    /// Returned when source configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
