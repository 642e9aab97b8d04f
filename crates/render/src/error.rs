//! Error types for the nox-render crate.

use crate::export::ExportFormat;

/// Error type for all fallible operations in the nox-render crate.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the axes do not describe the field being drawn.
    #[error(
        "field is {}x{} but axes are {}x{}",
        field.0,
        field.1,
        axes.0,
        axes.1
    )]
    ShapeMismatch {
        /// Field shape.
        field: (usize, usize),
        /// Latitude and longitude axis lengths.
        axes: (usize, usize),
    },

    /// Returned when an export format has no encoder.
    #[error("unsupported export format: {format}")]
    UnsupportedFormat {
        /// Requested format.
        format: ExportFormat,
    },

    /// Image encoding error.
    #[error(transparent)]
    Encode(#[from] image::ImageError),

    /// Filesystem error while writing an artifact.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_config() {
        let e = RenderError::InvalidConfig {
            reason: "vmin must be below vmax".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: vmin must be below vmax"
        );
    }

    #[test]
    fn display_shape_mismatch() {
        let e = RenderError::ShapeMismatch {
            field: (4, 8),
            axes: (8, 4),
        };
        assert_eq!(e.to_string(), "field is 4x8 but axes are 8x4");
    }

    #[test]
    fn display_unsupported_format() {
        let e = RenderError::UnsupportedFormat {
            format: ExportFormat::Pdf,
        };
        assert_eq!(e.to_string(), "unsupported export format: pdf");
    }

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: RenderError = io.into();
        assert!(matches!(e, RenderError::Io(_)));
        assert_eq!(e.to_string(), "gone");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<RenderError>();
    }
}
