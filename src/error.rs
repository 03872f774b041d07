//! Error types for dxf_render

use std::io;
use thiserror::Error;

/// Main error type for reading and rendering drawings
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing the record stream
    #[error("Parse error: {0}")]
    Parse(String),

    /// Text could not be decoded
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Invalid entity type
    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    /// A geometric value was constructed from arguments that do not describe one
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Failure inside curve evaluation or conversion
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Failures local to spline evaluation and Bezier conversion.
///
/// These never abort a whole render: the SVG path catches them and falls
/// back to sampled polylines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("t out of bounds [0,1]: {0}")]
    ParameterOutOfRange(f64),

    #[error("degree must be at least 1 (linear)")]
    DegreeTooLow,

    #[error("degree {degree} must be less than or equal to point count - 1 ({points} points)")]
    DegreeTooHigh { degree: usize, points: usize },

    #[error("bad knot vector length: expected {expected}, got {actual}")]
    BadKnotVectorLength { expected: usize, actual: usize },

    #[error("knot vector is not pinned for order {order}")]
    NotPinned { order: usize },

    #[error("invalid new knot {0}")]
    InvalidKnot(f64),

    #[error("spline has no control points")]
    NoControlPoints,

    #[error("control point {0} is missing")]
    MissingControlPoint(isize),
}

/// Result type alias for dxf_render operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::Parse("Invalid DXF code at line 3: 'abc'".to_string());
        assert_eq!(err.to_string(), "Parse error: Invalid DXF code at line 3: 'abc'");
    }

    #[test]
    fn test_curve_error_is_transparent() {
        let err: DxfError = CurveError::NotPinned { order: 4 }.into();
        assert_eq!(err.to_string(), "knot vector is not pinned for order 4");
        assert!(matches!(err, DxfError::Curve(CurveError::NotPinned { order: 4 })));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}
