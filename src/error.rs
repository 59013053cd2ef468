//! Error types for the dxftree library

use std::io;
use thiserror::Error;

/// Main error type for dxftree operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing DXF content: bad group code, violated structural
    /// preconditions, unparseable values
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unrecognized unit name or $INSUNITS code
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for dxftree operations
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
        let err = DxfError::Parse("group code <X> is not a number".to_string());
        assert_eq!(err.to_string(), "Parse error: group code <X> is not a number");
    }

    #[test]
    fn test_unknown_unit_display() {
        let err = DxfError::UnknownUnit("FURLONGS".to_string());
        assert!(err.to_string().contains("FURLONGS"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}
