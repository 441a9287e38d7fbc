//! Error types for quote pricing.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for quote processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Quote failed validation (E100)
    InvalidQuote = 100,
    /// Shop configuration failed validation (E101)
    InvalidConfig = 101,
    /// Unknown quote status string (E102)
    UnknownStatus = 102,
}

/// Main error type for quote pricing.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid quote: {message}")]
    InvalidQuote { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Unknown quote status: '{value}'")]
    UnknownStatus { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::EmptyFile { .. } => ErrorCode::EmptyFile,
            QuoteError::Parse(_) => ErrorCode::ParseError,
            QuoteError::InvalidQuote { .. } => ErrorCode::InvalidQuote,
            QuoteError::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            QuoteError::UnknownStatus { .. } => ErrorCode::UnknownStatus,
            QuoteError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for quote pricing operations.
pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ErrorCode tests ====================

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::FileNotFound as i32, -1);
        assert_eq!(ErrorCode::EmptyFile as i32, -2);
        assert_eq!(ErrorCode::ParseError as i32, -3);
        assert_eq!(ErrorCode::InvalidQuote as i32, 100);
        assert_eq!(ErrorCode::InvalidConfig as i32, 101);
        assert_eq!(ErrorCode::UnknownStatus as i32, 102);
    }

    #[test]
    fn test_error_code_mapping() {
        let err = QuoteError::InvalidQuote {
            message: "quantity must be positive".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidQuote);
        assert_eq!(err.code_value(), 100);

        let err = QuoteError::FileNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert_eq!(err.code_value(), -1);
    }

    #[test]
    fn test_error_display() {
        let err = QuoteError::InvalidQuote {
            message: "markup factor must be between 1 and 10".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid quote: markup factor must be between 1 and 10"
        );

        let err = QuoteError::UnknownStatus {
            value: "archived".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown quote status: 'archived'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: QuoteError = io_err.into();
        assert!(matches!(err, QuoteError::Io(_)));
    }
}
