//! Error types for tessera_io crate.
//!
//! Provides structured error handling for board files, generated boards
//! and JSON snapshots.

use thiserror::Error;

/// Main error type for tessera_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A board record that is not two comma-separated integers
    #[error("Malformed board record on line {line}: {record:?}")]
    Parse { line: usize, record: String },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for tessera_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Creates a new serialization error.
    #[must_use]
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates a new validation error.
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a new parse error for a 1-based line number.
    #[must_use]
    pub fn parse<S: Into<String>>(line: usize, record: S) -> Self {
        Self::Parse {
            line,
            record: record.into(),
        }
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IoError::serialization("test error");
        assert_eq!(err.to_string(), "Serialization error: test error");
    }

    #[test]
    fn test_parse_error_display() {
        let err = IoError::parse(3, "1;2");
        assert_eq!(err.to_string(), "Malformed board record on line 3: \"1;2\"");
    }

    #[test]
    fn test_error_context() {
        let err = IoError::validation("empty board").with_context("loading board.txt");
        assert!(err.to_string().contains("loading board.txt"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IoError = io_err.into();
        assert!(matches!(err, IoError::FileSystem(_)));
    }
}
