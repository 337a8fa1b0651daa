//! Error handling module for the lox CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the driver.

use std::path::PathBuf;

use lox_lex::ScanError;
use thiserror::Error;

/// Exit status for input the scanner rejects (`EX_DATAERR`).
pub const EXIT_DATA_ERROR: u8 = 65;

/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Main error type for the lox CLI application.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A configuration file could not be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The logging subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// A source file could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    ReadSource {
        /// File that was being read.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source text was rejected by the scanner.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl DriverError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Scan(_) => EXIT_DATA_ERROR,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use lox_util::Span;

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_read_source_display() {
        let err = DriverError::ReadSource {
            path: PathBuf::from("missing.lox"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Cannot read missing.lox: not found");
    }

    #[test]
    fn test_scan_error_is_transparent() {
        let scan = ScanError::UnexpectedCharacter {
            character: '@',
            line: 2,
            span: Span::new(3, 4, 2),
        };
        let err: DriverError = scan.into();
        assert_eq!(err.to_string(), "[line 2] Error: Unexpected character '@'.");
        assert_eq!(err.exit_code(), EXIT_DATA_ERROR);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DriverError = json_err.into();
        assert!(matches!(err, DriverError::Json(_)));
    }
}
