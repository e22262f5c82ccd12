//! # Parser Error Types
//!
//! Error types for the orchestrator.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (read collaborator)  ──► ParserError::Io (as source)   │
//! │                                                                         │
//! │  Vec<ValidationError> (non-empty)    ──► ParserError::ValidationFailed │
//! │                                          "Validation failed! ..."      │
//! │                                                                         │
//! │  cart_core::CoreError                ──► ParserError::Core             │
//! │                                                                         │
//! │  toml / env problems                 ──► ParserError::InvalidConfig    │
//! │                                          ParserError::ConfigLoadFailed │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use cart_core::{CoreError, ValidationError};
use thiserror::Error;

/// Orchestrator errors.
#[derive(Debug, Error)]
pub enum ParserError {
    // =========================================================================
    // Input Errors
    // =========================================================================
    /// The read collaborator failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is larger than `input.max_bytes`.
    #[error("Input {} is {size} bytes, limit is {max}", .path.display())]
    InputTooLarge { path: PathBuf, size: usize, max: usize },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// The input had validation errors; nothing was parsed.
    #[error("Validation failed! {} error(s) found", .errors.len())]
    ValidationFailed { errors: Vec<ValidationError> },

    /// Row parsing refused a row (wraps CoreError).
    #[error("Parse error: {0}")]
    Core(#[from] CoreError),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Config values are inconsistent.
    #[error("Invalid parser configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),
}

impl From<toml::de::Error> for ParserError {
    fn from(err: toml::de::Error) -> Self {
        ParserError::ConfigLoadFailed(err.to_string())
    }
}

impl ParserError {
    /// The validation errors, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            ParserError::ValidationFailed { errors } => Some(errors),
            _ => None,
        }
    }

    /// Returns true for [`ParserError::ValidationFailed`].
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, ParserError::ValidationFailed { .. })
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ParserError::InvalidConfig(_) | ParserError::ConfigLoadFailed(_)
        )
    }
}

/// Convenience type alias for Results with ParserError.
pub type ParserResult<T> = Result<T, ParserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failed_message() {
        let err = ParserError::ValidationFailed {
            errors: vec![ValidationError::row(2, "Expected row to have 3 cells but received 2.")],
        };

        assert!(err.to_string().starts_with("Validation failed!"));
        assert!(err.is_validation_failure());
        assert_eq!(err.validation_errors().map(|e| e.len()), Some(1));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = ParserError::Io {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        assert_eq!(err.to_string(), "Failed to read missing.csv: no such file");
        assert!(err.source().is_some());
        assert!(err.validation_errors().is_none());
    }

    #[test]
    fn test_config_error_category() {
        assert!(ParserError::InvalidConfig("x".into()).is_config_error());
        assert!(!ParserError::InputTooLarge {
            path: PathBuf::from("a"),
            size: 2,
            max: 1
        }
        .is_config_error());
    }
}
