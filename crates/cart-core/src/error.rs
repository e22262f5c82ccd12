//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                          │
//! │  ├── SchemaError  - Column list rejected at construction               │
//! │  └── CoreError    - Row parser refused a row                           │
//! │                                                                         │
//! │  ValidationError (types.rs) is NOT an error path here: it is data,     │
//! │  returned in a list by the Validator.                                  │
//! │                                                                         │
//! │  cart-parser errors (separate crate)                                   │
//! │  └── ParserError  - I/O, config, "Validation failed!"                  │
//! │                                                                         │
//! │  Flow: CoreError → ParserError → caller                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Schema Error
// =============================================================================

/// Errors raised when building a [`Schema`](crate::schema::Schema) from a
/// custom column list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A schema must describe at least one column.
    #[error("Schema must contain at least one column")]
    Empty,

    /// Column names are matched against header cells, so they can't be blank.
    #[error("Column {index} has an empty name")]
    EmptyColumnName { index: usize },

    /// Two columns share a name.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),
}

// =============================================================================
// Core Error
// =============================================================================

/// Core parsing errors.
///
/// The row parser does not re-validate its input. These variants only exist so
/// that a row which slipped past the validator is refused instead of turned
/// into made-up values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The row has fewer cells than the parser reads.
    #[error("Row has no cell for column {column}")]
    MissingCell { column: usize },

    /// A numeric column held text that is not a number.
    #[error("Column {column} is not a number: {value:?}")]
    MalformedNumber { column: usize, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::MalformedNumber {
            column: 1,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Column 1 is not a number: \"abc\"");

        let err = CoreError::MissingCell { column: 2 };
        assert_eq!(err.to_string(), "Row has no cell for column 2");
    }

    #[test]
    fn test_schema_error_messages() {
        assert_eq!(
            SchemaError::Empty.to_string(),
            "Schema must contain at least one column"
        );
        assert_eq!(
            SchemaError::DuplicateColumn("Price".to_string()).to_string(),
            "Duplicate column name: Price"
        );
    }
}
