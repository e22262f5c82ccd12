//! # Rule Engine
//!
//! Per-cell predicates and structural checks.
//!
//! ## Check Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Rule Engine                                     │
//! │                                                                         │
//! │  Structural                                                            │
//! │  ├── check_header  - header names match schema (first mismatch only)   │
//! │  └── check_row     - data row has exactly schema.len() cells           │
//! │           │                                                             │
//! │           ▼  (only when the row shape is right)                         │
//! │  Per cell                                                              │
//! │  └── check_cell    - column's CellRules in order, first failure wins   │
//! │                                                                         │
//! │  Every check returns Option<ValidationError>; None means "passed".     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::rules::{check_cell, CellRule};
//! use cart_core::schema::Schema;
//!
//! let schema = Schema::cart();
//! let price = schema.column(1).unwrap();
//!
//! assert!(check_cell("9.00", price, 1, 1).is_none());
//! assert!(check_cell("-3", price, 1, 1).is_some());
//! assert!(!CellRule::PositiveNumber.check("0"));
//! ```

use serde::{Deserialize, Serialize};

use crate::schema::{Column, Schema};
use crate::text::split_cells;
use crate::types::ValidationError;

// =============================================================================
// Predicates
// =============================================================================

/// True if `value` has any non-whitespace content.
pub fn is_nonempty_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True if `value` parses to a finite number greater than zero.
///
/// ## Example
/// ```rust
/// use cart_core::rules::is_positive_number;
///
/// assert!(is_positive_number("10.32"));
/// assert!(!is_positive_number("0"));
/// assert!(!is_positive_number("-3"));
/// assert!(!is_positive_number("abc"));
/// ```
pub fn is_positive_number(value: &str) -> bool {
    match value.trim().parse::<f64>() {
        Ok(n) => n.is_finite() && n > 0.0,
        Err(_) => false,
    }
}

// =============================================================================
// Cell Rules
// =============================================================================

/// A named predicate over one cell's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellRule {
    /// Fails on empty or whitespace-only text.
    #[serde(rename = "nonempty")]
    NonEmpty,

    /// Fails when the text is not a number, or the number is `<= 0`.
    #[serde(rename = "positive-number")]
    PositiveNumber,
}

impl CellRule {
    /// Rule identifier.
    pub const fn id(&self) -> &'static str {
        match self {
            CellRule::NonEmpty => "nonempty",
            CellRule::PositiveNumber => "positive-number",
        }
    }

    /// Runs the predicate.
    pub fn check(&self, value: &str) -> bool {
        match self {
            CellRule::NonEmpty => is_nonempty_string(value),
            CellRule::PositiveNumber => is_positive_number(value),
        }
    }

    /// Failure message. Always quotes the raw text, never a parsed value.
    pub fn message(&self, value: &str) -> String {
        match self {
            CellRule::NonEmpty => {
                format!("Expected cell to be a nonempty string but received \"{}\".", value)
            }
            CellRule::PositiveNumber => {
                format!("Expected cell to be a positive number but received \"{}\".", value)
            }
        }
    }
}

// =============================================================================
// Structural Checks
// =============================================================================

/// Checks the header line against the schema's column names.
///
/// Only the overlapping positions are compared; a header with extra or
/// missing cells is not reported on its own. Returns the first mismatch.
pub fn check_header(schema: &Schema, header_line: &str) -> Option<ValidationError> {
    let cells = split_cells(header_line);

    schema
        .column_names()
        .zip(cells)
        .enumerate()
        .find(|(_, (expected, actual))| expected != actual)
        .map(|(index, (expected, actual))| {
            ValidationError::header(
                index,
                format!(
                    "Expected header to be named \"{}\" but received {}.",
                    expected, actual
                ),
            )
        })
}

/// Checks that a data row has exactly one cell per column.
pub fn check_row(schema: &Schema, cells: &[&str], row: usize) -> Option<ValidationError> {
    if cells.len() == schema.len() {
        return None;
    }

    Some(ValidationError::row(
        row,
        format!(
            "Expected row to have {} cells but received {}.",
            schema.len(),
            cells.len()
        ),
    ))
}

/// Applies a column's rules to one cell, stopping at the first failure.
pub fn check_cell(
    value: &str,
    column: &Column,
    row: usize,
    column_index: usize,
) -> Option<ValidationError> {
    column
        .validate
        .iter()
        .find(|rule| !rule.check(value))
        .map(|rule| ValidationError::cell(row, column_index, rule.message(value)))
}

// =============================================================================
// Unit Tests
// =============================================================================
