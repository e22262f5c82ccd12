//! # Validator
//!
//! Walks raw cart text against a [`Schema`] and collects every problem.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  split_lines(text)          blank lines dropped, line 0 = header        │
//! │       │                                                                 │
//! │       ├── line 0 ──► check_header ──► push error, keep going            │
//! │       │                                                                 │
//! │       └── line i ──► split_cells                                        │
//! │                         │                                               │
//! │                         ├── check_row fails ──► push, skip cells        │
//! │                         │                                               │
//! │                         └── else check_cell for every cell, left→right  │
//! │                                                                         │
//! │  Result order: header, then rows top→bottom, cells left→right.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::rules::{check_cell, check_header, check_row};
use crate::schema::Schema;
use crate::text::{split_cells, split_lines};
use crate::types::ValidationError;

/// Applies a schema to raw text. Holds a borrowed schema and is cheap to copy.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'s> {
    schema: &'s Schema,
}

impl<'s> Validator<'s> {
    /// Creates a validator for `schema`.
    pub fn new(schema: &'s Schema) -> Self {
        Validator { schema }
    }

    /// The schema in use.
    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Returns every validation error in `text`, in discovery order.
    ///
    /// Content problems never turn into `Err`; an empty list means valid.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Schema, Validator};
    ///
    /// let schema = Schema::cart();
    /// let errors = Validator::new(&schema).validate(
    ///     "Product name,Price,Quantity\nMollis consequat,-3,2",
    /// );
    ///
    /// assert_eq!(errors.len(), 1);
    /// assert_eq!(errors[0].row, 1);
    /// assert_eq!(errors[0].column, Some(1));
    /// ```
    pub fn validate(&self, text: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut lines = split_lines(text);

        // Missing header is checked as an empty header line.
        let header = lines.next().unwrap_or("");
        if let Some(err) = check_header(self.schema, header) {
            errors.push(err);
        }

        for (offset, line) in lines.enumerate() {
            let row = offset + 1;
            let cells = split_cells(line);

            if let Some(err) = check_row(self.schema, &cells, row) {
                errors.push(err);
                continue;
            }

            for (column_index, (value, column)) in
                cells.iter().zip(self.schema.columns()).enumerate()
            {
                if let Some(err) = check_cell(value, column, row, column_index) {
                    errors.push(err);
                }
            }
        }

        errors
    }

    /// True if `text` has no validation errors.
    pub fn is_valid(&self, text: &str) -> bool {
        self.validate(text).is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
