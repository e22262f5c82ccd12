//! # Schema
//!
//! Declarative description of the expected columns.
//!
//! ## Column Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Schema::cart()                                                         │
//! │                                                                         │
//! │  index   name            type     rules                                │
//! │  ─────   ─────────────   ──────   ───────────────────                  │
//! │    0     Product name    string   [nonempty]                           │
//! │    1     Price           number   [positive-number]                    │
//! │    2     Quantity        number   [positive-number]                    │
//! │                                                                         │
//! │  The same order is the expected header order AND the expected cell     │
//! │  position in every data row.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A schema is a plain value: build it once, hand it to the
//! [`Validator`](crate::validator::Validator), share it freely.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::rules::CellRule;

// =============================================================================
// Column Type
// =============================================================================

/// Value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
}

// =============================================================================
// Column
// =============================================================================

/// One expected column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Name expected in the header, compared after trimming.
    pub name: String,

    /// Value type of the cells.
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// Rules applied to every cell, in order. The first failure wins.
    pub validate: Vec<CellRule>,
}

impl Column {
    /// Creates a column.
    pub fn new(name: impl Into<String>, column_type: ColumnType, validate: Vec<CellRule>) -> Self {
        Column {
            name: name.into(),
            column_type,
            validate,
        }
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Ordered list of expected columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Builds a schema from a custom column list.
    ///
    /// ## Rules
    /// - At least one column
    /// - No blank column names
    /// - No duplicate column names
    ///
    /// Names are stored trimmed.
    pub fn new(mut columns: Vec<Column>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, column) in columns.iter_mut().enumerate() {
            let name = column.name.trim().to_string();
            if name.is_empty() {
                return Err(SchemaError::EmptyColumnName { index });
            }
            if !seen.insert(name.clone()) {
                return Err(SchemaError::DuplicateColumn(name));
            }
            column.name = name;
        }

        Ok(Schema { columns })
    }

    /// The shopping cart schema: product name, price, quantity.
    pub fn cart() -> Self {
        Schema {
            columns: vec![
                Column::new("Product name", ColumnType::String, vec![CellRule::NonEmpty]),
                Column::new("Price", ColumnType::Number, vec![CellRule::PositiveNumber]),
                Column::new("Quantity", ColumnType::Number, vec![CellRule::PositiveNumber]),
            ],
        }
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column at `index`, if any.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Expected header names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of columns (expected cells per row).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::cart()
    }
}
