//! # Domain Types
//!
//! Records produced by the validation and parsing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ValidationError │   │    CartItem     │   │   CartResult    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  type (kind)    │   │  id (generated) │   │  items          │       │
//! │  │  row            │   │  name           │   │  total          │       │
//! │  │  column (-1)    │   │  price (f64)    │   │                 │       │
//! │  │  message        │   │  quantity (f64) │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │   ErrorKind     │   Serialized as "header" | "row" | "cell"         │
//! │  │  Header         │                                                   │
//! │  │  Row            │                                                   │
//! │  │  Cell           │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are immutable once built. `CartResult::total` is only ever
//! computed by [`calc_total`](crate::aggregate::calc_total).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::aggregate::calc_total;

// =============================================================================
// Error Kind
// =============================================================================

/// Where a validation error was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// A header cell doesn't carry the expected column name.
    Header,
    /// A data row has the wrong number of cells.
    Row,
    /// A cell failed one of its column's rules.
    Cell,
}

impl ErrorKind {
    /// Returns the wire tag for this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Header => "header",
            ErrorKind::Row => "row",
            ErrorKind::Cell => "cell",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single problem found while validating cart text.
///
/// `row` and `column` are zero-based indices into the non-blank lines of the
/// input and the cells of that line. Row-structural errors have no column;
/// on the wire that is written as `-1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error, TS)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub row: usize,
    #[serde(with = "column_index")]
    #[ts(type = "number")]
    pub column: Option<usize>,
    pub message: String,
}

impl ValidationError {
    /// A header name mismatch. Headers always live on row 0.
    pub fn header(column: usize, message: impl Into<String>) -> Self {
        ValidationError {
            kind: ErrorKind::Header,
            row: 0,
            column: Some(column),
            message: message.into(),
        }
    }

    /// A wrong cell count on a data row.
    pub fn row(row: usize, message: impl Into<String>) -> Self {
        ValidationError {
            kind: ErrorKind::Row,
            row,
            column: None,
            message: message.into(),
        }
    }

    /// A cell that failed a rule.
    pub fn cell(row: usize, column: usize, message: impl Into<String>) -> Self {
        ValidationError {
            kind: ErrorKind::Cell,
            row,
            column: Some(column),
            message: message.into(),
        }
    }

    /// Column index as written on the wire (`-1` for row-level errors).
    pub fn column_index(&self) -> i64 {
        self.column.map_or(-1, |c| c as i64)
    }
}

/// Serializes `Option<usize>` as a plain integer with `-1` standing for `None`.
mod column_index {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(column: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match column {
            Some(c) => serializer.serialize_i64(*c as i64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        if raw < 0 {
            Ok(None)
        } else {
            Ok(Some(raw as usize))
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One parsed line of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Unique identifier from the id generator.
    pub id: String,

    /// Product name, trimmed.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Quantity; fractional quantities are allowed.
    pub quantity: f64,
}

impl CartItem {
    /// Line subtotal (price × quantity).
    #[inline]
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity
    }
}

// =============================================================================
// Cart Result
// =============================================================================

/// The fully parsed cart.
///
/// Fields are private so the total can't drift from the items it was
/// computed from.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CartResult {
    items: Vec<CartItem>,
    total: f64,
}

impl CartResult {
    /// Builds the result, computing the total from the items.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = calc_total(&items);
        CartResult { items, total }
    }

    /// Parsed items in input order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of all item subtotals.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Consumes the result, returning the items.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Serializes to compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes to indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: f64) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            price,
            quantity,
        }
    }

    #[test]
    fn test_error_kind_tags() {
        assert_eq!(ErrorKind::Header.to_string(), "header");
        assert_eq!(ErrorKind::Row.to_string(), "row");
        assert_eq!(ErrorKind::Cell.to_string(), "cell");
        assert_eq!(serde_json::to_string(&ErrorKind::Cell).unwrap(), "\"cell\"");
    }

    #[test]
    fn test_row_error_serializes_column_as_minus_one() {
        let err = ValidationError::row(5, "Expected row to have 3 cells but received 2.");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "row");
        assert_eq!(json["row"], 5);
        assert_eq!(json["column"], -1);
        assert_eq!(err.column_index(), -1);
    }

    #[test]
    fn test_validation_error_deserializes_wire_shape() {
        let json = r#"{"type":"cell","row":1,"column":1,"message":"bad"}"#;
        let err: ValidationError = serde_json::from_str(json).unwrap();
        assert_eq!(err, ValidationError::cell(1, 1, "bad"));

        let json = r#"{"type":"row","row":2,"column":-1,"message":"short"}"#;
        let err: ValidationError = serde_json::from_str(json).unwrap();
        assert_eq!(err.column, None);
    }

    #[test]
    fn test_validation_error_display_is_message() {
        let err = ValidationError::header(0, "Expected header to be named \"Price\" but received Cost.");
        assert_eq!(
            err.to_string(),
            "Expected header to be named \"Price\" but received Cost."
        );
    }

    #[test]
    fn test_cart_item_subtotal() {
        assert!((item("a", 28.72, 10.0).subtotal() - 287.2).abs() < 0.001);
    }

    #[test]
    fn test_cart_result_total_tracks_items() {
        let result = CartResult::from_items(vec![item("a", 9.0, 2.0), item("b", 10.32, 1.0)]);
        assert_eq!(result.items().len(), 2);
        assert!((result.total() - 28.32).abs() < 0.001);
    }

    #[test]
    fn test_cart_result_json_shape() {
        let result = CartResult::from_items(vec![item("a", 9.0, 2.0)]);
        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

        assert_eq!(json["items"][0]["id"], "a");
        assert_eq!(json["items"][0]["price"], 9.0);
        assert_eq!(json["total"], 18.0);
    }
}
