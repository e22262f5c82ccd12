//! # Row Parser
//!
//! Turns one data line into a [`CartItem`].
//!
//! The line is assumed to have passed the [`Validator`](crate::validator::Validator).
//! Cells are read by position: 0 = name, 1 = price, 2 = quantity.

use crate::error::{CoreError, CoreResult};
use crate::ids::IdGenerator;
use crate::text::split_cells;
use crate::types::CartItem;

const NAME: usize = 0;
const PRICE: usize = 1;
const QUANTITY: usize = 2;

/// Parses one validated data line.
///
/// ## Example
/// ```rust
/// use cart_core::ids::SequentialIds;
/// use cart_core::row::parse_line;
///
/// let item = parse_line("Mollis consequat,9.00,2.5", &SequentialIds::default()).unwrap();
///
/// assert_eq!(item.name, "Mollis consequat");
/// assert_eq!(item.price, 9.0);
/// assert_eq!(item.quantity, 2.5);
/// assert_eq!(item.id, "item-1");
/// ```
pub fn parse_line(line: &str, ids: &dyn IdGenerator) -> CoreResult<CartItem> {
    let cells = split_cells(line);

    let name = cell(&cells, NAME)?.to_string();
    let price = number(&cells, PRICE)?;
    let quantity = number(&cells, QUANTITY)?;

    Ok(CartItem {
        id: ids.new_id(),
        name,
        price,
        quantity,
    })
}

fn cell<'a>(cells: &[&'a str], column: usize) -> CoreResult<&'a str> {
    cells
        .get(column)
        .copied()
        .ok_or(CoreError::MissingCell { column })
}

fn number(cells: &[&str], column: usize) -> CoreResult<f64> {
    let value = cell(cells, column)?;
    value.parse::<f64>().map_err(|_| CoreError::MalformedNumber {
        column,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    #[test]
    fn test_parse_line() {
        let ids = || "fixed-id".to_string();
        let item = parse_line("Mollis consequat,9.00,2.5", &ids).unwrap();

        assert_eq!(
            item,
            CartItem {
                id: "fixed-id".to_string(),
                name: "Mollis consequat".to_string(),
                price: 9.0,
                quantity: 2.5,
            }
        );
    }

    #[test]
    fn test_parse_line_trims_cells() {
        let item = parse_line("  Tvoluptatem , 10.32 ,  1 ", &SequentialIds::default()).unwrap();
        assert_eq!(item.name, "Tvoluptatem");
        assert!((item.price - 10.32).abs() < f64::EPSILON);
        assert_eq!(item.quantity, 1.0);
    }

    #[test]
    fn test_parse_line_calls_generator_once_per_row() {
        let ids = SequentialIds::new("r");
        let a = parse_line("A,1,1", &ids).unwrap();
        let b = parse_line("B,2,2", &ids).unwrap();
        assert_eq!((a.id.as_str(), b.id.as_str()), ("r1", "r2"));
    }

    #[test]
    fn test_parse_line_refuses_unvalidated_rows() {
        let ids = SequentialIds::default();

        assert!(matches!(
            parse_line("Only a name", &ids),
            Err(CoreError::MissingCell { column: 1 })
        ));
        assert!(matches!(
            parse_line("Name,abc,1", &ids),
            Err(CoreError::MalformedNumber { column: 1, .. })
        ));
    }
}
