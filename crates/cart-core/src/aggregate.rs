//! # Aggregator
//!
//! Sums item subtotals into the cart total.
//!
//! Plain `f64` accumulation, no rounding. Compare totals with a tolerance.

use crate::types::CartItem;

/// Sums `price * quantity` over `items`.
///
/// ## Example
/// ```rust
/// use cart_core::aggregate::calc_total;
/// use cart_core::CartItem;
///
/// let items = vec![CartItem {
///     id: "a".into(),
///     name: "Mollis consequat".into(),
///     price: 9.0,
///     quantity: 2.0,
/// }];
/// assert_eq!(calc_total(&items), 18.0);
/// ```
pub fn calc_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::subtotal).sum()
}
