//! Order Total Calculator
//!
//! Computes order subtotal and grand total:
//! - line total = (item price + selected add-on prices) × quantity
//! - subtotal = Σ line totals
//! - total = subtotal − discount
//!
//! Uses rust_decimal for precision calculations, f64 at the serialization
//! boundary.

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::OrderItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Result of order total calculation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderTotals {
    /// Sum of all line totals
    pub subtotal: f64,
    /// Flat discount applied (0 when absent)
    pub discount: f64,
    /// Final order total (subtotal − discount)
    pub total: f64,
}

impl Default for OrderTotals {
    fn default() -> Self {
        Self {
            subtotal: 0.0,
            discount: 0.0,
            total: 0.0,
        }
    }
}

// ==================== Conversion Helpers ====================

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for serialization, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

// ==================== Calculation ====================

/// Calculate one line's total: (price + add-on prices) × quantity
pub fn line_total(item: &OrderItem) -> Decimal {
    let addons: Decimal = item
        .selected_addons
        .iter()
        .map(|a| to_decimal(a.price))
        .sum();
    (to_decimal(item.menu_item.price) + addons) * Decimal::from(item.quantity)
}

/// Calculate order totals from line items and an optional flat discount
///
/// The discount is NOT clamped to the subtotal: a discount larger than the
/// subtotal yields a negative total, which callers may want to surface.
pub fn calculate_order_totals(items: &[OrderItem], discount: Option<f64>) -> OrderTotals {
    let subtotal: Decimal = items.iter().map(line_total).sum();
    let discount = to_decimal(discount.unwrap_or(0.0));
    let total = subtotal - discount;

    OrderTotals {
        subtotal: to_f64(subtotal),
        discount: to_f64(discount),
        total: to_f64(total),
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Addon, MenuItemRef};

    /// Helper to build a test line
    fn make_item(price: f64, quantity: i32, addon_prices: &[f64]) -> OrderItem {
        OrderItem {
            menu_item: MenuItemRef {
                id: format!("menu_{price}"),
                name: format!("Item {price}"),
                price,
            },
            quantity,
            notes: None,
            selected_addons: addon_prices
                .iter()
                .enumerate()
                .map(|(i, p)| Addon {
                    id: format!("addon_{i}"),
                    name: format!("Addon {i}"),
                    price: *p,
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_order() {
        let totals = calculate_order_totals(&[], None);
        assert_eq!(totals, OrderTotals::default());
    }

    #[test]
    fn test_single_item_with_addon() {
        // 18.50 + 4.00 addon, qty 1, no discount -> 22.50
        let items = vec![make_item(18.50, 1, &[4.00])];
        let totals = calculate_order_totals(&items, None);

        assert_eq!(totals.subtotal, 22.50);
        assert_eq!(totals.discount, 0.0);
        assert_eq!(totals.total, 22.50);
    }

    #[test]
    fn test_quantity_multiplies_addons() {
        // (10.00 + 1.50 + 0.50) * 3 = 36.00
        let items = vec![make_item(10.00, 3, &[1.50, 0.50])];
        let totals = calculate_order_totals(&items, None);

        assert_eq!(totals.subtotal, 36.00);
        assert_eq!(totals.total, 36.00);
    }

    #[test]
    fn test_multiple_lines_sum() {
        let items = vec![make_item(12.00, 2, &[]), make_item(5.25, 1, &[0.75])];
        let totals = calculate_order_totals(&items, Some(4.00));

        assert_eq!(totals.subtotal, 30.00);
        assert_eq!(totals.discount, 4.00);
        assert_eq!(totals.total, 26.00);
    }

    #[test]
    fn test_discount_is_not_clamped() {
        // Discount greater than subtotal yields a negative total
        let items = vec![make_item(10.00, 1, &[])];
        let totals = calculate_order_totals(&items, Some(15.00));

        assert_eq!(totals.subtotal, 10.00);
        assert_eq!(totals.total, -5.00);
    }

    #[test]
    fn test_totals_identity() {
        // total = subtotal - discount, exactly
        let items = vec![make_item(7.30, 4, &[0.20]), make_item(2.10, 2, &[])];
        let totals = calculate_order_totals(&items, Some(3.33));

        let expected = to_f64(to_decimal(totals.subtotal) - to_decimal(totals.discount));
        assert_eq!(totals.total, expected);
    }

    #[test]
    fn test_no_float_drift() {
        // 0.1 + 0.2 style inputs stay exact through Decimal
        let items = vec![make_item(0.10, 1, &[0.20])];
        let totals = calculate_order_totals(&items, None);

        assert_eq!(totals.subtotal, 0.30);
    }

    #[test]
    fn test_subtotal_non_negative_for_valid_inputs() {
        let items = vec![
            make_item(0.0, 5, &[]),
            make_item(3.99, 1, &[0.0]),
            make_item(100.0, 10, &[2.5, 2.5]),
        ];
        let totals = calculate_order_totals(&items, None);
        assert!(totals.subtotal >= 0.0);
    }
}
