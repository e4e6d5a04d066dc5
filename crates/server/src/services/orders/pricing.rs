//! Order totals computation.
//!
//! Totals are a creation-time policy: computed once from the submitted
//! line items and never recomputed afterwards.

use rust_decimal::Decimal;

use crate::models::OrderItem;

/// Flat shipping fee applied to every order.
pub const SHIPPING_FEE: Decimal = Decimal::from_parts(599, 0, 0, false, 2);

/// Tax rate applied to the subtotal (10%).
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Computed monetary fields of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Compute order totals from line items.
///
/// `subtotal = Σ(price × quantity)`, `total = subtotal + shipping + tax`,
/// each rounded to two decimal places.
#[must_use]
pub fn compute_totals(items: &[OrderItem]) -> Totals {
    let subtotal: Decimal = items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum::<Decimal>()
        .round_dp(2);

    let tax = (subtotal * TAX_RATE).round_dp(2);
    let total = subtotal + SHIPPING_FEE + tax;

    Totals {
        subtotal,
        shipping: SHIPPING_FEE,
        tax,
        total,
    }
}
