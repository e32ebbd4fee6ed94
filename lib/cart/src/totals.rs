//! Billing math: flat delivery fee plus a fixed 5% tax on subtotal.
//!
//! Tax is computed on the subtotal only, never on subtotal plus
//! delivery. Every surface that shows figures (checkout, the order
//! invoice) derives them from this one type.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Flat delivery fee (₹), charged whenever the subtotal is non-zero.
pub fn delivery_fee() -> Decimal {
    Decimal::from(30)
}

/// Fixed tax rate (5%).
pub fn tax_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Derived billing figures. `total == subtotal + delivery + tax`
/// always holds, including for the empty cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub delivery: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Compute totals from a subtotal. Used by checkout (subtotal of
    /// cart lines) and by the order invoice (the order's totalAmount).
    pub fn from_subtotal(subtotal: Decimal) -> Totals {
        let delivery = if subtotal > Decimal::ZERO {
            delivery_fee()
        } else {
            Decimal::ZERO
        };
        let tax = (subtotal * tax_rate())
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Totals {
            subtotal,
            delivery,
            tax,
            total: subtotal + delivery + tax,
        }
    }
}
