use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::totals::Totals;

/// One product-and-quantity entry in the cart.
///
/// Invariants: at most one line per product id; quantity ≥ 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub quantity: u32,
}

/// Ordered collection of cart lines. Insertion order is preserved so
/// a persisted cart reloads identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Upsert a line. If the product already has a line, quantities
    /// sum; otherwise a new line is appended.
    pub fn add(&mut self, line: CartLine) {
        let qty = line.quantity.max(1);
        match self.lines.iter_mut().find(|l| l.product_id == line.product_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(qty);
                tracing::debug!(product_id = %existing.product_id, quantity = existing.quantity, "cart: bumped line");
            }
            None => {
                tracing::debug!(product_id = %line.product_id, quantity = qty, "cart: new line");
                self.lines.push(CartLine { quantity: qty, ..line });
            }
        }
    }

    /// Set a line's quantity, clamped to a minimum of 1. Setting 0 (or
    /// anything below 1) leaves the line at quantity 1 — removal only
    /// happens through [`Cart::remove`]. No-op for unknown ids.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity.max(1);
        }
    }

    /// Delete a line unconditionally. Returns true if it existed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() < before
    }

    /// Drop every line. Called after successful order placement.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Derive billing totals from the current lines.
    pub fn totals(&self) -> Totals {
        let subtotal = self
            .lines
            .iter()
            .map(|l| l.unit_price * Decimal::from(l.quantity))
            .sum();
        Totals::from_subtotal(subtotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: i64, qty: u32) -> CartLine {
        CartLine {
            product_id: id.into(),
            name: format!("product {id}"),
            unit_price: Decimal::from(price),
            image_url: None,
            quantity: qty,
        }
    }

    // ====================================================================
    // add
    // ====================================================================

    #[test]
    fn add_appends_new_line() {
        let mut cart = Cart::new();
        cart.add(line("p1", 100, 2));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("p1").unwrap().quantity, 2);
    }

    #[test]
    fn repeated_adds_sum_quantities_into_one_line() {
        let mut cart = Cart::new();
        cart.add(line("p1", 100, 2));
        cart.add(line("p1", 100, 3));
        cart.add(line("p1", 100, 1));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("p1").unwrap().quantity, 6);
    }

    #[test]
    fn add_with_zero_quantity_counts_as_one() {
        let mut cart = Cart::new();
        cart.add(line("p1", 100, 0));
        assert_eq!(cart.get("p1").unwrap().quantity, 1);
    }

    #[test]
    fn add_saturates_instead_of_overflowing() {
        let mut cart = Cart::new();
        cart.add(line("p1", 100, u32::MAX));
        cart.add(line("p1", 100, 2));
        assert_eq!(cart.get("p1").unwrap().quantity, u32::MAX);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(line("b", 10, 1));
        cart.add(line("a", 10, 1));
        cart.add(line("c", 10, 1));
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    // ====================================================================
    // set_quantity
    // ====================================================================

    #[test]
    fn set_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add(line("p1", 100, 3));
        cart.set_quantity("p1", 0);
        assert_eq!(cart.get("p1").unwrap().quantity, 1);
        // A decrement below 1 never removes the line.
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn set_quantity_updates_in_place() {
        let mut cart = Cart::new();
        cart.add(line("p1", 100, 1));
        cart.set_quantity("p1", 9);
        assert_eq!(cart.get("p1").unwrap().quantity, 9);
    }

    #[test]
    fn set_quantity_on_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.set_quantity("ghost", 5);
        assert!(cart.is_empty());
    }

    // ====================================================================
    // remove / clear
    // ====================================================================

    #[test]
    fn remove_deletes_unconditionally() {
        let mut cart = Cart::new();
        cart.add(line("p1", 100, 5));
        assert!(cart.remove("p1"));
        assert!(cart.is_empty());
        assert!(!cart.remove("p1"));
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(line("p1", 100, 1));
        cart.add(line("p2", 50, 1));
        cart.clear();
        assert!(cart.is_empty());
    }

    // ====================================================================
    // totals
    // ====================================================================

    #[test]
    fn checkout_scenario_totals() {
        // [{productId:"p1", price:100, quantity:2}]
        // subtotal=200, delivery=30, tax=10.00, total=240.00
        let mut cart = Cart::new();
        cart.add(line("p1", 100, 2));
        let t = cart.totals();
        assert_eq!(t.subtotal, Decimal::from(200));
        assert_eq!(t.delivery, Decimal::from(30));
        assert_eq!(t.tax.to_string(), "10.00");
        assert_eq!(t.total.to_string(), "240.00");
    }

    #[test]
    fn empty_cart_totals_are_all_zero() {
        let t = Cart::new().totals();
        assert_eq!(t.subtotal, Decimal::ZERO);
        assert_eq!(t.delivery, Decimal::ZERO);
        assert_eq!(t.tax, Decimal::ZERO);
        assert_eq!(t.total, Decimal::ZERO);
    }

    #[test]
    fn totals_sum_across_lines() {
        let mut cart = Cart::new();
        cart.add(line("p1", 90, 2)); // 180
        cart.add(line("p2", 45, 1)); // 45
        let t = cart.totals();
        assert_eq!(t.subtotal, Decimal::from(225));
        assert_eq!(t.total, t.subtotal + t.delivery + t.tax);
    }
}
