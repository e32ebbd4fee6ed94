//! Terminal rendering helpers: money formatting and the tables the
//! storefront and admin commands print.

use nourish_cart::{Cart, Totals};
use nourish_model::{NextAction, Order, Payment, Product, User};
use rust_decimal::Decimal;

/// Render an amount as rupees with two decimal places.
pub fn money(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}

pub fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products.");
        return;
    }
    println!(
        "{:<12} {:<28} {:<12} {:<10} {}",
        "ID", "NAME", "CATEGORY", "PRICE", "STOCK"
    );
    for p in products {
        let stock = p
            .stock_quantity
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:<28} {:<12} {:<10} {}",
            p.id,
            p.name,
            p.category,
            money(p.price),
            stock
        );
    }
}

pub fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    println!("{:<12} {:<28} {:>4} {:>12} {:>12}", "ID", "NAME", "QTY", "PRICE", "SUBTOTAL");
    for line in cart.lines() {
        let line_subtotal = line.unit_price * Decimal::from(line.quantity);
        println!(
            "{:<12} {:<28} {:>4} {:>12} {:>12}",
            line.product_id,
            line.name,
            line.quantity,
            money(line.unit_price),
            money(line_subtotal)
        );
    }
    println!();
    print_totals(&cart.totals());
}

pub fn print_totals(totals: &Totals) {
    println!("{:>46} {:>12}", "Subtotal:", money(totals.subtotal));
    println!("{:>46} {:>12}", "Delivery:", money(totals.delivery));
    println!("{:>46} {:>12}", "Tax (5%):", money(totals.tax));
    println!("{:>46} {:>12}", "Total:", money(totals.total));
}

pub fn print_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("No orders.");
        return;
    }
    println!(
        "{:<12} {:<20} {:>12} {:<14} {:<18} {}",
        "ID", "PLACED", "TOTAL", "STATUS", "PAYMENT", "NEXT"
    );
    for o in orders {
        let placed = o.created_at.as_deref().unwrap_or("-");
        let next = match o.next_action() {
            NextAction::Pay => "pay",
            NextAction::Reorder => "reorder",
        };
        println!(
            "{:<12} {:<20} {:>12} {:<14} {:<18} {}",
            o.id,
            placed,
            money(o.total_amount),
            o.status.badge().to_string(),
            o.payment_status.badge().to_string(),
            next
        );
    }
}

/// Itemized invoice for one order. Fees are re-derived from the
/// order's item total, so this always matches what checkout showed.
pub fn print_order_detail(order: &Order) {
    println!("Order {}", order.id);
    if let Some(placed) = &order.created_at {
        println!("Placed:   {placed}");
    }
    println!("Status:   {}", order.status.badge());
    println!("Payment:  {}", order.payment_status.badge());
    if let Some(reference) = &order.payment_reference_id {
        println!("Ref:      {reference}");
    }
    println!();

    if !order.items.is_empty() {
        println!("{:<28} {:>4} {:>12} {:>12}", "ITEM", "QTY", "PRICE", "SUBTOTAL");
        for item in &order.items {
            let name = item.product_name.as_deref().unwrap_or(&item.product_id);
            println!(
                "{:<28} {:>4} {:>12} {:>12}",
                name,
                item.quantity,
                money(item.price),
                money(item.subtotal)
            );
        }
        println!();
    }

    print_totals(&Totals::from_subtotal(order.total_amount));

    match order.next_action() {
        NextAction::Pay => println!("\nPayment due. Run `nourish pay {}`.", order.id),
        NextAction::Reorder => println!("\nRun `nourish reorder {}` to order this again.", order.id),
    }
}

pub fn print_payments(payments: &[Payment]) {
    if payments.is_empty() {
        println!("No payments.");
        return;
    }
    println!(
        "{:<12} {:<12} {:>12} {:<18} {}",
        "ID", "ORDER", "AMOUNT", "STATUS", "REFERENCE"
    );
    for p in payments {
        println!(
            "{:<12} {:<12} {:>12} {:<18} {}",
            p.id,
            p.order_id,
            money(p.amount),
            p.status.badge().to_string(),
            p.payment_reference_id.as_deref().unwrap_or("-")
        );
    }
}

pub fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No users.");
        return;
    }
    println!("{:<6} {:<16} {:<28} {:<8} {}", "ID", "USERNAME", "EMAIL", "ROLE", "NAME");
    for u in users {
        println!(
            "{:<6} {:<16} {:<28} {:<8} {}",
            u.id,
            u.username,
            u.email.as_deref().unwrap_or("-"),
            u.role.as_str(),
            u.full_name.as_deref().unwrap_or("-")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_renders_two_decimals() {
        assert_eq!(money(Decimal::from(240)), "₹240.00");
        assert_eq!(money(Decimal::new(1050, 2)), "₹10.50");
        assert_eq!(money(Decimal::ZERO), "₹0.00");
    }
}
