//! Checkout and customer order views.

use std::path::Path;

use anyhow::Result;
use nourish_cart::CartLine;
use nourish_client::Gateway;
use nourish_model::{Order, OrderItemRequest, OrderRequest};
use nourish_session::Required;

use crate::config::ClientConfig;
use crate::context::{require_success, AppContext};
use crate::output;

/// Place the cart's lines as an order. The cart file is cleared only
/// after the server confirms the order; on any failure it is left
/// intact.
async fn place_from_cart(gateway: &Gateway, user_id: i64, cart_path: &Path) -> Result<Order> {
    let cart = nourish_cart::load(cart_path);
    if cart.is_empty() {
        anyhow::bail!("Cart is empty. Add something with `nourish cart add <product-id>`.");
    }

    let req = OrderRequest {
        user_id,
        items: cart
            .lines()
            .iter()
            .map(|l| OrderItemRequest {
                product_id: l.product_id.clone(),
                quantity: l.quantity,
            })
            .collect(),
    };

    let order = require_success(gateway.orders().place(&req).await)?;
    nourish_cart::clear_file(cart_path)?;
    Ok(order)
}

/// Place an order from the current cart, then clear the cart.
pub async fn checkout(ctx: &AppContext, yes: bool) -> Result<()> {
    let user_id = ctx.user_id()?;

    let cart_path = ClientConfig::cart_path();
    let cart = nourish_cart::load(&cart_path);
    if cart.is_empty() {
        anyhow::bail!("Cart is empty. Add something with `nourish cart add <product-id>`.");
    }

    output::print_cart(&cart);
    if !yes {
        eprint!("Place this order? [y/N]: ");
        let mut s = String::new();
        std::io::stdin().read_line(&mut s)?;
        if !s.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let order = place_from_cart(&ctx.gateway, user_id, &cart_path).await?;

    println!("Order placed: {}", order.id);
    println!("Pay with `nourish pay {}`.", order.id);
    Ok(())
}

/// The signed-in customer's orders, newest first as the service
/// returns them.
pub async fn list(ctx: &AppContext) -> Result<()> {
    let user_id = ctx.user_id()?;
    let orders = require_success(ctx.gateway.orders().for_user(user_id).await)?;
    output::print_orders(&orders);
    Ok(())
}

/// One order, itemized with derived fees.
pub async fn show(ctx: &AppContext, order_id: &str) -> Result<()> {
    ctx.require(Required::Authenticated)?;
    let order = require_success(ctx.gateway.orders().get(order_id).await)?;
    output::print_order_detail(&order);
    Ok(())
}

/// Refill the cart from a past order's lines. Quantities come from
/// the order; names and prices are the ones it was billed at.
pub async fn reorder(ctx: &AppContext, order_id: &str) -> Result<()> {
    ctx.require(Required::Authenticated)?;

    let order = require_success(ctx.gateway.orders().get(order_id).await)?;
    if order.items.is_empty() {
        anyhow::bail!("Order {order_id} has no items to reorder.");
    }

    let cart_path = ClientConfig::cart_path();
    let mut cart = nourish_cart::load(&cart_path);
    for item in &order.items {
        cart.add(CartLine {
            product_id: item.product_id.clone(),
            name: item
                .product_name
                .clone()
                .unwrap_or_else(|| item.product_id.clone()),
            unit_price: item.price,
            image_url: None,
            quantity: item.quantity,
        });
    }
    nourish_cart::save(&cart_path, &cart)?;

    println!("Added {} line(s) to the cart. Review with `nourish cart show`.", order.items.len());
    Ok(())
}
