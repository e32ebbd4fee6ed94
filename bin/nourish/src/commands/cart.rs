//! Cart commands. The cart lives at ~/.nourish/cart.json and every
//! mutation writes it back immediately.

use anyhow::Result;
use nourish_cart::{Cart, CartLine};
use nourish_session::Required;

use crate::config::ClientConfig;
use crate::context::{require_success, AppContext};
use crate::output;

fn load_cart() -> Cart {
    nourish_cart::load(&ClientConfig::cart_path())
}

fn save_cart(cart: &Cart) -> Result<()> {
    nourish_cart::save(&ClientConfig::cart_path(), cart)?;
    Ok(())
}

/// Add a product to the cart. The product is fetched so the line
/// carries its current name and price.
pub async fn add(ctx: &AppContext, product_id: &str, quantity: u32) -> Result<()> {
    ctx.require(Required::Authenticated)?;

    let product = require_success(ctx.gateway.products().get(product_id).await)?;

    let mut cart = load_cart();
    cart.add(CartLine {
        product_id: product.id.clone(),
        name: product.name.clone(),
        unit_price: product.price,
        image_url: product.image_url.clone(),
        quantity,
    });
    save_cart(&cart)?;

    let line = cart.get(&product.id).map(|l| l.quantity).unwrap_or(0);
    println!("Added {} (x{line} in cart).", product.name);
    Ok(())
}

pub fn show(ctx: &AppContext) -> Result<()> {
    ctx.require(Required::Authenticated)?;
    output::print_cart(&load_cart());
    Ok(())
}

pub fn set_quantity(ctx: &AppContext, product_id: &str, quantity: u32) -> Result<()> {
    ctx.require(Required::Authenticated)?;

    let mut cart = load_cart();
    if cart.get(product_id).is_none() {
        anyhow::bail!("No cart line for product {product_id}.");
    }
    cart.set_quantity(product_id, quantity);
    save_cart(&cart)?;
    // Quantities below 1 clamp instead of removing.
    let now = cart.get(product_id).map(|l| l.quantity).unwrap_or(0);
    println!("Quantity set to {now}.");
    Ok(())
}

pub fn remove(ctx: &AppContext, product_id: &str) -> Result<()> {
    ctx.require(Required::Authenticated)?;

    let mut cart = load_cart();
    if !cart.remove(product_id) {
        anyhow::bail!("No cart line for product {product_id}.");
    }
    save_cart(&cart)?;
    println!("Removed.");
    Ok(())
}

pub fn clear(ctx: &AppContext) -> Result<()> {
    ctx.require(Required::Authenticated)?;
    nourish_cart::clear_file(&ClientConfig::cart_path())?;
    println!("Cart cleared.");
    Ok(())
}
