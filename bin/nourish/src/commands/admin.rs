//! Admin console commands. Every entry point gates on an ADMIN
//! session before touching the network.

use std::collections::BTreeMap;

use anyhow::Result;
use nourish_model::{
    Order, OrderStatus, Payment, PaymentStatus, Product, ProductInput, Role, User, UserUpdate,
};
use nourish_session::Required;
use rust_decimal::Decimal;

use crate::context::{require_success, AppContext};
use crate::output;

// ── Products ────────────────────────────────────────────────────────

pub async fn product_list(ctx: &AppContext) -> Result<()> {
    ctx.require(Required::Admin)?;
    let products = require_success(ctx.gateway.products().list().await)?;
    output::print_products(&products);
    Ok(())
}

pub async fn product_create(ctx: &AppContext, input: &ProductInput) -> Result<()> {
    ctx.require(Required::Admin)?;
    let product = require_success(ctx.gateway.products().create(input).await)?;
    println!("Created product {} ({}).", product.id, product.name);
    Ok(())
}

/// Full replacement: unspecified fields fall back to the product's
/// current values so a partial flag set doesn't blank them.
pub async fn product_update(
    ctx: &AppContext,
    id: &str,
    name: Option<String>,
    description: Option<String>,
    price: Option<Decimal>,
    image_url: Option<String>,
    category: Option<String>,
    stock: Option<i32>,
) -> Result<()> {
    ctx.require(Required::Admin)?;

    let current = require_success(ctx.gateway.products().get(id).await)?;
    let input = ProductInput {
        name: name.unwrap_or(current.name),
        description: description.or(current.description),
        price: price.unwrap_or(current.price),
        image_url: image_url.or(current.image_url),
        category: category.unwrap_or(current.category),
        stock_quantity: stock.or(current.stock_quantity),
    };

    let product = require_success(ctx.gateway.products().update(id, &input).await)?;
    println!("Updated product {}.", product.id);
    Ok(())
}

pub async fn product_delete(ctx: &AppContext, id: &str) -> Result<()> {
    ctx.require(Required::Admin)?;
    require_success(ctx.gateway.products().delete(id).await)?;
    println!("Deleted product {id}.");
    Ok(())
}

// ── Users ───────────────────────────────────────────────────────────

pub async fn user_list(ctx: &AppContext) -> Result<()> {
    ctx.require(Required::Admin)?;
    let users = require_success(ctx.gateway.users().list().await)?;
    output::print_users(&users);
    Ok(())
}

pub async fn user_get(ctx: &AppContext, id: i64) -> Result<()> {
    ctx.require(Required::Admin)?;
    let user = require_success(ctx.gateway.users().get(id).await)?;
    output::print_users(std::slice::from_ref(&user));
    Ok(())
}

pub async fn user_update(ctx: &AppContext, id: i64, update: &UserUpdate) -> Result<()> {
    ctx.require(Required::Admin)?;
    let user = require_success(ctx.gateway.users().update(id, update).await)?;
    println!("Updated user {} ({}).", user.id, user.username);
    Ok(())
}

pub async fn user_delete(ctx: &AppContext, id: i64) -> Result<()> {
    ctx.require(Required::Admin)?;
    require_success(ctx.gateway.users().delete(id).await)?;
    println!("Deleted user {id}.");
    Ok(())
}

// ── Orders ──────────────────────────────────────────────────────────

/// Username by user id, for resolving the foreign keys the services
/// return as bare ids.
fn user_names(users: &[User]) -> BTreeMap<i64, &str> {
    users.iter().map(|u| (u.id, u.username.as_str())).collect()
}

pub async fn order_list(ctx: &AppContext) -> Result<()> {
    ctx.require(Required::Admin)?;

    let orders_api = ctx.gateway.orders();
    let users_api = ctx.gateway.users();
    let (orders, users) = tokio::join!(orders_api.list(), users_api.list());
    let orders = require_success(orders)?;
    let users = require_success(users)?;
    let names = user_names(&users);

    if orders.is_empty() {
        println!("No orders.");
        return Ok(());
    }
    println!(
        "{:<12} {:<16} {:>12} {:<14} {}",
        "ID", "CUSTOMER", "TOTAL", "STATUS", "PAYMENT"
    );
    for o in &orders {
        let customer = names
            .get(&o.user_id)
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("#{}", o.user_id));
        println!(
            "{:<12} {:<16} {:>12} {:<14} {}",
            o.id,
            customer,
            output::money(o.total_amount),
            o.status.badge().to_string(),
            o.payment_status.badge()
        );
    }
    Ok(())
}

/// Request a transition to any status the selector offers. The order
/// service decides whether the transition is legal.
pub async fn order_set_status(ctx: &AppContext, id: &str, status: OrderStatus) -> Result<()> {
    ctx.require(Required::Admin)?;
    let order = require_success(ctx.gateway.orders().set_status(id, status).await)?;
    println!("Order {} is now {}.", order.id, order.status.badge());
    Ok(())
}

// ── Payments ────────────────────────────────────────────────────────

pub async fn payment_list(ctx: &AppContext) -> Result<()> {
    ctx.require(Required::Admin)?;

    let payments_api = ctx.gateway.payments();
    let users_api = ctx.gateway.users();
    let (payments, users) = tokio::join!(payments_api.list(), users_api.list());
    let payments = require_success(payments)?;
    let users = require_success(users)?;
    let names = user_names(&users);

    if payments.is_empty() {
        println!("No payments.");
        return Ok(());
    }
    println!(
        "{:<12} {:<12} {:<16} {:>12} {:<18} {}",
        "ID", "ORDER", "CUSTOMER", "AMOUNT", "STATUS", "REFERENCE"
    );
    for p in &payments {
        let customer = names
            .get(&p.user_id)
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("#{}", p.user_id));
        println!(
            "{:<12} {:<12} {:<16} {:>12} {:<18} {}",
            p.id,
            p.order_id,
            customer,
            output::money(p.amount),
            p.status.badge().to_string(),
            p.payment_reference_id.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

// ── Dashboard ───────────────────────────────────────────────────────

/// Cross-service summary. The four fetches run concurrently; one
/// failing service fails the whole view.
pub async fn dashboard(ctx: &AppContext) -> Result<()> {
    ctx.require(Required::Admin)?;

    let users_api = ctx.gateway.users();
    let products_api = ctx.gateway.products();
    let orders_api = ctx.gateway.orders();
    let payments_api = ctx.gateway.payments();
    let (users, products, orders, payments) = tokio::join!(
        users_api.list(),
        products_api.list(),
        orders_api.list(),
        payments_api.list(),
    );
    let users = require_success(users)?;
    let products = require_success(products)?;
    let orders = require_success(orders)?;
    let payments = require_success(payments)?;

    let summary = Summary::build(&users, &products, &orders, &payments);
    print_summary(&summary);
    Ok(())
}

struct Summary {
    users: usize,
    customers: usize,
    products: usize,
    orders: usize,
    orders_by_status: BTreeMap<&'static str, usize>,
    revenue: Decimal,
    payments: usize,
    settled_payments: usize,
}

impl Summary {
    fn build(users: &[User], products: &[Product], orders: &[Order], payments: &[Payment]) -> Self {
        let mut orders_by_status = BTreeMap::new();
        for o in orders {
            *orders_by_status.entry(o.status.as_str()).or_insert(0) += 1;
        }
        // Revenue counts settled payments only.
        let revenue = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Success)
            .map(|p| p.amount)
            .sum();
        Self {
            users: users.len(),
            customers: users.iter().filter(|u| u.role == Role::User).count(),
            products: products.len(),
            orders: orders.len(),
            orders_by_status,
            revenue,
            payments: payments.len(),
            settled_payments: payments
                .iter()
                .filter(|p| p.status == PaymentStatus::Success)
                .count(),
        }
    }
}

fn print_summary(s: &Summary) {
    println!("Users:     {} ({} customers)", s.users, s.customers);
    println!("Products:  {}", s.products);
    println!("Orders:    {}", s.orders);
    for (status, count) in &s.orders_by_status {
        println!("  {status:<10} {count}");
    }
    println!("Payments:  {} ({} settled)", s.payments, s.settled_payments);
    println!("Revenue:   {}", output::money(s.revenue));
}
