//! Payment commands: the simulated pay action and payment history.

use anyhow::Result;
use nourish_client::Gateway;
use nourish_model::{Order, Payment, PaymentStatus};
use nourish_session::Required;

use crate::context::{require_success, AppContext};
use crate::output;

/// Issue exactly one pay call. Only a settled payment triggers the
/// follow-up order fetch; failed and pending outcomes return without
/// touching the order service, and nothing here retries.
async fn settle(gateway: &Gateway, order_id: &str) -> Result<(Payment, Option<Order>)> {
    let payment = require_success(gateway.payments().pay(order_id).await)?;
    let order = if payment.status == PaymentStatus::Success {
        Some(require_success(gateway.orders().get(order_id).await)?)
    } else {
        None
    };
    Ok((payment, order))
}

/// Pay for an order. The service simulates settlement and may report
/// FAILED; that is a domain outcome, not a command error.
pub async fn pay(ctx: &AppContext, order_id: &str) -> Result<()> {
    ctx.require(Required::Authenticated)?;

    let (payment, order) = settle(&ctx.gateway, order_id).await?;
    match payment.status {
        PaymentStatus::Success => {
            println!("Payment successful: {}", output::money(payment.amount));
            if let Some(reference) = &payment.payment_reference_id {
                println!("Reference: {reference}");
            }
            // Settled: show the updated order, like the storefront's
            // post-payment redirect.
            if let Some(order) = order {
                println!();
                output::print_order_detail(&order);
            }
        }
        PaymentStatus::Failed => {
            println!("Payment failed. Run `nourish pay {order_id}` to retry.");
        }
        PaymentStatus::Pending => {
            println!("Payment pending. Check `nourish payments` later.");
        }
    }
    Ok(())
}

/// The signed-in customer's payment history.
pub async fn list(ctx: &AppContext) -> Result<()> {
    let user_id = ctx.user_id()?;
    let payments = require_success(ctx.gateway.payments().for_user(user_id).await)?;
    output::print_payments(&payments);
    Ok(())
}
