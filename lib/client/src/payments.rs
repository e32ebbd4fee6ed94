//! Payment service: reads plus the simulated pay action.

use nourish_model::Payment;

use crate::gateway::Gateway;
use crate::response::ApiResponse;

pub struct PaymentsApi<'g> {
    gw: &'g Gateway,
}

impl<'g> PaymentsApi<'g> {
    pub(crate) fn new(gw: &'g Gateway) -> Self {
        Self { gw }
    }

    /// All payments (admin view).
    pub async fn list(&self) -> ApiResponse<Vec<Payment>> {
        self.gw.get("/payment/api/payments").await
    }

    /// One customer's payments.
    pub async fn for_user(&self, user_id: i64) -> ApiResponse<Vec<Payment>> {
        self.gw.get(&format!("/payment/api/payments/user/{user_id}")).await
    }

    /// Simulated payment for an existing order. No payment-method
    /// payload is sent and no idempotency key exists, so re-invoking
    /// after a transient failure may create a duplicate record.
    pub async fn pay(&self, order_id: &str) -> ApiResponse<Payment> {
        self.gw
            .post_empty(&format!("/payment/api/payments/pay?orderId={order_id}"))
            .await
    }
}
