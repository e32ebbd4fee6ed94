//! Order service: reads, placement, and admin status transitions.

use nourish_model::{Order, OrderRequest, OrderStatus};

use crate::gateway::Gateway;
use crate::response::ApiResponse;

pub struct OrdersApi<'g> {
    gw: &'g Gateway,
}

impl<'g> OrdersApi<'g> {
    pub(crate) fn new(gw: &'g Gateway) -> Self {
        Self { gw }
    }

    /// All orders (admin view).
    pub async fn list(&self) -> ApiResponse<Vec<Order>> {
        self.gw.get("/order/api/orders").await
    }

    pub async fn get(&self, id: &str) -> ApiResponse<Order> {
        self.gw.get(&format!("/order/api/orders/{id}")).await
    }

    /// One customer's orders.
    pub async fn for_user(&self, user_id: i64) -> ApiResponse<Vec<Order>> {
        self.gw.get(&format!("/order/api/orders/user/{user_id}")).await
    }

    /// Place an order. On success the caller clears the cart; from
    /// then on the server is the source of truth.
    pub async fn place(&self, req: &OrderRequest) -> ApiResponse<Order> {
        self.gw.post("/order/api/orders", req).await
    }

    /// Request a status transition. Permissive by construction: any
    /// target status is sent and the server is the enforcement point.
    /// Callers reflect the new status only after a success response.
    pub async fn set_status(&self, id: &str, status: OrderStatus) -> ApiResponse<Order> {
        self.gw
            .put_empty(&format!(
                "/order/api/orders/{id}/status?status={}",
                status.as_str()
            ))
            .await
    }
}
