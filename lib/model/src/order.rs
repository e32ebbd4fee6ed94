use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payment::PaymentStatus;

/// Order lifecycle status, owned by the order service.
///
/// The client does not enforce a transition table — any target status
/// is settable from the admin console and the server is the
/// enforcement point for legal transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "DELIVERED")]
    Delivered,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl OrderStatus {
    pub fn parse(s: &str) -> Option<OrderStatus> {
        match s {
            "PENDING" => Some(OrderStatus::Pending),
            "CONFIRMED" => Some(OrderStatus::Confirmed),
            "DELIVERED" => Some(OrderStatus::Delivered),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// All statuses the admin selector offers.
    pub fn all() -> [OrderStatus; 4] {
        [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }
}

/// One product line within an order, as the order service reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    pub quantity: u32,
    pub price: Decimal,
    pub subtotal: Decimal,
}

/// An order, owned by the order service. The client only reads and,
/// for admins, requests status transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: i64,

    #[serde(default)]
    pub items: Vec<OrderItem>,

    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_reference_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// What a customer can do next with one of their orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// Payment is still owed — offer to pay.
    Pay,
    /// Order is settled or dead — offer to order the same items again.
    Reorder,
}

impl Order {
    /// Derive the customer-facing next action for this order.
    pub fn next_action(&self) -> NextAction {
        if self.payment_status == PaymentStatus::Pending
            && self.status != OrderStatus::Cancelled
        {
            NextAction::Pay
        } else {
            NextAction::Reorder
        }
    }
}

/// One line of an order placement request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Order placement request body. Prices are not sent — the order
/// service re-resolves them from the product service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub user_id: i64,
    pub items: Vec<OrderItemRequest>,
}
