use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment settlement status, owned by the payment service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILED")]
    Failed,
}

impl PaymentStatus {
    pub fn parse(s: &str) -> Option<PaymentStatus> {
        match s {
            "PENDING" => Some(PaymentStatus::Pending),
            "SUCCESS" => Some(PaymentStatus::Success),
            "FAILED" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Success => "SUCCESS",
            PaymentStatus::Failed => "FAILED",
        }
    }
}

/// A payment record. The client triggers creation through the
/// simulated "pay" action and subsequently only reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub user_id: i64,
    pub amount: Decimal,
    pub status: PaymentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_reference_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_form() {
        assert_eq!(PaymentStatus::parse("SUCCESS"), Some(PaymentStatus::Success));
        assert_eq!(PaymentStatus::parse("success"), None);
    }

    #[test]
    fn payment_deserializes_from_service_json() {
        let json = r#"{
            "id": "pay-1",
            "orderId": "o-1",
            "userId": 7,
            "amount": 240.00,
            "status": "SUCCESS",
            "paymentReferenceId": "TXN-99",
            "createdAt": "2025-01-03T10:05:00"
        }"#;
        let p: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(p.order_id, "o-1");
        assert_eq!(p.status, PaymentStatus::Success);
        assert_eq!(p.payment_reference_id.as_deref(), Some("TXN-99"));
    }
}
