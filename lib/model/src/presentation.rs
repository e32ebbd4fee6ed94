//! Status presentation mapping, owned here and consumed everywhere a
//! status is rendered. One table, so no two views can disagree on how
//! a status looks.

use crate::{OrderStatus, PaymentStatus};

/// How one status value renders: a short label and a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub glyph: &'static str,
}

impl std::fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph, self.label)
    }
}

impl OrderStatus {
    pub fn badge(&self) -> StatusBadge {
        match self {
            OrderStatus::Pending => StatusBadge { label: "pending", glyph: "…" },
            OrderStatus::Confirmed => StatusBadge { label: "confirmed", glyph: "✓" },
            OrderStatus::Delivered => StatusBadge { label: "delivered", glyph: "✔" },
            OrderStatus::Cancelled => StatusBadge { label: "cancelled", glyph: "✗" },
        }
    }
}

impl PaymentStatus {
    pub fn badge(&self) -> StatusBadge {
        match self {
            PaymentStatus::Pending => StatusBadge { label: "payment pending", glyph: "…" },
            PaymentStatus::Success => StatusBadge { label: "paid", glyph: "✔" },
            PaymentStatus::Failed => StatusBadge { label: "payment failed", glyph: "✗" },
        }
    }
}
