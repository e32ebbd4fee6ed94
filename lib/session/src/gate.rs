//! The session gate: one authorization-policy function consumed by
//! both the coarse command-entry check and role-specific branching.
//! Keeping a single [`AccessPolicy`] stops the two from drifting
//! apart.

use nourish_model::Role;

use crate::token::{decode, Claims};

/// What a protected surface requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Required {
    /// Any valid session.
    Authenticated,
    /// A valid session with the ADMIN role.
    Admin,
}

/// Outcome of a gate evaluation.
///
/// Expired and malformed tokens are treated identically to absent
/// ones — callers get a redirect, never a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// No usable session: go to the login view.
    RedirectLogin,
    /// Valid session, wrong role: go to the general dashboard.
    RedirectDashboard,
}

/// Stateless policy over a token string. Constructed with a clock so
/// tests can fabricate expiry without sleeping.
#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy {
    now: i64,
}

impl AccessPolicy {
    /// Policy evaluated against the wall clock.
    pub fn current() -> Self {
        Self { now: chrono::Utc::now().timestamp() }
    }

    /// Policy evaluated at a fixed instant (seconds since epoch).
    pub fn at(now: i64) -> Self {
        Self { now }
    }

    /// True iff the token is present, carries subject, user id, and
    /// role, and its expiry is strictly in the future.
    pub fn is_valid(&self, token: Option<&str>) -> bool {
        let Some(raw) = token else { return false };
        if raw.is_empty() {
            return false;
        }
        let claims = decode(raw);
        claims.has_identity() && !claims.is_expired_at(self.now)
    }

    /// Gate a surface. Validity failures redirect to login; a valid
    /// non-admin session hitting an admin surface redirects to the
    /// dashboard instead.
    pub fn evaluate(&self, token: Option<&str>, required: Required) -> AccessDecision {
        if !self.is_valid(token) {
            tracing::debug!("gate: no valid session, redirecting to login");
            return AccessDecision::RedirectLogin;
        }
        if required == Required::Admin && self.role(token) != Some(Role::Admin) {
            tracing::debug!("gate: non-admin session on admin surface");
            return AccessDecision::RedirectDashboard;
        }
        AccessDecision::Allow
    }

    /// Decoded claims for a valid session, or `None`.
    pub fn claims(&self, token: Option<&str>) -> Option<Claims> {
        if self.is_valid(token) {
            Some(decode(token.unwrap_or_default()))
        } else {
            None
        }
    }

    /// Best-effort role accessor. `None` when absent or unparseable.
    pub fn role(&self, token: Option<&str>) -> Option<Role> {
        let claims = decode(token?);
        claims.role.as_deref().and_then(Role::parse)
    }

    /// Best-effort user id accessor.
    pub fn user_id(&self, token: Option<&str>) -> Option<i64> {
        decode(token?).user_id
    }

    /// Best-effort username accessor (the subject claim).
    pub fn username(&self, token: Option<&str>) -> Option<String> {
        decode(token?).sub
    }
}
