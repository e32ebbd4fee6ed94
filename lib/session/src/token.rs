//! Token payload codec.
//!
//! Splits the token on `.`, base64-decodes the middle segment, and
//! parses it as JSON. Every failure mode — wrong segment count, bad
//! base64, bad JSON — yields the empty claims record, never an error.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;

/// Decoded (not verified) token claims.
///
/// All fields are optional: a malformed token decodes to
/// `Claims::default()` and the gate treats it like an absent token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Subject — the username.
    #[serde(default)]
    pub sub: Option<String>,

    /// Numeric account id.
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,

    /// Account role string ("USER" / "ADMIN").
    #[serde(default)]
    pub role: Option<String>,

    /// Issued-at, seconds since epoch.
    #[serde(default)]
    pub iat: Option<i64>,

    /// Expiry, seconds since epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// All identity claims the gate requires are present.
    pub fn has_identity(&self) -> bool {
        self.sub.is_some() && self.user_id.is_some() && self.role.is_some()
    }

    /// Expiry check against the given clock. A missing `exp` counts
    /// as expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        match self.exp {
            Some(exp) => now >= exp,
            None => true,
        }
    }
}

/// Decode a token's payload segment into [`Claims`].
///
/// Tolerates both padded and unpadded base64url. Returns the empty
/// record on any malformatting.
pub fn decode(token: &str) -> Claims {
    let payload = match token.split('.').nth(1) {
        Some(p) if !p.is_empty() => p,
        _ => {
            tracing::debug!("token has no payload segment");
            return Claims::default();
        }
    };

    let bytes = match URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| URL_SAFE.decode(payload))
    {
        Ok(b) => b,
        Err(err) => {
            tracing::debug!(%err, "token payload is not base64url");
            return Claims::default();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(%err, "token payload is not a JSON claims object");
            Claims::default()
        }
    }
}
