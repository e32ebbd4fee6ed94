//! Client-side session handling: token decoding and the access gate.
//!
//! The token is an opaque signed JWT issued by the user service. The
//! client decodes the payload for UI branching only — it performs no
//! cryptographic verification, and server-side authorization is
//! assumed to re-validate every request. This is a deliberate trust
//! boundary: nothing of consequence is decided from these claims.

mod gate;
mod token;

pub use gate::{AccessDecision, AccessPolicy, Required};
pub use token::{decode, Claims};
