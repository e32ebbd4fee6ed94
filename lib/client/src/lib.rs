//! HTTP gateway to the four backend services.
//!
//! This is the sole wire boundary of the client. Every call goes
//! through [`Gateway`], which attaches the bearer token (when a
//! session exists), issues the request, and normalizes the outcome
//! into [`ApiResponse`] — a tagged success/failure shape. Transport
//! errors never propagate past this crate; call sites branch on the
//! response, not on raised errors.
//!
//! No retries, no timeout enforcement, no circuit breaking: failures
//! surface once and re-invocation is the caller's decision.

mod gateway;
mod orders;
mod payments;
mod products;
mod response;
mod users;

pub use gateway::{Gateway, NoAuth, StaticToken, TokenSource};
pub use orders::OrdersApi;
pub use payments::PaymentsApi;
pub use products::ProductsApi;
pub use response::ApiResponse;
pub use users::UsersApi;
