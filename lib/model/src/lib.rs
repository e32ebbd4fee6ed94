//! Shared data model for the NourishNow client.
//!
//! Every type here is a transient, client-held projection of server
//! state — the services own the authoritative data. Serialization
//! matches the services' JSON (camelCase fields, SCREAMING enums).

mod order;
mod payment;
mod product;
mod user;

pub mod presentation;

pub use order::{NextAction, Order, OrderItem, OrderItemRequest, OrderRequest, OrderStatus};
pub use payment::{Payment, PaymentStatus};
pub use product::{Product, ProductInput};
pub use user::{LoginRequest, RegisterRequest, Role, TokenResponse, User, UserUpdate};
