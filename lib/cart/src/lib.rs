//! The client-local cart: an ordered mapping of product id to selected
//! quantity and display fields, persisted to a per-session file after
//! every mutation.
//!
//! The cart is the only client-owned mutable state in the system. It
//! is cleared exactly once: after successful order placement.

mod persist;
mod store;
mod totals;

pub use persist::{clear_file, load, save, PersistError};
pub use store::{Cart, CartLine};
pub use totals::{delivery_fee, tax_rate, Totals};
