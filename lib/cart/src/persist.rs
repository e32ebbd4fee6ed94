//! Per-session cart persistence: the whole line collection serializes
//! to one JSON file after every mutation and reloads on view mount.
//!
//! Loading is forgiving: a missing or corrupt file yields an empty
//! cart. Saving reports I/O failures to the caller.

use std::path::Path;

use thiserror::Error;

use crate::store::Cart;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cart file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cart encode: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load the cart from disk. Missing or unreadable files yield an
/// empty cart.
pub fn load(path: &Path) -> Cart {
    match std::fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(%err, path = %path.display(), "cart file corrupt, starting empty");
            Cart::new()
        }),
        Err(_) => Cart::new(),
    }
}

/// Persist the whole cart, creating parent directories as needed.
pub fn save(path: &Path, cart: &Cart) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string(cart)?)?;
    Ok(())
}

/// Remove the persisted cart. Called after successful order placement.
pub fn clear_file(path: &Path) -> Result<(), PersistError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
