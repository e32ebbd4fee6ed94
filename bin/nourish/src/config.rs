//! Client-side configuration.
//!
//! Reads/writes `~/.nourish/config.toml`. The session token lives here
//! in plain text alongside the server URL; the cart is persisted next
//! to it as `cart.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default server URL when neither the config file nor the
/// `NOURISH_SERVER` environment variable says otherwise.
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

/// Client configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API gateway base URL.
    #[serde(default)]
    pub server: String,

    /// JWT token (set by `nourish login`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            token: String::new(),
        }
    }
}

impl ClientConfig {
    /// Default config file path: ~/.nourish/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Persisted cart path: ~/.nourish/cart.json.
    pub fn cart_path() -> PathBuf {
        dirs_path().join("cart.json")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Effective server URL. `NOURISH_SERVER` beats the config file,
    /// which beats the built-in default.
    pub fn effective_server(&self) -> String {
        if let Ok(url) = std::env::var("NOURISH_SERVER") {
            if !url.is_empty() {
                return url;
            }
        }
        if !self.server.is_empty() {
            return self.server.clone();
        }
        DEFAULT_SERVER.to_string()
    }

    /// The saved token, if one exists.
    pub fn token_opt(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }
}

/// Return the config directory (~/.nourish).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".nourish")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.server.is_empty());
        assert!(config.token.is_empty());
        assert!(config.token_opt().is_none());
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = ClientConfig {
            server: "http://localhost:8080".to_string(),
            token: "abc.def.ghi".to_string(),
        };
        config.save(&path).unwrap();

        let back = ClientConfig::load(&path).unwrap();
        assert_eq!(back.server, "http://localhost:8080");
        assert_eq!(back.token_opt(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert!(config.token.is_empty());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep/config.toml");
        ClientConfig::default().save(&path).unwrap();
        assert!(path.exists());
    }
}
