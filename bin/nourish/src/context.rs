//! Shared command context: config, gateway, and the session gate.
//!
//! Every command receives an [`AppContext`] instead of reaching for
//! globals; the gate decision is taken once here and commands only see
//! "allowed" or an error telling the user where to go.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use nourish_client::{ApiResponse, Gateway, NoAuth, StaticToken};
use nourish_session::{AccessDecision, AccessPolicy, Claims, Required};

use crate::config::ClientConfig;

pub struct AppContext {
    config_path: PathBuf,
    pub config: ClientConfig,
    pub gateway: Gateway,
}

impl AppContext {
    /// Load config and build a gateway carrying the saved token, if any.
    pub fn open(config_path: &Path) -> Result<Self> {
        let config = ClientConfig::load(config_path)?;
        let server = config.effective_server();
        tracing::debug!(config = %config_path.display(), %server, "opening context");
        let gateway = match config.token_opt() {
            Some(token) => Gateway::new(&server, Arc::new(StaticToken::new(token))),
            None => Gateway::new(&server, Arc::new(NoAuth)),
        };
        Ok(Self {
            config_path: config_path.to_path_buf(),
            config,
            gateway,
        })
    }

    /// Gate a command. Returns the session claims on success; otherwise
    /// an error telling the user what to do.
    pub fn require(&self, required: Required) -> Result<Claims> {
        let policy = AccessPolicy::current();
        let token = self.config.token_opt();
        match policy.evaluate(token, required) {
            AccessDecision::Allow => {
                // evaluate() only allows validated sessions.
                policy
                    .claims(token)
                    .ok_or_else(|| anyhow::anyhow!("Session state changed underneath us."))
            }
            AccessDecision::RedirectLogin => {
                anyhow::bail!("Not logged in (or session expired). Run `nourish login`.")
            }
            AccessDecision::RedirectDashboard => {
                anyhow::bail!("This command requires an ADMIN account.")
            }
        }
    }

    /// The signed-in user's id, gated on a valid session.
    pub fn user_id(&self) -> Result<i64> {
        let claims = self.require(Required::Authenticated)?;
        claims
            .user_id
            .ok_or_else(|| anyhow::anyhow!("Session token carries no user id."))
    }

    /// Persist a fresh token and rebuild the gateway around it.
    pub fn save_token(&mut self, token: &str) -> Result<()> {
        self.config.token = token.to_string();
        if self.config.server.is_empty() {
            // Pin the server the token was minted against.
            self.config.server = self.config.effective_server();
        }
        self.config.save(&self.config_path)?;
        self.gateway = Gateway::new(
            self.config.effective_server(),
            Arc::new(StaticToken::new(token)),
        );
        Ok(())
    }

    /// Drop the saved token.
    pub fn clear_token(&mut self) -> Result<()> {
        self.config.token = String::new();
        self.config.save(&self.config_path)?;
        self.gateway = Gateway::new(self.config.effective_server(), Arc::new(NoAuth));
        Ok(())
    }
}

/// Unwrap a gateway response into the command's `Result` world.
/// Transport failures (status 0) get a connectivity message.
pub fn require_success<T>(resp: ApiResponse<T>) -> Result<T> {
    match resp {
        ApiResponse::Success { data, .. } => Ok(data),
        ApiResponse::Failure { error, status: 0 } => {
            anyhow::bail!("Cannot reach server: {error}")
        }
        ApiResponse::Failure { error, status } => {
            anyhow::bail!("Error ({status}): {error}")
        }
    }
}
