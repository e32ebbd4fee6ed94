//! Login / register / logout / whoami.

use anyhow::Result;
use nourish_model::{LoginRequest, RegisterRequest};
use nourish_session::AccessPolicy;

use crate::context::{require_success, AppContext};

/// Login against the user service and save the returned token.
pub async fn login(ctx: &mut AppContext, username: &str, password: &str) -> Result<()> {
    let resp = ctx
        .gateway
        .users()
        .login(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .await;
    let token = require_success(resp)?.token;
    ctx.save_token(&token)?;

    let role = AccessPolicy::current()
        .role(Some(&token))
        .map(|r| r.as_str())
        .unwrap_or("?");
    println!("Logged in as {username} ({role}).");
    Ok(())
}

/// Register a new account. The service logs the account in on
/// success, so the token is saved just like after login.
pub async fn register(ctx: &mut AppContext, req: &RegisterRequest) -> Result<()> {
    let resp = ctx.gateway.users().register(req).await;
    let token = require_success(resp)?.token;
    ctx.save_token(&token)?;
    println!("Account created. Logged in as {}.", req.username);
    Ok(())
}

/// Drop the saved token.
pub fn logout(ctx: &mut AppContext) -> Result<()> {
    ctx.clear_token()?;
    println!("Logged out.");
    Ok(())
}

/// Show the current session, if any.
pub fn whoami(ctx: &AppContext) -> Result<()> {
    println!("Server:   {}", ctx.config.effective_server());

    let policy = AccessPolicy::current();
    match policy.claims(ctx.config.token_opt()) {
        Some(claims) => {
            println!("User:     {}", claims.sub.as_deref().unwrap_or("?"));
            println!("User id:  {}", claims.user_id.map_or("?".into(), |id| id.to_string()));
            println!("Role:     {}", claims.role.as_deref().unwrap_or("?"));
            if let Some(exp) = claims.exp {
                println!("Expires:  {exp} (unix)");
            }
        }
        None => println!("Session:  none (run `nourish login`)"),
    }
    Ok(())
}
