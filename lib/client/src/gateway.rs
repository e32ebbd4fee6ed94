use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::orders::OrdersApi;
use crate::payments::PaymentsApi;
use crate::products::ProductsApi;
use crate::response::ApiResponse;
use crate::users::UsersApi;

// ── TokenSource ─────────────────────────────────────────────────────

/// Pluggable token provider, consulted before every request.
///
/// `None` skips the Authorization header (anonymous request) — the
/// gateway attaches `Bearer <token>` only when a session exists.
#[async_trait::async_trait]
pub trait TokenSource: Send + Sync + 'static {
    async fn token(&self) -> Option<String>;
}

/// No authentication — anonymous requests.
pub struct NoAuth;

#[async_trait::async_trait]
impl TokenSource for NoAuth {
    async fn token(&self) -> Option<String> {
        None
    }
}

/// Fixed bearer token, already obtained externally.
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait::async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

// ── Gateway ─────────────────────────────────────────────────────────

/// The single integration point with all four backend services.
///
/// Methods never return an `Err` and never panic: every outcome,
/// including transport failure, is an [`ApiResponse`].
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    token_source: Arc<dyn TokenSource>,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>, token_source: Arc<dyn TokenSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_source,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Typed per-service views.

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi::new(self)
    }

    // ── HTTP verbs ──────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        let req = self.http.get(self.url(path));
        self.execute("GET", path, req).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        let req = self.http.post(self.url(path)).json(body);
        self.execute("POST", path, req).await
    }

    /// POST with no body (e.g. the pay endpoint, which takes its
    /// argument as a query parameter).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        let req = self.http.post(self.url(path));
        self.execute("POST", path, req).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        let req = self.http.put(self.url(path)).json(body);
        self.execute("PUT", path, req).await
    }

    /// PUT with no body (the order status endpoint).
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        let req = self.http.put(self.url(path));
        self.execute("PUT", path, req).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        let req = self.http.delete(self.url(path));
        self.execute("DELETE", path, req).await
    }

    // ── Internals ───────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        mut req: reqwest::RequestBuilder,
    ) -> ApiResponse<T> {
        if let Some(token) = self.token_source.token().await {
            req = req.bearer_auth(token);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(err) => {
                tracing::debug!(method, path, %err, "transport failure");
                return ApiResponse::Failure {
                    error: err.to_string(),
                    status: 0,
                };
            }
        };

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        tracing::debug!(method, path, status = status.as_u16(), "response");

        if !status.is_success() {
            return ApiResponse::Failure {
                error: extract_error(&text, status),
                status: status.as_u16(),
            };
        }

        // Empty bodies decode as JSON null, so `Value` and `Option`
        // targets accept bodyless 2xx responses.
        let raw = if text.trim().is_empty() { "null" } else { text.as_str() };
        match serde_json::from_str::<T>(raw) {
            Ok(data) => ApiResponse::Success {
                data,
                status: status.as_u16(),
            },
            Err(err) => ApiResponse::Failure {
                error: format!("decode: {err}"),
                status: status.as_u16(),
            },
        }
    }
}

/// Best-effort error message from a failed response: the body's
/// `message` field, then the raw body, then the status reason.
fn extract_error(body: &str, status: StatusCode) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_auth_yields_no_token() {
        assert_eq!(NoAuth.token().await, None);
    }

    #[tokio::test]
    async fn static_token_yields_value() {
        let ts = StaticToken::new("jwt-here");
        assert_eq!(ts.token().await, Some("jwt-here".to_string()));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let gw = Gateway::new("http://localhost:8080/", Arc::new(NoAuth));
        assert_eq!(gw.base_url(), "http://localhost:8080");
    }

    #[test]
    fn extract_error_prefers_message_field() {
        let body = r#"{"message": "Product not found", "status": 404}"#;
        assert_eq!(
            extract_error(body, StatusCode::NOT_FOUND),
            "Product not found"
        );
    }

    #[test]
    fn extract_error_falls_back_to_raw_body() {
        assert_eq!(
            extract_error("plain failure text", StatusCode::BAD_REQUEST),
            "plain failure text"
        );
        // JSON without a message field also falls through to the body.
        assert_eq!(
            extract_error(r#"{"error":"nope"}"#, StatusCode::BAD_REQUEST),
            r#"{"error":"nope"}"#
        );
    }

    #[test]
    fn extract_error_falls_back_to_status_reason() {
        assert_eq!(extract_error("", StatusCode::NOT_FOUND), "Not Found");
        assert_eq!(extract_error("  ", StatusCode::BAD_GATEWAY), "Bad Gateway");
    }
}
