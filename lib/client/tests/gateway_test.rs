//! Gateway golden tests: exercise the HTTP gateway and the typed
//! service APIs against a real in-process server.
//!
//! The server mimics the four backend services' shapes: JSON bodies,
//! `{"message": ...}` error envelopes, bearer authentication, and the
//! query-parameter forms of the status and pay endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use jsonwebtoken::{encode, EncodingKey, Header};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nourish_client::{ApiResponse, Gateway, NoAuth, StaticToken};
use nourish_model::{
    LoginRequest, OrderItemRequest, OrderRequest, OrderStatus, PaymentStatus, RegisterRequest,
};

const JWT_SECRET: &str = "gateway-test-secret";
const PASSWORD: &str = "gateway-test-pw";

#[derive(Debug, Serialize, Deserialize)]
struct TestClaims {
    sub: String,
    #[serde(rename = "userId")]
    user_id: i64,
    role: String,
    exp: i64,
}

/// Deterministic token: same claims and secret on every call, so the
/// login handler and the auth check can each compute it.
fn sign_jwt() -> String {
    let claims = TestClaims {
        sub: "asha".into(),
        user_id: 7,
        role: "USER".into(),
        exp: 4_000_000_000,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

fn authed(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", sign_jwt()))
        .unwrap_or(false)
}

fn message_error(status: StatusCode, message: &str) -> axum::response::Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

// ====================================================================
// Handlers
// ====================================================================

async fn login_handler(Json(body): Json<serde_json::Value>) -> axum::response::Response {
    if body["username"] == "asha" && body["password"] == PASSWORD {
        Json(serde_json::json!({ "token": sign_jwt() })).into_response()
    } else {
        message_error(StatusCode::UNAUTHORIZED, "Invalid credentials")
    }
}

async fn register_handler(Json(body): Json<serde_json::Value>) -> axum::response::Response {
    if body.get("username").is_some() && body.get("password").is_some() {
        Json(serde_json::json!({ "token": sign_jwt() })).into_response()
    } else {
        message_error(StatusCode::BAD_REQUEST, "Missing fields")
    }
}

async fn product_list_handler(headers: HeaderMap) -> axum::response::Response {
    if !authed(&headers) {
        return message_error(StatusCode::UNAUTHORIZED, "Missing or invalid token");
    }
    Json(serde_json::json!([
        {"id": "p1", "name": "Dal Makhani", "price": 90.00, "category": "mains"},
        {"id": "p2", "name": "Paneer Tikka", "price": 249.50, "category": "starters",
         "imageUrl": "https://cdn.example/p2.jpg"}
    ]))
    .into_response()
}

async fn product_get_handler(Path(id): Path<String>) -> axum::response::Response {
    if id == "p1" {
        Json(serde_json::json!(
            {"id": "p1", "name": "Dal Makhani", "price": 90.00, "category": "mains"}
        ))
        .into_response()
    } else {
        message_error(StatusCode::NOT_FOUND, "Product not found")
    }
}

async fn order_place_handler(Json(body): Json<serde_json::Value>) -> axum::response::Response {
    let items = body["items"].as_array().cloned().unwrap_or_default();
    if items.is_empty() {
        return message_error(StatusCode::BAD_REQUEST, "Order must have items");
    }
    Json(serde_json::json!({
        "id": "order-1",
        "userId": body["userId"],
        "items": [
            {"productId": "p1", "productName": "Dal Makhani", "quantity": 2,
             "price": 90.00, "subtotal": 180.00}
        ],
        "totalAmount": 180.00,
        "status": "PENDING",
        "paymentStatus": "PENDING"
    }))
    .into_response()
}

async fn order_status_handler(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    let Some(status) = params.get("status") else {
        return message_error(StatusCode::BAD_REQUEST, "status query parameter required");
    };
    if OrderStatus::parse(status).is_none() {
        return message_error(StatusCode::BAD_REQUEST, "Unknown status");
    }
    Json(serde_json::json!({
        "id": id,
        "userId": 7,
        "items": [],
        "totalAmount": 180.00,
        "status": status,
        "paymentStatus": "PENDING"
    }))
    .into_response()
}

async fn pay_handler(Query(params): Query<HashMap<String, String>>) -> axum::response::Response {
    let Some(order_id) = params.get("orderId") else {
        return message_error(StatusCode::BAD_REQUEST, "orderId query parameter required");
    };
    Json(serde_json::json!({
        "id": "pay-1",
        "orderId": order_id,
        "userId": 7,
        "amount": 240.00,
        "status": "SUCCESS",
        "paymentReferenceId": "TXN-1"
    }))
    .into_response()
}

async fn empty_body_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

// ====================================================================
// Test server setup
// ====================================================================

struct TestServer {
    base_url: String,
}

async fn start_test_server() -> TestServer {
    let app = Router::new()
        .route("/user/api/users/login", post(login_handler))
        .route("/user/api/users/register", post(register_handler))
        .route("/product/api/products", get(product_list_handler))
        .route("/product/api/products/:id", get(product_get_handler))
        .route("/order/api/orders", post(order_place_handler))
        .route("/order/api/orders/:id/status", put(order_status_handler))
        .route("/payment/api/payments/pay", post(pay_handler))
        .route("/empty", axum::routing::delete(empty_body_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
    }
}

fn anon_gateway(server: &TestServer) -> Gateway {
    Gateway::new(&server.base_url, Arc::new(NoAuth))
}

fn user_gateway(server: &TestServer) -> Gateway {
    Gateway::new(&server.base_url, Arc::new(StaticToken::new(sign_jwt())))
}

// ====================================================================
// Login / register
// ====================================================================

#[tokio::test]
async fn login_returns_token() {
    let server = start_test_server().await;
    let gw = anon_gateway(&server);

    let resp = gw
        .users()
        .login(&LoginRequest {
            username: "asha".into(),
            password: PASSWORD.into(),
        })
        .await;

    assert!(resp.is_success());
    assert_eq!(resp.into_data().unwrap().token, sign_jwt());
}

#[tokio::test]
async fn bad_credentials_fail_with_message() {
    let server = start_test_server().await;
    let gw = anon_gateway(&server);

    let resp = gw
        .users()
        .login(&LoginRequest {
            username: "asha".into(),
            password: "wrong".into(),
        })
        .await;

    assert!(!resp.is_success());
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.error(), Some("Invalid credentials"));
}

#[tokio::test]
async fn register_uses_the_user_service_path() {
    let server = start_test_server().await;
    let gw = anon_gateway(&server);

    let resp = gw
        .users()
        .register(&RegisterRequest {
            username: "asha".into(),
            password: "secret".into(),
            email: "asha@example.com".into(),
            phone: None,
            full_name: None,
            role: None,
        })
        .await;

    assert!(resp.is_success());
}

// ====================================================================
// Bearer attachment
// ====================================================================

#[tokio::test]
async fn token_source_attaches_bearer_header() {
    let server = start_test_server().await;
    let gw = user_gateway(&server);

    let resp = gw.products().list().await;
    assert!(resp.is_success());
    let products = resp.into_data().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].price, Decimal::new(24950, 2));
}

#[tokio::test]
async fn anonymous_request_sends_no_bearer() {
    let server = start_test_server().await;
    let gw = anon_gateway(&server);

    let resp = gw.products().list().await;
    assert!(!resp.is_success());
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.error(), Some("Missing or invalid token"));
}

// ====================================================================
// Failure normalization
// ====================================================================

#[tokio::test]
async fn not_found_yields_failure_with_extracted_message() {
    let server = start_test_server().await;
    let gw = user_gateway(&server);

    let resp = gw.products().get("ghost").await;
    assert!(!resp.is_success());
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.error(), Some("Product not found"));
}

#[tokio::test]
async fn transport_failure_yields_status_zero() {
    // Nothing listens here; the connection itself fails.
    let gw = Gateway::new("http://127.0.0.1:1", Arc::new(NoAuth));
    let resp: ApiResponse<serde_json::Value> = gw.get("/product/api/products").await;
    assert!(!resp.is_success());
    assert_eq!(resp.status(), 0);
    assert!(resp.error().is_some());
}

#[tokio::test]
async fn empty_success_body_decodes_as_null() {
    let server = start_test_server().await;
    let gw = user_gateway(&server);

    let resp: ApiResponse<serde_json::Value> = gw.delete("/empty").await;
    assert!(resp.is_success());
    assert_eq!(resp.status(), 204);
    assert_eq!(resp.into_data().unwrap(), serde_json::Value::Null);
}

// ====================================================================
// Orders and payments
// ====================================================================

#[tokio::test]
async fn place_order_round_trips_typed_order() {
    let server = start_test_server().await;
    let gw = user_gateway(&server);

    let req = OrderRequest {
        user_id: 7,
        items: vec![OrderItemRequest {
            product_id: "p1".into(),
            quantity: 2,
        }],
    };
    let resp = gw.orders().place(&req).await;
    assert!(resp.is_success());

    let order = resp.into_data().unwrap();
    assert_eq!(order.id, "order-1");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_amount, Decimal::from(180));
}

#[tokio::test]
async fn empty_order_is_rejected_by_the_server() {
    let server = start_test_server().await;
    let gw = user_gateway(&server);

    let req = OrderRequest { user_id: 7, items: vec![] };
    let resp = gw.orders().place(&req).await;
    assert!(!resp.is_success());
    assert_eq!(resp.error(), Some("Order must have items"));
}

#[tokio::test]
async fn set_status_sends_the_query_parameter_form() {
    let server = start_test_server().await;
    let gw = user_gateway(&server);

    let resp = gw.orders().set_status("order-1", OrderStatus::Confirmed).await;
    assert!(resp.is_success());
    assert_eq!(resp.into_data().unwrap().status, OrderStatus::Confirmed);
}

#[tokio::test]
async fn pay_targets_the_order_by_query_parameter() {
    let server = start_test_server().await;
    let gw = user_gateway(&server);

    let resp = gw.payments().pay("order-1").await;
    assert!(resp.is_success());

    let payment = resp.into_data().unwrap();
    assert_eq!(payment.order_id, "order-1");
    assert_eq!(payment.status, PaymentStatus::Success);
}
