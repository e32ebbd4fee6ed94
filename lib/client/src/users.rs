//! User service: authentication and account CRUD.
//!
//! Registration goes through `/user/api/users/register` only; the
//! bare `/api/users/register` path is a stale alias for the same
//! endpoint and is not used here.

use nourish_model::{LoginRequest, RegisterRequest, TokenResponse, User, UserUpdate};

use crate::gateway::Gateway;
use crate::response::ApiResponse;

pub struct UsersApi<'g> {
    gw: &'g Gateway,
}

impl<'g> UsersApi<'g> {
    pub(crate) fn new(gw: &'g Gateway) -> Self {
        Self { gw }
    }

    /// Credentials in, bearer token out.
    pub async fn login(&self, req: &LoginRequest) -> ApiResponse<TokenResponse> {
        self.gw.post("/user/api/users/login", req).await
    }

    /// Account fields in, bearer token out.
    pub async fn register(&self, req: &RegisterRequest) -> ApiResponse<TokenResponse> {
        self.gw.post("/user/api/users/register", req).await
    }

    pub async fn list(&self) -> ApiResponse<Vec<User>> {
        self.gw.get("/user/api/users").await
    }

    pub async fn get(&self, id: i64) -> ApiResponse<User> {
        self.gw.get(&format!("/user/api/users/{id}")).await
    }

    pub async fn update(&self, id: i64, update: &UserUpdate) -> ApiResponse<User> {
        self.gw.put(&format!("/user/api/users/{id}"), update).await
    }

    pub async fn delete(&self, id: i64) -> ApiResponse<serde_json::Value> {
        self.gw.delete(&format!("/user/api/users/{id}")).await
    }
}
