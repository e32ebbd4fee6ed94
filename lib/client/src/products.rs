//! Product service: catalog reads plus admin CRUD.

use nourish_model::{Product, ProductInput};

use crate::gateway::Gateway;
use crate::response::ApiResponse;

pub struct ProductsApi<'g> {
    gw: &'g Gateway,
}

impl<'g> ProductsApi<'g> {
    pub(crate) fn new(gw: &'g Gateway) -> Self {
        Self { gw }
    }

    /// The full catalog. No pagination; callers build id-to-product
    /// maps from this when resolving order lines.
    pub async fn list(&self) -> ApiResponse<Vec<Product>> {
        self.gw.get("/product/api/products").await
    }

    pub async fn get(&self, id: &str) -> ApiResponse<Product> {
        self.gw.get(&format!("/product/api/products/{id}")).await
    }

    pub async fn create(&self, input: &ProductInput) -> ApiResponse<Product> {
        self.gw.post("/product/api/products", input).await
    }

    pub async fn update(&self, id: &str, input: &ProductInput) -> ApiResponse<Product> {
        self.gw.put(&format!("/product/api/products/{id}"), input).await
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<serde_json::Value> {
        self.gw.delete(&format!("/product/api/products/{id}")).await
    }
}
