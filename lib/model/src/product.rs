use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product, owned by the product service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub price: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i32>,
}

/// Input for creating or replacing a product (admin console).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_from_service_json() {
        let json = r#"{
            "id": "5f2b6c1e",
            "name": "Paneer Tikka",
            "description": "Char-grilled paneer",
            "price": 249.50,
            "imageUrl": "https://cdn.example/p.jpg",
            "category": "starters",
            "stockQuantity": 12
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Paneer Tikka");
        assert_eq!(p.price.to_string(), "249.50");
        assert_eq!(p.stock_quantity, Some(12));
    }

    #[test]
    fn product_tolerates_sparse_json() {
        let json = r#"{"id": "x", "name": "Dal", "price": 90, "category": "mains"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.description.is_none());
        assert!(p.image_url.is_none());
    }
}
