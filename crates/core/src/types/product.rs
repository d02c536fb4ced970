//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::category::Category;
use crate::types::id::ProductId;
use crate::types::price::Price;

/// An immutable product record from the catalog.
///
/// Products are sourced from a static list at startup and never mutated;
/// the engine treats the catalog as read-only input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    /// URL of the product image.
    pub image: String,
}

impl Product {
    /// Create a new product record.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
            image: image.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::price::CurrencyCode;

    fn apple() -> Product {
        Product::new(
            ProductId::new(1),
            "Apple",
            Category::Fruit,
            Price::from_units(50, CurrencyCode::INR),
            "https://example.com/apple.jpg",
        )
    }

    #[test]
    fn test_serde_roundtrip() {
        let product = apple();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(apple()).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Apple");
        assert_eq!(value["category"], "Fruit");
        assert!(value["image"].as_str().unwrap().starts_with("https://"));
    }
}
