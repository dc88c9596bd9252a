//! Product model.
//!
//! Products come exclusively from fixture data and are never mutated at
//! runtime. Attribute maps are ordered (`BTreeMap`) so that "select all
//! options" validation reports missing attributes in a stable order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use marigold_core::{Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub product_id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Ordered image references; the first is the card/cart thumbnail.
    #[serde(default)]
    pub images: Vec<String>,
    /// Free-form inventory status label (e.g. "In Stock").
    #[serde(default)]
    pub inventory: String,
    /// Long description shown on the detail page.
    #[serde(default)]
    pub description: String,
    /// Ordered specification bullet points.
    #[serde(default)]
    pub specifications: Vec<String>,
    /// Attribute name to the ordered set of allowed values. Every declared
    /// attribute requires a selection before the product can enter the cart.
    #[serde(default)]
    pub attributes: BTreeMap<String, Vec<String>>,
    /// Video references, if any.
    #[serde(default)]
    pub videos: Vec<String>,
}

impl Product {
    /// The primary image reference, if the product has images at all.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether the inventory label marks the product as in stock.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.inventory == "In Stock"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use marigold_core::CurrencyCode;

    #[test]
    fn test_deserialize_minimal_product() {
        let product: Product = serde_json::from_str(
            r#"{
                "product_id": "prod_001",
                "name": "Silk Scarf",
                "price": {"amount": "999"}
            }"#,
        )
        .unwrap();

        assert_eq!(product.product_id, "prod_001".into());
        assert_eq!(product.price.amount, Decimal::new(999, 0));
        assert_eq!(product.price.currency_code, CurrencyCode::INR);
        assert!(product.images.is_empty());
        assert!(product.attributes.is_empty());
        assert!(product.primary_image().is_none());
    }

    #[test]
    fn test_in_stock_matches_label() {
        let mut product: Product = serde_json::from_str(
            r#"{"product_id": "p", "name": "n", "price": {"amount": "1"}}"#,
        )
        .unwrap();

        product.inventory = "In Stock".to_owned();
        assert!(product.in_stock());

        product.inventory = "Made to Order".to_owned();
        assert!(!product.in_stock());
    }
}
