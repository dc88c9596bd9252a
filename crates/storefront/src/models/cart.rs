//! Cart line model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use marigold_core::{Price, ProductId};

use crate::models::Product;

/// One entry in the cart: a product, a quantity, and the attribute values
/// chosen for it.
///
/// The line copies the product's name, price and thumbnail at creation time;
/// it is not re-validated against the live catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product this line was created from.
    pub product_id: ProductId,
    /// Product name at the time of adding.
    pub name: String,
    /// Unit price at the time of adding.
    pub price: Price,
    /// Number of units. Positive; the store itself does not clamp.
    pub quantity: u32,
    /// Thumbnail image reference.
    #[serde(default)]
    pub image: String,
    /// Chosen value per declared attribute name.
    #[serde(default)]
    pub selected_attributes: BTreeMap<String, String>,
}

impl CartLine {
    /// Build a line from a product plus the shopper's choices.
    #[must_use]
    pub fn from_product(
        product: &Product,
        quantity: u32,
        selected_attributes: BTreeMap<String, String>,
    ) -> Self {
        Self {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
            image: product.primary_image().unwrap_or_default().to_owned(),
            selected_attributes,
        }
    }

    /// Price of the whole line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}
