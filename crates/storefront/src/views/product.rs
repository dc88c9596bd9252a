//! Product detail view.
//!
//! Carries the per-visit view state for one product: the image carousel
//! index, the quantity stepper, and the shopper's pending attribute
//! selections. [`ProductDetail::to_cart_line`] is the add-to-cart gate: it
//! refuses to build a line until every declared attribute has a selection.

use std::collections::BTreeMap;

use crate::error::{AppError, Result};
use crate::models::{CartLine, Product};

/// View state for one product detail page.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    product: Product,
    image_index: usize,
    quantity: u32,
    selected: BTreeMap<String, String>,
}

impl ProductDetail {
    /// Open the detail view on `product` with quantity 1 and no selections.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            image_index: 0,
            quantity: 1,
            selected: BTreeMap::new(),
        }
    }

    /// The product on display.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    // =========================================================================
    // Image carousel
    // =========================================================================

    /// Index of the image currently shown.
    #[must_use]
    pub const fn image_index(&self) -> usize {
        self.image_index
    }

    /// The image currently shown, if the product has any.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.product.images.get(self.image_index).map(String::as_str)
    }

    /// Advance the carousel, wrapping at the end.
    pub fn next_image(&mut self) {
        let len = self.product.images.len();
        if len > 0 {
            self.image_index = (self.image_index + 1) % len;
        }
    }

    /// Step the carousel back, wrapping at the start.
    pub fn prev_image(&mut self) {
        let len = self.product.images.len();
        if len > 0 {
            self.image_index = (self.image_index + len - 1) % len;
        }
    }

    /// Jump to image `index` (ignored when out of range).
    pub fn select_image(&mut self, index: usize) {
        if index < self.product.images.len() {
            self.image_index = index;
        }
    }

    // =========================================================================
    // Quantity stepper
    // =========================================================================

    /// Chosen quantity. Never below 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Step the quantity up.
    pub const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Step the quantity down, clamped at 1. The clamp lives here at the
    /// call site; the cart store itself accepts any quantity.
    pub const fn decrement(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Set the quantity directly, clamped at 1.
    pub const fn set_quantity(&mut self, quantity: u32) {
        self.quantity = if quantity == 0 { 1 } else { quantity };
    }

    // =========================================================================
    // Attribute selection
    // =========================================================================

    /// The shopper's selections so far.
    #[must_use]
    pub const fn selected_attributes(&self) -> &BTreeMap<String, String> {
        &self.selected
    }

    /// Choose `value` for the attribute `name`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAttribute` for a name the product does not declare,
    /// `InvalidChoice` for a value outside its allowed set.
    pub fn select_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        let value = value.into();

        let Some(allowed) = self.product.attributes.get(&name) else {
            return Err(AppError::UnknownAttribute { name });
        };
        if !allowed.contains(&value) {
            return Err(AppError::InvalidChoice { name, value });
        }

        self.selected.insert(name, value);
        Ok(())
    }

    /// Declared attributes that still lack a selection, in declaration
    /// order.
    #[must_use]
    pub fn missing_attributes(&self) -> Vec<String> {
        self.product
            .attributes
            .keys()
            .filter(|name| !self.selected.contains_key(*name))
            .cloned()
            .collect()
    }

    /// Build the cart line for the current state.
    ///
    /// # Errors
    ///
    /// Returns `MissingSelection` listing every attribute without a chosen
    /// value; nothing is mutated on rejection.
    pub fn to_cart_line(&self) -> Result<CartLine> {
        let missing = self.missing_attributes();
        if !missing.is_empty() {
            return Err(AppError::MissingSelection { missing });
        }

        Ok(CartLine::from_product(
            &self.product,
            self.quantity,
            self.selected.clone(),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;

    use marigold_core::ProductId;

    fn product(id: &str) -> Product {
        FixtureSet::shipped()
            .products
            .into_iter()
            .find(|p| p.product_id == ProductId::new(id))
            .unwrap()
    }

    #[test]
    fn test_opens_with_quantity_one_and_first_image() {
        let detail = ProductDetail::new(product("prod_001"));
        assert_eq!(detail.quantity(), 1);
        assert_eq!(detail.current_image(), Some("product-1-a.jpg"));
    }

    #[test]
    fn test_quantity_clamps_at_one() {
        let mut detail = ProductDetail::new(product("prod_001"));
        detail.decrement();
        assert_eq!(detail.quantity(), 1);

        detail.increment();
        detail.increment();
        assert_eq!(detail.quantity(), 3);
        detail.decrement();
        assert_eq!(detail.quantity(), 2);

        detail.set_quantity(0);
        assert_eq!(detail.quantity(), 1);
    }

    #[test]
    fn test_carousel_wraps() {
        let mut detail = ProductDetail::new(product("prod_001"));
        detail.prev_image();
        assert_eq!(detail.image_index(), 2);
        detail.next_image();
        assert_eq!(detail.image_index(), 0);
        detail.select_image(1);
        assert_eq!(detail.image_index(), 1);
        detail.select_image(9);
        assert_eq!(detail.image_index(), 1);
    }

    #[test]
    fn test_select_attribute_validates_name_and_value() {
        let mut detail = ProductDetail::new(product("prod_002"));

        detail.select_attribute("Color", "Mustard").unwrap();
        assert!(matches!(
            detail.select_attribute("Fabric", "Silk"),
            Err(AppError::UnknownAttribute { .. })
        ));
        assert!(matches!(
            detail.select_attribute("Size", "XXS"),
            Err(AppError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn test_add_to_cart_rejected_until_all_attributes_selected() {
        // prod_002 declares Color and Size
        let mut detail = ProductDetail::new(product("prod_002"));

        let err = detail.to_cart_line().unwrap_err();
        assert!(matches!(
            &err,
            AppError::MissingSelection { missing } if missing == &["Color", "Size"]
        ));

        detail.select_attribute("Color", "Sage").unwrap();
        let err = detail.to_cart_line().unwrap_err();
        assert!(matches!(
            &err,
            AppError::MissingSelection { missing } if missing == &["Size"]
        ));

        detail.select_attribute("Size", "M").unwrap();
        let line = detail.to_cart_line().unwrap();
        assert_eq!(line.product_id, ProductId::new("prod_002"));
        assert_eq!(line.selected_attributes["Size"], "M");
    }

    #[test]
    fn test_attribute_free_product_adds_directly() {
        let detail = ProductDetail::new(product("prod_003"));
        let line = detail.to_cart_line().unwrap();
        assert_eq!(line.quantity, 1);
        assert!(line.selected_attributes.is_empty());
    }
}
