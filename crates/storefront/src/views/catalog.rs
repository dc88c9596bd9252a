//! Catalog (product grid) view.

use marigold_core::ProductId;

use crate::models::Product;

/// Grid density for the product collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridView {
    /// Two cards per row.
    Two,
    /// Three cards per row (the default on wide displays).
    #[default]
    Three,
    /// One card per row with inline details.
    List,
}

impl GridView {
    /// Displays narrower than this collapse `Three` to `Two`.
    pub const NARROW_WIDTH: u16 = 768;

    /// Number of columns this density renders.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::List => 1,
        }
    }

    /// The density actually used at `width`: three-across does not fit a
    /// narrow display and collapses to two-across.
    #[must_use]
    pub const fn for_width(self, width: u16) -> Self {
        match self {
            Self::Three if width < Self::NARROW_WIDTH => Self::Two,
            other => other,
        }
    }
}

impl std::str::FromStr for GridView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two" => Ok(Self::Two),
            "three" => Ok(Self::Three),
            "list" => Ok(Self::List),
            _ => Err(format!("invalid grid view: {s} (two, three, list)")),
        }
    }
}

/// Product card display data.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    /// Product id, for navigation to the detail view.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Formatted unit price (e.g. "₹4999").
    pub price: String,
    /// Inventory status label.
    pub inventory: String,
    /// Image references for the card's mini-carousel.
    pub images: Vec<String>,
    /// Index of the image currently shown.
    pub image_index: usize,
}

impl ProductCardView {
    /// Cycle to the card's next image, wrapping at the end.
    pub fn next_image(&mut self) {
        if !self.images.is_empty() {
            self.image_index = (self.image_index + 1) % self.images.len();
        }
    }

    /// Cycle to the card's previous image, wrapping at the start.
    pub fn prev_image(&mut self) {
        let len = self.images.len();
        if len > 0 {
            self.image_index = (self.image_index + len - 1) % len;
        }
    }

    /// The image currently shown, if the product has any.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.image_index).map(String::as_str)
    }
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.product_id.clone(),
            name: product.name.clone(),
            price: product.price.to_string(),
            inventory: product.inventory.clone(),
            images: product.images.clone(),
            image_index: 0,
        }
    }
}

/// The product collection view: cards plus a density toggle.
///
/// Density is pure view state - it is never persisted.
#[derive(Debug, Clone)]
pub struct CatalogView {
    /// Chosen grid density.
    pub view: GridView,
    /// One card per catalog product, in catalog order.
    pub cards: Vec<ProductCardView>,
}

impl CatalogView {
    /// Build the collection view over `products` with the default density.
    #[must_use]
    pub fn new(products: &[Product]) -> Self {
        Self {
            view: GridView::default(),
            cards: products.iter().map(ProductCardView::from).collect(),
        }
    }

    /// Switch grid density.
    pub const fn set_view(&mut self, view: GridView) {
        self.view = view;
    }
}
