//! Read-only view projections over the catalog.
//!
//! View state (grid density, carousel indexes, pending selections) is pure
//! and ephemeral - nothing in this module touches the persistent store. The
//! one state-changing hand-off is [`product::ProductDetail::to_cart_line`],
//! which validates the shopper's selections and builds the cart line for
//! [`crate::cart::CartStore::add`].

pub mod catalog;
pub mod product;

pub use catalog::{CatalogView, GridView, ProductCardView};
pub use product::ProductDetail;
