//! Unified error handling for the storefront engine.
//!
//! Library operations return `Result<T, AppError>`. Recoverable conditions
//! (malformed persisted blobs) never surface here - the store helpers absorb
//! them by substituting defaults. What does surface is either a user-facing
//! validation failure (missing attribute selection, empty draft fields) or a
//! persistence write failure the engine deliberately leaves unhandled.

use thiserror::Error;

use marigold_core::ProductId;

use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persistent store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A product id did not resolve against the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Add-to-cart attempted without selecting every declared attribute.
    #[error("please select all options: {}", missing.join(", "))]
    MissingSelection {
        /// Names of the attributes still lacking a selection.
        missing: Vec<String>,
    },

    /// An attribute name not declared by the product.
    #[error("product has no attribute named {name:?}")]
    UnknownAttribute {
        /// The offending attribute name.
        name: String,
    },

    /// An attribute value outside the product's allowed set.
    #[error("{value:?} is not an allowed value for {name:?}")]
    InvalidChoice {
        /// Attribute name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A draft item was missing a required field.
    #[error("required field {0:?} must not be empty")]
    EmptyField(&'static str),

    /// A draft operation was issued outside editing mode.
    #[error("section is not in editing mode")]
    NotEditing,

    /// An index into draft content was out of range.
    #[error("no item at index {0}")]
    IndexOutOfRange(usize),

    /// The current user is not allowed to edit content.
    #[error("editing requires the seller identity")]
    NotAuthorized,
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_selection_display_lists_names() {
        let err = AppError::MissingSelection {
            missing: vec!["Color".to_owned(), "Size".to_owned()],
        };
        assert_eq!(err.to_string(), "please select all options: Color, Size");
    }

    #[test]
    fn test_unknown_product_display() {
        let err = AppError::UnknownProduct(ProductId::new("prod_404"));
        assert_eq!(err.to_string(), "unknown product: prod_404");
    }
}
