//! Seller profile model.
//!
//! A single seller owns the storefront. The profile is fixture-sourced and
//! read-only at runtime; it drives the shop header and footer, the WhatsApp
//! contact number, and the editing authorization check.

use serde::{Deserialize, Serialize};

use marigold_core::{Email, Phone, SellerId};

/// The shop's seller/business profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Identity the editing policy checks against.
    pub seller_id: SellerId,
    /// Shop name shown in the header.
    pub business_name: String,
    /// Seller's own name.
    pub name: String,
    /// Contact number; enquiries deep-link to its digits-only form.
    pub phone: Phone,
    /// Contact email.
    pub email: Email,
    /// Physical address shown in the footer.
    #[serde(default)]
    pub address: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_profile() {
        let seller: Seller = serde_json::from_str(
            r#"{
                "seller_id": "marigold_001",
                "business_name": "Marigold Boutique",
                "name": "Asha",
                "phone": "+91 98765 43210",
                "email": "asha@marigoldboutique.in",
                "address": "14 Rose Lane, Hyderabad"
            }"#,
        )
        .unwrap();

        assert_eq!(seller.seller_id, "marigold_001".into());
        assert_eq!(seller.phone.digits(), "919876543210");
        assert_eq!(seller.email.domain(), "marigoldboutique.in");
    }
}
