//! WhatsApp enquiry hand-off.
//!
//! Checkout is a hand-off, not a transaction: the cart (or a single product
//! enquiry) is formatted into a plain-text message and wrapped in a
//! `https://wa.me/<digits>?text=<encoded>` deep link. Nothing is sent from
//! here - the caller shows or opens the link and the conversation moves to
//! the messaging app. No retry, no delivery confirmation.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use url::Url;

use marigold_core::{Phone, Price};

use crate::models::CartLine;

/// Format a single-product enquiry message.
#[must_use]
pub fn product_enquiry(
    product_name: &str,
    quantity: u32,
    attributes: &BTreeMap<String, String>,
) -> String {
    let mut message = format!(
        "Hi! I'm interested in:\n\nProduct: {product_name}\nQuantity: {quantity}\n"
    );
    for (name, value) in attributes {
        let _ = writeln!(message, "{name}: {value}");
    }
    message.push_str("\nPlease let me know the availability and payment details.");
    message
}

/// Format a whole-cart order enquiry message.
#[must_use]
pub fn cart_enquiry(lines: &[CartLine], total: Price) -> String {
    let items = lines
        .iter()
        .map(|line| {
            let attributes = line
                .selected_attributes
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect::<Vec<_>>()
                .join(", ");
            if attributes.is_empty() {
                format!("{} ({}x)", line.name, line.quantity)
            } else {
                format!("{} ({}x) - {}", line.name, line.quantity, attributes)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Hi! I want to order:\n\n{items}\n\nTotal: {total}\n\nPlease confirm availability and payment details."
    )
}

/// Build the deep link for `message` to the seller's number.
///
/// The phone number is reduced to its digits; the message is URL-encoded
/// into the `text` query parameter.
#[must_use]
pub fn deep_link(phone: &Phone, message: &str) -> Url {
    let mut url = Url::parse("https://wa.me/").unwrap_or_else(|e| {
        // a constant literal; failure here is a build defect
        panic!("wa.me base URL failed to parse: {e}")
    });
    url.set_path(&phone.digits());
    url.set_query(Some(&format!("text={}", urlencoding::encode(message))));
    url
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use marigold_core::{CurrencyCode, ProductId};

    fn line(name: &str, quantity: u32, attributes: &[(&str, &str)]) -> CartLine {
        CartLine {
            product_id: ProductId::new("p"),
            name: name.to_owned(),
            price: Price::new(Decimal::new(100, 0), CurrencyCode::INR),
            quantity,
            image: String::new(),
            selected_attributes: attributes
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }

    #[test]
    fn test_product_enquiry_lists_attributes() {
        let mut attributes = BTreeMap::new();
        attributes.insert("Color".to_owned(), "Indigo".to_owned());
        attributes.insert("Size".to_owned(), "M".to_owned());

        let message = product_enquiry("Handloom Cotton Kurta", 2, &attributes);
        assert!(message.starts_with("Hi! I'm interested in:"));
        assert!(message.contains("Product: Handloom Cotton Kurta"));
        assert!(message.contains("Quantity: 2"));
        assert!(message.contains("Color: Indigo"));
        assert!(message.contains("Size: M"));
        assert!(message.ends_with("availability and payment details."));
    }

    #[test]
    fn test_cart_enquiry_formats_lines_and_total() {
        let lines = vec![
            line("Ikat Silk Saree", 1, &[("Color", "Indigo")]),
            line("Terracotta Jhumka", 2, &[]),
        ];
        let total = Price::new(Decimal::new(300, 0), CurrencyCode::INR);

        let message = cart_enquiry(&lines, total);
        assert!(message.contains("Ikat Silk Saree (1x) - Color: Indigo"));
        assert!(message.contains("Terracotta Jhumka (2x)"));
        assert!(message.contains("Total: \u{20b9}300"));
    }

    #[test]
    fn test_deep_link_strips_phone_and_encodes_message() {
        let phone = Phone::parse("+91 98765 43210").unwrap();
        let url = deep_link(&phone, "Hi! I want 2x saree & dupatta");

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/919876543210");
        let query = url.query().unwrap();
        assert!(query.starts_with("text="));
        // spaces, '&' and '!' must not appear raw in the query
        assert!(!query.contains(' '));
        assert!(!query.contains('&'));
        assert!(query.contains("%20"));
        assert!(query.contains("%26"));
    }

    #[test]
    fn test_deep_link_roundtrip_decodes_to_message() {
        let phone = Phone::parse("98765").unwrap();
        let message = "Hi!\n\nTotal: \u{20b9}300";
        let url = deep_link(&phone, message);

        let encoded = url.query().unwrap().trim_start_matches("text=");
        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(decoded, message);
    }
}
