//! Cart and enquiry commands.

#![allow(clippy::print_stdout)]

use marigold_core::ProductId;
use marigold_storefront::error::AppError;
use marigold_storefront::state::AppState;
use marigold_storefront::views::ProductDetail;
use marigold_storefront::whatsapp;

use super::parse_attributes;

/// `marigold cart add` - validate selections and append a cart line.
///
/// # Errors
///
/// Returns `UnknownProduct`, attribute validation errors, or
/// `MissingSelection`; the cart is untouched on any of them.
pub fn add(
    state: &AppState,
    product_id: &str,
    quantity: u32,
    attributes: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let detail = build_detail(state, product_id, quantity, attributes)?;
    let line = detail.to_cart_line()?;

    let mut cart = state.cart();
    cart.add(line)?;

    println!(
        "Added {} x{} to your cart ({} items total)",
        detail.product().name,
        detail.quantity(),
        cart.item_count()
    );
    Ok(())
}

/// `marigold cart list` - print cart lines and the total.
pub fn list(state: &AppState) {
    let cart = state.cart();
    if cart.is_empty() {
        println!("Your cart is empty. Add some amazing products to get started!");
        return;
    }

    println!("Shopping Cart");
    println!();
    for line in cart.lines() {
        let attributes = line
            .selected_attributes
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        if attributes.is_empty() {
            println!(
                "  {:<12} {:<28} x{:<3} {:>10}",
                line.product_id.to_string(),
                line.name,
                line.quantity,
                line.line_total().to_string()
            );
        } else {
            println!(
                "  {:<12} {:<28} x{:<3} {:>10}  ({attributes})",
                line.product_id.to_string(),
                line.name,
                line.quantity,
                line.line_total().to_string()
            );
        }
    }
    println!();
    println!("Total: {}", cart.total());
}

/// `marigold cart set-qty` - replace a line's quantity, floored at 1.
///
/// # Errors
///
/// Returns the store error if persisting fails.
pub fn set_quantity(
    state: &AppState,
    product_id: &str,
    quantity: u32,
) -> Result<(), AppError> {
    // the cart store accepts any quantity; the floor is this caller's choice
    let quantity = quantity.max(1);
    let id = ProductId::new(product_id);

    let mut cart = state.cart();
    let known = cart.lines().iter().any(|l| l.product_id == id);
    cart.update_quantity(&id, quantity)?;

    if known {
        println!("Set {id} to x{quantity}");
    } else {
        println!("No cart line for {id}; nothing changed");
    }
    Ok(())
}

/// `marigold cart remove` - delete a cart line.
///
/// # Errors
///
/// Returns the store error if persisting fails.
pub fn remove(state: &AppState, product_id: &str) -> Result<(), AppError> {
    let id = ProductId::new(product_id);
    let mut cart = state.cart();
    let known = cart.lines().iter().any(|l| l.product_id == id);
    cart.remove(&id)?;

    if known {
        println!("Removed {id} from your cart");
    } else {
        println!("No cart line for {id}; nothing changed");
    }
    Ok(())
}

/// `marigold cart clear` - empty the cart.
///
/// # Errors
///
/// Returns the store error if persisting fails.
pub fn clear(state: &AppState) -> Result<(), AppError> {
    let mut cart = state.cart();
    cart.clear()?;
    println!("Cart cleared");
    Ok(())
}

/// `marigold cart checkout` - print the WhatsApp order hand-off link.
pub fn checkout(state: &AppState) {
    let cart = state.cart();
    if cart.is_empty() {
        println!("Your cart is empty - nothing to order yet.");
        return;
    }

    let message = whatsapp::cart_enquiry(cart.lines(), cart.total());
    let link = whatsapp::deep_link(&state.seller().phone, &message);

    println!("Order enquiry for {}:", state.seller().business_name);
    println!();
    println!("{message}");
    println!();
    println!("Open to send: {link}");
}

/// `marigold enquire` - single-product enquiry without touching the cart.
///
/// # Errors
///
/// Returns `UnknownProduct` or attribute validation errors.
pub fn enquire(
    state: &AppState,
    product_id: &str,
    quantity: u32,
    attributes: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let detail = build_detail(state, product_id, quantity, attributes)?;

    let message = whatsapp::product_enquiry(
        &detail.product().name,
        detail.quantity(),
        detail.selected_attributes(),
    );
    let link = whatsapp::deep_link(&state.seller().phone, &message);

    println!("{message}");
    println!();
    println!("Open to send: {link}");
    Ok(())
}

/// Resolve a product and apply quantity + attribute choices to a fresh
/// detail view.
fn build_detail(
    state: &AppState,
    product_id: &str,
    quantity: u32,
    attributes: &[String],
) -> Result<ProductDetail, Box<dyn std::error::Error>> {
    let id = ProductId::new(product_id);
    let product = state
        .catalog()
        .get(&id)
        .ok_or(AppError::UnknownProduct(id))?
        .clone();

    let mut detail = ProductDetail::new(product);
    detail.set_quantity(quantity);
    for (name, value) in parse_attributes(attributes)? {
        detail.select_attribute(name, value)?;
    }
    Ok(detail)
}
