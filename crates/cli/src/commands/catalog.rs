//! Catalog browsing commands.

#![allow(clippy::print_stdout)]

use marigold_core::ProductId;
use marigold_storefront::error::AppError;
use marigold_storefront::state::AppState;
use marigold_storefront::views::{CatalogView, GridView, ProductCardView};

/// `marigold catalog list` - print the product grid.
pub fn list(state: &AppState, view: GridView, width: Option<u16>) {
    let mut catalog_view = CatalogView::new(state.catalog().all());
    catalog_view.set_view(width.map_or(view, |w| view.for_width(w)));

    println!("{} - Our Collection", state.seller().business_name);
    println!();

    let columns = catalog_view.view.columns();
    for row in catalog_view.cards.chunks(columns) {
        for card in row {
            print_card(card, catalog_view.view);
        }
        if catalog_view.view != GridView::List {
            println!();
        }
    }
}

fn print_card(card: &ProductCardView, view: GridView) {
    if view == GridView::List {
        println!(
            "  {:<12} {:<28} {:>10}  [{}]",
            card.id.to_string(),
            card.name,
            card.price,
            card.inventory
        );
    } else {
        println!("  {} - {} ({})", card.id, card.name, card.price);
    }
}

/// `marigold catalog show` - print one product in detail.
///
/// # Errors
///
/// Returns `UnknownProduct` when the id does not resolve.
pub fn show(state: &AppState, product_id: &str) -> Result<(), AppError> {
    let id = ProductId::new(product_id);
    let product = state
        .catalog()
        .get(&id)
        .ok_or(AppError::UnknownProduct(id))?;

    println!("{}  [{}]", product.name, product.inventory);
    println!("{}", product.price);
    println!();
    println!("{}", product.description);

    if !product.specifications.is_empty() {
        println!();
        println!("Specifications:");
        for spec in &product.specifications {
            println!("  - {spec}");
        }
    }

    if !product.attributes.is_empty() {
        println!();
        println!("Options:");
        for (name, values) in &product.attributes {
            println!("  {name}: {}", values.join(", "));
        }
    }

    if !product.images.is_empty() {
        println!();
        println!("Images: {}", product.images.join(", "));
    }

    Ok(())
}
