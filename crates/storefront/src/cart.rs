//! Cart store.
//!
//! The cart is a flat collection of [`CartLine`]s persisted under a single
//! key. Every mutation synchronously rewrites and persists the whole
//! collection - no diffing, no batching. Loading with malformed persisted
//! data starts from an empty cart.
//!
//! Adding a product that is already in the cart appends a second line rather
//! than merging quantities into the existing one. That matches the shipping
//! behavior this engine reproduces and is pinned by test; see DESIGN.md
//! before changing it.

use std::sync::Arc;

use rust_decimal::Decimal;

use marigold_core::{CurrencyCode, Price, ProductId};

use crate::models::CartLine;
use crate::store::{self, KvStore, StoreError};

/// The shopping cart, bound to a persistent store handle.
pub struct CartStore {
    store: Arc<dyn KvStore>,
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Load the cart from the store. Missing or malformed data yields an
    /// empty cart.
    #[must_use]
    pub fn load(store: Arc<dyn KvStore>) -> Self {
        let lines = store::read_or_else(store.as_ref(), store::keys::CART, Vec::new);
        Self { store, lines }
    }

    /// Current cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines (the cart badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price x quantity over all lines.
    ///
    /// The currency is taken from the first line; an empty cart totals zero
    /// in the default currency.
    #[must_use]
    pub fn total(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or(CurrencyCode::default(), |l| l.price.currency_code);
        let amount: Decimal = self
            .lines
            .iter()
            .map(|l| l.line_total().amount)
            .sum();
        Price::new(amount, currency)
    }

    /// Append a line and persist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the collection fails; the
    /// in-memory cart is left unchanged in that case.
    pub fn add(&mut self, line: CartLine) -> Result<(), StoreError> {
        self.lines.push(line);
        if let Err(e) = self.persist() {
            self.lines.pop();
            return Err(e);
        }
        tracing::debug!(count = self.lines.len(), "cart line added");
        Ok(())
    }

    /// Replace the quantity of the line matching `product_id` and persist.
    ///
    /// A no-op (and no write) when no line matches; no lower bound is
    /// enforced here - callers clamp where a floor matters.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the collection fails.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<(), StoreError> {
        let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) else {
            return Ok(());
        };
        line.quantity = quantity;
        self.persist()
    }

    /// Delete the line matching `product_id` and persist.
    ///
    /// A no-op (and no write) when no line matches.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the collection fails.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<(), StoreError> {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        if self.lines.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Drop every line and persist the empty collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.lines.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        store::write(self.store.as_ref(), store::keys::CART, &self.lines)
    }
}
