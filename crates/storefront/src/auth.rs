//! Editing authorization.
//!
//! The storefront has exactly one privileged capability: editing the hero
//! and stories content. The policy is a plain function over the current
//! identity record - storage lookup ([`current_user`]) and policy
//! ([`is_authorized`]) are deliberately separate, so the policy can be
//! tested and swapped without touching persistence.

use crate::error::Result;
use crate::models::{Seller, UserRecord};
use crate::store::{self, KvStore};

use marigold_core::SellerId;

/// Whether `user` may edit storefront content.
///
/// True exactly when an identity record exists and claims the seller's own
/// identity.
#[must_use]
pub fn is_authorized(user: Option<&UserRecord>, seller_id: &SellerId) -> bool {
    user.is_some_and(|u| &u.seller_id == seller_id)
}

/// Load the persisted identity record, if any. Malformed records read as
/// absent.
#[must_use]
pub fn current_user(store: &dyn KvStore) -> Option<UserRecord> {
    store::read_or_else(store, store::keys::USER, || None)
}

/// Persist `user` as the current identity record.
///
/// # Errors
///
/// Returns the store error if the write fails.
pub fn set_current_user(store: &dyn KvStore, user: &UserRecord) -> Result<()> {
    store::write(store, store::keys::USER, &Some(user.clone()))?;
    Ok(())
}

/// Remove the persisted identity record.
///
/// # Errors
///
/// Returns the store error if the write fails.
pub fn clear_current_user(store: &dyn KvStore) -> Result<()> {
    store.remove(store::keys::USER)?;
    Ok(())
}

/// First-run seeding: when no identity record exists, persist the seller's
/// own identity and return it. An existing record is returned untouched.
///
/// # Errors
///
/// Returns the store error if seeding needs a write and the write fails.
pub fn seed_default_user(store: &dyn KvStore, seller: &Seller) -> Result<UserRecord> {
    if let Some(existing) = current_user(store) {
        return Ok(existing);
    }

    let user = UserRecord {
        seller_id: seller.seller_id.clone(),
        name: seller.name.clone(),
        email: seller.email.clone(),
    };
    set_current_user(store, &user)?;
    tracing::info!(seller = %user.seller_id, "seeded default identity record");
    Ok(user)
}
