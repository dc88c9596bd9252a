//! Local user identity record.
//!
//! The storefront has no real authentication. A single identity record sits
//! in the persistent store; the editing capability unlocks when that record
//! matches the seller's identity (see [`crate::auth`]).

use serde::{Deserialize, Serialize};

use marigold_core::{Email, SellerId};

/// The identity record persisted under [`crate::store::keys::USER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Claimed seller identity.
    pub seller_id: SellerId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Email,
}
