//! Session state shared across the storefront.
//!
//! One [`AppState`] is constructed at session start and handed to whatever
//! drives the storefront (the CLI, tests). It replaces the ambient globals
//! of a browser runtime with an explicit context object: configuration, the
//! persistent store handle, the fixture set, and the catalog built from it.

use std::sync::Arc;

use uuid::Uuid;

use crate::auth;
use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::fixtures::FixtureSet;
use crate::models::{Seller, UserRecord};
use crate::sections::{HeroSection, StoriesSection};
use crate::store::{FileStore, KvStore};

/// Session state shared across the storefront.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources like the persistent store and the catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Arc<dyn KvStore>,
    fixtures: FixtureSet,
    catalog: Catalog,
    session_id: Uuid,
}

impl AppState {
    /// Create session state with the file-backed store from `config`.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let store: Arc<dyn KvStore> = Arc::new(FileStore::new(config.data_dir.clone()));
        Self::with_store(config, store)
    }

    /// Create session state over an explicit store (tests, ephemeral
    /// sessions).
    #[must_use]
    pub fn with_store(config: StorefrontConfig, store: Arc<dyn KvStore>) -> Self {
        let fixtures = config
            .fixtures_dir
            .as_deref()
            .map_or_else(FixtureSet::shipped, FixtureSet::load);
        let catalog = Catalog::new(fixtures.products.clone());
        let session_id = Uuid::new_v4();

        tracing::info!(
            %session_id,
            products = catalog.len(),
            data_dir = %config.data_dir.display(),
            "storefront session started"
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                fixtures,
                catalog,
                session_id,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a handle to the persistent store.
    #[must_use]
    pub fn store(&self) -> Arc<dyn KvStore> {
        self.inner.store.clone()
    }

    /// Get a reference to the fixture set.
    #[must_use]
    pub fn fixtures(&self) -> &FixtureSet {
        &self.inner.fixtures
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the seller profile.
    #[must_use]
    pub fn seller(&self) -> &Seller {
        &self.inner.fixtures.seller
    }

    /// This session's id (appears in logs).
    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.inner.session_id
    }

    // =========================================================================
    // Convenience constructors for the engine's stateful pieces
    // =========================================================================

    /// Load the cart bound to this session's store.
    #[must_use]
    pub fn cart(&self) -> CartStore {
        CartStore::load(self.store())
    }

    /// Load the hero section from this session's store.
    #[must_use]
    pub fn hero(&self) -> HeroSection {
        HeroSection::load(self.inner.store.as_ref(), &self.inner.fixtures.hero)
    }

    /// Load the stories section from this session's store.
    #[must_use]
    pub fn stories(&self) -> StoriesSection {
        StoriesSection::load(self.inner.store.as_ref(), &self.inner.fixtures.stories)
    }

    /// The current identity record, seeding the seller's own identity on
    /// first run.
    ///
    /// # Errors
    ///
    /// Returns the store error if first-run seeding fails to write.
    pub fn current_user(&self) -> Result<UserRecord> {
        auth::seed_default_user(self.inner.store.as_ref(), self.seller())
    }

    /// Whether the current identity may edit storefront content.
    ///
    /// # Errors
    ///
    /// Returns the store error if first-run seeding fails to write.
    pub fn is_editor(&self) -> Result<bool> {
        let user = self.current_user()?;
        Ok(auth::is_authorized(
            Some(&user),
            &self.seller().seller_id,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn state() -> AppState {
        AppState::with_store(StorefrontConfig::default(), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_state_exposes_fixture_backed_catalog() {
        let state = state();
        assert_eq!(state.catalog().len(), 6);
        assert_eq!(state.seller().business_name, "Marigold Boutique");
    }

    #[test]
    fn test_first_run_seeds_editor_identity() {
        let state = state();
        let user = state.current_user().unwrap();
        assert_eq!(user.seller_id, state.seller().seller_id);
        assert!(state.is_editor().unwrap());
    }

    #[test]
    fn test_cart_and_sections_share_the_store() {
        let state = state();

        let mut hero = state.hero();
        hero.begin_edit();
        hero.set_tagline(0, "Shared store").unwrap();
        hero.save(state.store().as_ref()).unwrap();

        let hero_again = state.hero();
        assert_eq!(hero_again.slides()[0].tagline, "Shared store");
    }
}
