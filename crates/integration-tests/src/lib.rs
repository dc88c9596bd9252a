//! Integration tests for Marigold.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marigold-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Shopping cart scenarios end to end
//! - `content_editing` - Hero/stories draft, save, reload cycles
//! - `enquiry_handoff` - Add-to-cart validation and WhatsApp links
//!
//! The scenarios drive the storefront library directly through an
//! [`TestContext`]: a real file-backed store in a temporary directory, so
//! every persistence path is the production one.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tempfile::TempDir;

use marigold_storefront::config::StorefrontConfig;
use marigold_storefront::state::AppState;
use marigold_storefront::store::FileStore;

/// A storefront session over a throwaway data directory.
pub struct TestContext {
    /// Session state under test.
    pub state: AppState,
    /// Owns the data directory for the session's lifetime.
    _data_dir: TempDir,
}

impl TestContext {
    /// Start a fresh session with an empty file-backed store.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("failed to create temp data dir");
        let config = StorefrontConfig {
            data_dir: data_dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        let store = Arc::new(FileStore::new(data_dir.path()));
        Self {
            state: AppState::with_store(config, store),
            _data_dir: data_dir,
        }
    }

    /// A second session over the same data directory, as if the shop was
    /// closed and reopened.
    #[must_use]
    pub fn reopen(&self) -> AppState {
        let config = self.state.config().clone();
        let store = Arc::new(FileStore::new(config.data_dir.clone()));
        AppState::with_store(config, store)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
