//! Persistent key-value store adapter.
//!
//! The storefront persists a handful of independent entities (cart contents,
//! hero content, stories content, the user identity record), each serialized
//! to JSON text under its own string key. The [`KvStore`] trait is the seam:
//! the real session uses [`FileStore`] (one file per key under the data
//! directory), tests use [`MemoryStore`].
//!
//! # Failure posture
//!
//! Reads never fail the caller: [`read_or_else`] substitutes a
//! caller-supplied default for missing, unreadable, or malformed data and
//! logs a warning for the malformed case. Writes propagate backend errors
//! (a full disk has no graceful fallback), so every mutating call site
//! carries a `Result`. There are no transactions and no atomicity across
//! keys.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors from the persistent store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed (including capacity exhaustion).
    #[error("store I/O error for key {key:?}: {source}")]
    Io {
        /// The key being accessed.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized for storage.
    #[error("failed to serialize value for key {key:?}: {source}")]
    Serialize {
        /// The key being written.
        key: String,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// String-keyed blob store with `get`/`set`/`remove`.
///
/// Values are opaque serialized text; typed access goes through
/// [`read_or_else`] and [`write`].
pub trait KvStore: Send + Sync {
    /// Fetch the raw stored value for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backend could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backend could not be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backend could not be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Keys for the persisted top-level entities.
///
/// Each entity is independently keyed and independently serialized; there is
/// no shared schema version and no migration logic.
pub mod keys {
    /// Key for the cart line collection.
    pub const CART: &str = "cart";

    /// Key for the hero slideshow content.
    pub const HERO: &str = "hero";

    /// Key for the stories section content.
    pub const STORIES: &str = "stories";

    /// Key for the local user identity record.
    pub const USER: &str = "user";
}

/// Read a typed value from the store, substituting a default when the key is
/// missing, the backend is unreadable, or the stored blob does not decode.
///
/// The malformed case logs a warning; callers get the default either way and
/// the bad blob stays in place until the next write replaces it wholesale.
pub fn read_or_else<T, F>(store: &dyn KvStore, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default(),
        Err(e) => {
            tracing::warn!("store read failed for {key:?}, using default: {e}");
            return default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("malformed data under {key:?}, using default: {e}");
            default()
        }
    }
}

/// Serialize `value` and store it under `key`.
///
/// # Errors
///
/// Returns `StoreError` if serialization or the backend write fails. Write
/// failures are not absorbed anywhere in the engine - they surface at the
/// mutating call site.
pub fn write<T: Serialize>(store: &dyn KvStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_owned(),
        source,
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn sample() -> Sample {
        Sample {
            name: "marigold".to_owned(),
            count: 3,
        }
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let store = MemoryStore::new();
        write(&store, "sample", &sample()).unwrap();

        let read: Sample = read_or_else(&store, "sample", || unreachable!());
        assert_eq!(read, sample());
    }

    #[test]
    fn test_missing_key_yields_default() {
        let store = MemoryStore::new();
        let read: Sample = read_or_else(&store, "absent", sample);
        assert_eq!(read, sample());
    }

    #[test]
    fn test_malformed_blob_yields_default() {
        let store = MemoryStore::new();
        store.set("sample", "{not json at all").unwrap();

        let read: Sample = read_or_else(&store, "sample", sample);
        assert_eq!(read, sample());
    }

    #[test]
    fn test_wrong_shape_yields_default() {
        let store = MemoryStore::new();
        store.set("sample", r#"{"totally": "different"}"#).unwrap();

        let read: Sample = read_or_else(&store, "sample", sample);
        assert_eq!(read, sample());
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("absent").unwrap();
        assert!(store.get("absent").unwrap().is_none());
    }
}
