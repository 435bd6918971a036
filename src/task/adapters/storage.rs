//! Error-absorbing, namespacing storage adapter.

use crate::task::ports::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

/// Storage key prefix separating this application's data from unrelated
/// entries in a shared store.
pub const DEFAULT_PREFIX: &str = "task-app";

/// JSON storage adapter that namespaces keys and absorbs store failures.
///
/// Every failure mode of the underlying store (quota exhaustion, corrupted
/// JSON, access failure) degrades to a `None` or `false` result rather than
/// an error; the state container's error handling relies on this contract.
/// Failures are logged with full diagnostics at the point of absorption.
#[derive(Debug, Clone)]
pub struct NamespacedStore<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> NamespacedStore<S> {
    /// Creates an adapter with the default application prefix.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_prefix(store, DEFAULT_PREFIX)
    }

    /// Creates an adapter with a custom prefix.
    #[must_use]
    pub fn with_prefix(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    /// Returns the storage key for a logical key.
    #[must_use]
    pub fn namespaced_key(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key)
    }

    /// Serialises and writes `value` under the namespaced key.
    ///
    /// Returns `false` when serialisation fails or the store rejects the
    /// write.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let storage_key = self.namespaced_key(key);
        let serialized = match serde_json::to_string(value) {
            Ok(serialized) => serialized,
            Err(err) => {
                error!(key = %storage_key, %err, "failed to serialise value for storage");
                return false;
            }
        };

        match self.store.set(&storage_key, &serialized) {
            Ok(()) => true,
            Err(err) => {
                error!(key = %storage_key, %err, "failed to save to store");
                false
            }
        }
    }

    /// Reads and deserialises the value under the namespaced key.
    ///
    /// Returns `None` when the key is absent, the stored value is
    /// malformed, or the store read fails.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.read(&self.namespaced_key(key))
    }

    /// Reads the exact unnamespaced key.
    ///
    /// One-time migration path recovering data written before key
    /// namespacing existed.
    #[must_use]
    pub fn load_legacy<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.read(key)
    }

    /// Removes the namespaced key.
    ///
    /// Returns `false` when the removal fails.
    pub fn clear(&self, key: &str) -> bool {
        let storage_key = self.namespaced_key(key);
        match self.store.remove(&storage_key) {
            Ok(()) => true,
            Err(err) => {
                error!(key = %storage_key, %err, "failed to clear store key");
                false
            }
        }
    }

    fn read<T: DeserializeOwned>(&self, storage_key: &str) -> Option<T> {
        let raw = match self.store.get(storage_key) {
            Ok(raw) => raw?,
            Err(err) => {
                error!(key = %storage_key, %err, "failed to read from store");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                error!(key = %storage_key, %err, "stored value is malformed");
                None
            }
        }
    }
}
