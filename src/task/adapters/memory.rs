//! In-memory key-value store for tests and standalone runs.

use crate::task::ports::{KeyValueStore, StoreError, StoreResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep a handle to
/// inspect what the rest of the stack has written.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store lock is poisoned.
    pub fn len(&self) -> StoreResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|err| StoreError::backend(std::io::Error::other(err.to_string())))?;
        Ok(entries.len())
    }

    /// Returns `true` when no keys are stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store lock is poisoned.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| StoreError::backend(std::io::Error::other(err.to_string())))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| StoreError::backend(std::io::Error::other(err.to_string())))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| StoreError::backend(std::io::Error::other(err.to_string())))?;
        entries.remove(key);
        Ok(())
    }
}
