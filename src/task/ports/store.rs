//! Key-value store capability consumed by the storage adapter.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Synchronous key-value storage contract.
///
/// Models the host environment's persistent store: string keys, string
/// values, whole-value overwrite, no transactional guarantees. The storage
/// adapter namespaces keys before they reach an implementation.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store cannot be read.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QuotaExceeded`] when the store has no room for
    /// the value, or [`StoreError::Backend`] when the write fails.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the removal fails.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store rejected a write because its quota is exhausted.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// The backing store failed or is inaccessible.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a backend failure.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
