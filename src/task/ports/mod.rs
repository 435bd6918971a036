//! Port contracts for the task management core.
//!
//! Ports define infrastructure-agnostic interfaces: the key-value store
//! capability, the injectable latency strategy, and the backend boundary
//! the state container issues commands to.

pub mod backend;
pub mod latency;
pub mod store;

pub use backend::{TaskBackend, TaskBackendResult, TaskServiceError};
pub use latency::Latency;
pub use store::{KeyValueStore, StoreError, StoreResult};
