//! Taskboard: the state-management core of a client-side task manager.
//!
//! This crate provides the synchronisation heart of a single-session to-do
//! application: an optimistic task state container, the simulated
//! asynchronous backend it issues commands to, and the error-absorbing
//! storage adapter over a pluggable key-value store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage, latency, and the
//!   backend boundary
//! - **Adapters**: Concrete implementations of ports (in-memory store,
//!   namespaced JSON storage, latency strategies)
//!
//! # Modules
//!
//! - [`task`]: Task domain, storage, and the state container
//! - [`logging`]: Explicit, environment-independent tracing initialisation

pub mod logging;
pub mod task;
