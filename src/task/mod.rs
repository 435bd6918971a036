//! Task management core.
//!
//! Implements the state-management heart of a client-side to-do
//! application: a task state container that applies optimistic updates and
//! reconciles them with a simulated asynchronous backend, plus the storage
//! and validation collaborators underneath. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Input validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
