//! Injectable latency strategy for the simulated backend.

use async_trait::async_trait;

/// Artificial delay applied before simulated backend operations.
///
/// The backend keeps distinct delay bands per operation class so that
/// ordering bugs between overlapping operations stay observable. Keeping
/// the delay behind a trait lets tests substitute a deterministic or zero
/// delay while preserving the interleaving-sensitive code paths.
#[async_trait]
pub trait Latency: Send + Sync {
    /// Delay applied to loads, saves, and deletions.
    async fn short(&self);

    /// Delay applied to task creation and updates.
    async fn medium(&self);
}
