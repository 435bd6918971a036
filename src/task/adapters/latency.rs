//! Latency strategy implementations.

use crate::task::ports::Latency;
use async_trait::async_trait;
use rand::Rng;
use std::ops::Range;
use std::time::Duration;
use tokio::time::sleep;

/// Randomised latency imitating a small remote backend.
///
/// Each band draws a fresh duration per call, so overlapping operations
/// routinely resolve out of initiation order.
#[derive(Debug, Clone)]
pub struct RandomLatency {
    /// Millisecond band for loads, saves, and deletions.
    pub short_ms: Range<u64>,
    /// Millisecond band for task creation and updates.
    pub medium_ms: Range<u64>,
}

impl Default for RandomLatency {
    fn default() -> Self {
        Self {
            short_ms: 25..125,
            medium_ms: 50..350,
        }
    }
}

impl RandomLatency {
    async fn sleep_in(range: &Range<u64>) {
        let ms = rand::thread_rng().gen_range(range.clone());
        sleep(Duration::from_millis(ms)).await;
    }
}

#[async_trait]
impl Latency for RandomLatency {
    async fn short(&self) {
        Self::sleep_in(&self.short_ms).await;
    }

    async fn medium(&self) {
        Self::sleep_in(&self.medium_ms).await;
    }
}

/// Zero-delay strategy for deterministic tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn short(&self) {}

    async fn medium(&self) {}
}
