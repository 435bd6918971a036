//! Shared fixtures and test doubles for the task module suites.

use crate::task::{
    adapters::{InMemoryStore, NoLatency},
    domain::{Task, TaskId},
    ports::Latency,
    services::DefaultTaskBackend,
};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tokio::sync::Notify;

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock pinned to 2024-01-01T00:00:00Z.
    pub fn epoch_2024() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid fixed instant"))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Latency double whose medium band blocks until released.
///
/// Lets a test observe container state while a creation or update call is
/// still in flight.
#[derive(Debug, Default)]
pub struct GatedLatency {
    gate: Notify,
}

impl GatedLatency {
    /// Releases one blocked medium-band call.
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl Latency for GatedLatency {
    async fn short(&self) {}

    async fn medium(&self) {
        self.gate.notified().await;
    }
}

/// Builds a zero-latency backend over the given store handle.
pub fn instant_backend(
    store: InMemoryStore,
) -> Arc<DefaultTaskBackend<InMemoryStore, NoLatency, DefaultClock>> {
    Arc::new(DefaultTaskBackend::new(
        store,
        Arc::new(NoLatency),
        Arc::new(DefaultClock),
    ))
}

/// Builds a task record without timestamps.
pub fn task(id: i64, text: &str, completed: bool) -> Task {
    Task::new(
        TaskId::new(id).expect("test ids are positive"),
        text.to_owned(),
        completed,
    )
}

/// Builds a validated task identifier.
pub fn task_id(id: i64) -> TaskId {
    TaskId::new(id).expect("test ids are positive")
}
