//! Console driver exercising the task management core end to end.
//!
//! Stands in for the presentation layer: constructs the stack explicitly
//! at startup (store, latency, clock, backend, session), then issues the
//! same intents a UI would and logs the resulting state.

use mockable::DefaultClock;
use std::sync::Arc;
use std::time::Duration;
use taskboard::logging;
use taskboard::task::{
    adapters::{InMemoryStore, RandomLatency},
    services::{DefaultTaskBackend, TaskSession},
};
use tracing::{Level, info};

#[tokio::main]
async fn main() {
    logging::init(Level::DEBUG);

    let backend = Arc::new(DefaultTaskBackend::new(
        InMemoryStore::new(),
        Arc::new(RandomLatency::default()),
        Arc::new(DefaultClock),
    ));
    let session = TaskSession::start(Arc::clone(&backend));

    // Wait for the background initial load the way a UI would: poll the
    // loading flag.
    while session.tasks().is_empty() || session.is_loading() {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    report(&session, "initial load");

    session.add_task("  Write release notes   for 1.0  ").await;
    report(&session, "after add");

    if let Some(first) = session.tasks().first().map(|task| task.id) {
        session.toggle_task(first).await;
        report(&session, "after toggle");
    }

    if let Some(last) = session.tasks().last().map(|task| task.id) {
        session.delete_task(last).await;
        report(&session, "after delete");
    }

    session.refresh_tasks().await;
    report(&session, "after refresh");
}

fn report<B: taskboard::task::ports::TaskBackend>(session: &TaskSession<B>, stage: &str) {
    let snapshot = session.snapshot();
    info!(
        stage,
        count = snapshot.tasks.len(),
        error = snapshot.error.as_deref().unwrap_or("none"),
        "session state"
    );
    for task in &snapshot.tasks {
        info!(id = %task.id, completed = task.completed, text = %task.text, "task");
    }
}
