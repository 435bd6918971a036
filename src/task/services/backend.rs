//! Simulated persistence backend with artificial latency.

use crate::task::{
    adapters::NamespacedStore,
    domain::{Task, TaskId, TaskIdGenerator, TaskPatch},
    ports::{KeyValueStore, Latency, TaskBackend, TaskBackendResult},
    validation::{ValidationConfig, sanitize_task_text, validate_task_text},
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Logical storage key for the task collection.
pub const TASKS_KEY: &str = "tasks";

/// Seed collection persisted and returned on first run.
fn default_tasks() -> Vec<Task> {
    const SEEDS: [(i64, &str, bool); 5] = [
        (1, "Review marketing campaign proposal", false),
        (2, "Schedule team meeting for next week", false),
        (3, "Update project timeline document", true),
        (4, "Send follow-up email to client", false),
        (5, "Prepare presentation slides", false),
    ];

    SEEDS
        .iter()
        .filter_map(|(id, text, completed)| {
            // Seed ids are static positive literals.
            TaskId::new(*id)
                .ok()
                .map(|task_id| Task::new(task_id, (*text).to_owned(), *completed))
        })
        .collect()
}

/// Default task backend implementation.
///
/// Orchestrates validation, artificial latency, id and timestamp
/// assignment, and storage, imitating the remote service a production
/// client would talk to. The latency strategy and clock are injected so
/// tests can collapse the delays or pin time.
pub struct DefaultTaskBackend<S, L, C> {
    storage: NamespacedStore<S>,
    latency: Arc<L>,
    clock: Arc<C>,
    ids: TaskIdGenerator,
    validation: ValidationConfig,
}

impl<S, L, C> DefaultTaskBackend<S, L, C>
where
    S: KeyValueStore,
    L: Latency,
    C: Clock + Send + Sync,
{
    /// Creates a backend over the given store, latency strategy, and clock.
    #[must_use]
    pub fn new(store: S, latency: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            storage: NamespacedStore::new(store),
            latency,
            clock,
            ids: TaskIdGenerator::new(),
            validation: ValidationConfig::default(),
        }
    }

    /// Replaces the validation configuration.
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }
}

#[async_trait]
impl<S, L, C> TaskBackend for DefaultTaskBackend<S, L, C>
where
    S: KeyValueStore,
    L: Latency,
    C: Clock + Send + Sync,
{
    async fn load_tasks(&self) -> TaskBackendResult<Vec<Task>> {
        self.latency.short().await;

        if let Some(tasks) = self.storage.load::<Vec<Task>>(TASKS_KEY) {
            return Ok(tasks);
        }

        // Data written before key namespacing existed lives under the bare key.
        if let Some(tasks) = self.storage.load_legacy::<Vec<Task>>(TASKS_KEY) {
            return Ok(tasks);
        }

        let seeded = default_tasks();
        self.storage.save(TASKS_KEY, &seeded);
        Ok(seeded)
    }

    async fn save_tasks(&self, tasks: &[Task]) -> TaskBackendResult<bool> {
        self.latency.short().await;
        Ok(self.storage.save(TASKS_KEY, &tasks))
    }

    async fn add_task(&self, text: &str) -> TaskBackendResult<Task> {
        if let Err(err) = validate_task_text(text, &self.validation) {
            warn!(task_text = text, %err, "task validation failed");
            return Err(err.into());
        }

        self.latency.medium().await;

        let now = self.clock.utc();
        let task = Task {
            id: self.ids.next_id(&*self.clock),
            text: sanitize_task_text(text),
            completed: false,
            created_at: Some(now),
            updated_at: Some(now),
        };

        info!(task_id = %task.id, text = %task.text, "task created");
        Ok(task)
    }

    async fn update_task(&self, _id: TaskId, patch: TaskPatch) -> TaskBackendResult<TaskPatch> {
        self.latency.medium().await;

        Ok(TaskPatch {
            updated_at: Some(self.clock.utc()),
            ..patch
        })
    }

    async fn delete_task(&self, id: TaskId) -> TaskBackendResult<TaskId> {
        self.latency.short().await;
        Ok(id)
    }

    async fn refresh_tasks(&self) -> TaskBackendResult<Vec<Task>> {
        self.latency.short().await;
        Ok(self.storage.load(TASKS_KEY).unwrap_or_default())
    }
}
