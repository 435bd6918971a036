//! Backend boundary the task state container issues commands to.

use crate::task::domain::{Task, TaskDomainError, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task backend operations.
pub type TaskBackendResult<T> = Result<T, TaskServiceError>;

/// Task persistence and creation contract.
///
/// Implementations receive copies and return fresh values; they never
/// retain references into the caller's collection. The in-memory collection
/// stays owned by the state container.
#[async_trait]
pub trait TaskBackend: Send + Sync {
    /// Loads the persisted collection.
    ///
    /// First-run bootstrap path: implementations fall back to a legacy
    /// storage key and finally to a seeded default collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the backend cannot reach
    /// its storage at all.
    async fn load_tasks(&self) -> TaskBackendResult<Vec<Task>>;

    /// Persists the whole collection, replacing whatever is stored.
    ///
    /// Returns `false` when the store rejected the write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the backend cannot reach
    /// its storage at all.
    async fn save_tasks(&self, tasks: &[Task]) -> TaskBackendResult<bool>;

    /// Validates `text` and creates a new task.
    ///
    /// Validation failures are reported without delay and without touching
    /// storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the text is rejected.
    async fn add_task(&self, text: &str) -> TaskBackendResult<Task>;

    /// Confirms a partial update, refreshing its `updated_at`.
    ///
    /// The backend does not look up or mutate the stored collection;
    /// merging the returned patch is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the backend cannot
    /// confirm the update.
    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskBackendResult<TaskPatch>;

    /// Acknowledges deletion of `id`, echoing it back.
    ///
    /// Removal from the collection and persistence are the caller's
    /// responsibility; unknown ids are acknowledged all the same.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the backend cannot
    /// acknowledge the deletion.
    async fn delete_task(&self, id: TaskId) -> TaskBackendResult<TaskId>;

    /// Re-reads the persisted collection.
    ///
    /// Unlike [`TaskBackend::load_tasks`] there is no legacy fallback and
    /// no seeding: an absent collection refreshes to empty.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the backend cannot reach
    /// its storage at all.
    async fn refresh_tasks(&self) -> TaskBackendResult<Vec<Task>>;
}

/// Errors returned by task backend implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// Task input failed validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The backend could not reach its storage.
    #[error("task storage unavailable: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskServiceError {
    /// Wraps a storage failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
