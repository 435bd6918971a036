//! Task state container mediating between presentation and the backend.

use crate::task::domain::{Task, TaskId, TaskPatch};
use crate::task::ports::{TaskBackend, TaskServiceError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{error, warn};

/// Fixed user-facing message for a failed load.
const LOAD_ERROR: &str = "Failed to load tasks";
/// Fixed user-facing message for a failed add.
const ADD_ERROR: &str = "Failed to add task";
/// Fixed user-facing message for a failed toggle.
const UPDATE_ERROR: &str = "Failed to update task";
/// Fixed user-facing message for a failed delete.
const DELETE_ERROR: &str = "Failed to delete task";
/// Fixed user-facing message for a failed refresh.
const REFRESH_ERROR: &str = "Failed to refresh tasks";

/// Consistent read-only view of the container state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Current task collection, in insertion order.
    pub tasks: Vec<Task>,
    /// Whether any operation is still in flight.
    pub is_loading: bool,
    /// Message of the most recent failed operation, if unresolved.
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct SessionState {
    tasks: Vec<Task>,
    pending: usize,
    error: Option<String>,
}

/// Task state container.
///
/// Owns the canonical in-memory collection together with the loading and
/// error flags the presentation layer renders. Every asynchronous
/// continuation re-reads the collection under the state lock at resolution
/// time; no snapshot captured before an await is ever written back, which
/// is what keeps overlapping operations from losing each other's edits.
///
/// Failures never propagate past this boundary: they are captured into the
/// error field and logged. Errors clear at the start of the next operation,
/// never automatically.
pub struct TaskSession<B> {
    backend: Arc<B>,
    state: Arc<Mutex<SessionState>>,
    save_gate: Arc<tokio::sync::Mutex<()>>,
}

impl<B> Clone for TaskSession<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            state: Arc::clone(&self.state),
            save_gate: Arc::clone(&self.save_gate),
        }
    }
}

impl<B: TaskBackend> TaskSession<B> {
    /// Creates a container with an empty collection and no initial load.
    #[must_use]
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(SessionState::default())),
            save_gate: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Creates a container and starts the initial load in the background.
    #[must_use]
    pub fn start(backend: Arc<B>) -> Self
    where
        B: 'static,
    {
        let session = Self::new(backend);
        let loader = session.clone();
        tokio::spawn(async move { loader.load_tasks().await });
        session
    }

    /// Returns the current task collection, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.lock_state().tasks.clone()
    }

    /// Returns `true` while any operation is in flight.
    ///
    /// Overlapping operations stack: the flag clears only when the last
    /// one resolves. Best-effort presentation feedback, not a mutex.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock_state().pending > 0
    }

    /// Returns the error message of the most recent failed operation.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.lock_state().error.clone()
    }

    /// Returns a consistent view of the whole container state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock_state();
        SessionSnapshot {
            tasks: state.tasks.clone(),
            is_loading: state.pending > 0,
            error: state.error.clone(),
        }
    }

    /// Loads the persisted collection and replaces the in-memory state
    /// wholesale.
    pub async fn load_tasks(&self) {
        self.begin();
        match self.backend.load_tasks().await {
            Ok(tasks) => {
                self.lock_state().tasks = tasks;
                self.finish(None);
            }
            Err(err) => {
                error!(%err, "error loading tasks");
                self.finish(Some(surface_message(&err, LOAD_ERROR)));
            }
        }
    }

    /// Validates, creates, appends, and persists a new task.
    ///
    /// The new task is appended to the collection as it is when the backend
    /// resolves, so edits that landed in the meantime are kept. On failure
    /// the collection is left unchanged.
    pub async fn add_task(&self, text: &str) {
        self.begin();
        match self.backend.add_task(text).await {
            Ok(task) => {
                self.lock_state().tasks.push(task);
                self.persist().await;
                self.finish(None);
            }
            Err(err) => {
                error!(%err, "error adding task");
                self.finish(Some(surface_message(&err, ADD_ERROR)));
            }
        }
    }

    /// Flips a task's completion state.
    ///
    /// The flip is applied optimistically before the backend call resolves,
    /// so the presentation reflects intent immediately; the confirmed patch
    /// is then merged into whatever the collection has become. An unknown
    /// id is a no-op, not an error. On backend failure the optimistic flip
    /// is reverted.
    pub async fn toggle_task(&self, id: TaskId) {
        self.begin();
        let completed = {
            let mut state = self.lock_state();
            let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) else {
                drop(state);
                self.finish(None);
                return;
            };
            task.completed = !task.completed;
            task.completed
        };

        match self
            .backend
            .update_task(id, TaskPatch::completion(completed))
            .await
        {
            Ok(patch) => {
                {
                    let mut state = self.lock_state();
                    // The task may have been deleted while the update was in
                    // flight; the merge then has nothing to land on.
                    if let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) {
                        task.apply(&patch);
                    }
                }
                self.persist().await;
                self.finish(None);
            }
            Err(err) => {
                error!(%err, "error updating task");
                {
                    let mut state = self.lock_state();
                    if let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) {
                        task.completed = !completed;
                    }
                }
                self.finish(Some(surface_message(&err, UPDATE_ERROR)));
            }
        }
    }

    /// Removes a task and persists the shrunken collection.
    ///
    /// The backend acknowledges the id whether or not a matching task
    /// exists; removal applies to the collection as it is at resolution
    /// time.
    pub async fn delete_task(&self, id: TaskId) {
        self.begin();
        match self.backend.delete_task(id).await {
            Ok(deleted) => {
                self.lock_state().tasks.retain(|task| task.id != deleted);
                self.persist().await;
                self.finish(None);
            }
            Err(err) => {
                error!(%err, "error deleting task");
                self.finish(Some(surface_message(&err, DELETE_ERROR)));
            }
        }
    }

    /// Replaces the collection wholesale with the persisted state.
    ///
    /// An absent persisted collection refreshes to empty; there is no
    /// seeding on this path.
    pub async fn refresh_tasks(&self) {
        self.begin();
        match self.backend.refresh_tasks().await {
            Ok(tasks) => {
                self.lock_state().tasks = tasks;
                self.finish(None);
            }
            Err(err) => {
                error!(%err, "error refreshing tasks");
                self.finish(Some(surface_message(&err, REFRESH_ERROR)));
            }
        }
    }

    /// Persists the current collection through the serialised save gate.
    ///
    /// Each save captures the collection after all previously resolved
    /// mutations, so the last write always carries the fully reconciled
    /// state. A rejected write is logged, not surfaced as an error.
    async fn persist(&self) {
        let _gate = self.save_gate.lock().await;
        let tasks = self.lock_state().tasks.clone();
        match self.backend.save_tasks(&tasks).await {
            Ok(true) => {}
            Ok(false) => warn!("task collection was not persisted"),
            Err(err) => warn!(%err, "task collection was not persisted"),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        // Critical sections are plain field reads and writes; a poisoning
        // panic cannot leave the state half-mutated.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) {
        let mut state = self.lock_state();
        state.error = None;
        state.pending += 1;
    }

    fn finish(&self, error: Option<String>) {
        let mut state = self.lock_state();
        state.pending = state.pending.saturating_sub(1);
        if let Some(message) = error {
            state.error = Some(message);
        }
    }
}

/// Chooses the message surfaced for a failed operation.
///
/// Validation messages are user-facing copy and pass through verbatim;
/// anything else collapses to the operation's fixed message.
fn surface_message(err: &TaskServiceError, fallback: &str) -> String {
    match err {
        TaskServiceError::Validation(cause) => cause.to_string(),
        TaskServiceError::Storage(_) => fallback.to_owned(),
    }
}
