//! Task record and partial-update types.

use super::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// Fields serialise in camelCase so the persisted JSON layout stays
/// compatible with data written by earlier releases of the application.
/// Timestamps are absent on the seeded default tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier within the active collection.
    pub id: TaskId,
    /// Sanitised description text.
    pub text: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Timestamp of the latest mutation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task without timestamps.
    #[must_use]
    pub const fn new(id: TaskId, text: String, completed: bool) -> Self {
        Self {
            id,
            text,
            completed,
            created_at: None,
            updated_at: None,
        }
    }

    /// Merges a partial update into this task.
    ///
    /// Absent patch fields leave the corresponding task fields untouched.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(text) = &patch.text {
            self.text.clone_from(text);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = Some(updated_at);
        }
    }
}

/// Partial update applied to an existing task.
///
/// Produced by the backend with a refreshed [`TaskPatch::updated_at`];
/// merging into the collection is the state container's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement description text.
    pub text: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
    /// Replacement mutation timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Creates a patch that only sets the completion flag.
    #[must_use]
    pub const fn completion(completed: bool) -> Self {
        Self {
            text: None,
            completed: Some(completed),
            updated_at: None,
        }
    }
}
