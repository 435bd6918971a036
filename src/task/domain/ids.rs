//! Identifier types for the task domain.

use super::TaskDomainError;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Unique positive identifier for a task.
///
/// Serialises transparently as its numeric value, matching the persisted
/// JSON layout of earlier releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidId`] when the value is not
    /// positive.
    pub const fn new(value: i64) -> Result<Self, TaskDomainError> {
        if value <= 0 {
            return Err(TaskDomainError::InvalidId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocates clock-derived, strictly increasing task identifiers.
///
/// Identifiers start from the current wall-clock milliseconds and advance by
/// at least one per allocation, so they never repeat within a process even
/// when tasks are created faster than the clock ticks.
#[derive(Debug, Default)]
pub struct TaskIdGenerator {
    last: AtomicI64,
}

impl TaskIdGenerator {
    /// Creates a generator with no allocation history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next identifier.
    #[must_use]
    pub fn next_id(&self, clock: &impl Clock) -> TaskId {
        let now = clock.utc().timestamp_millis();
        // The closure always produces a value, so the update cannot fail.
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or(0);
        TaskId(now.max(previous.saturating_add(1)))
    }
}
