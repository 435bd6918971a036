//! Orchestration services for the task management core.

mod backend;
mod session;

pub use backend::{DefaultTaskBackend, TASKS_KEY};
pub use session::{SessionSnapshot, TaskSession};
