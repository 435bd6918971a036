//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while validating or constructing domain task values.
///
/// The `Display` output of the text variants is user-facing copy rendered
/// directly by the presentation layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task text is empty after trimming.
    #[error("Task description cannot be empty.")]
    EmptyText,

    /// The task text exceeds the configured maximum length after trimming.
    #[error("Task description cannot exceed {limit} characters.")]
    TextTooLong {
        /// Maximum permitted length in characters.
        limit: usize,
    },

    /// The task identifier is not a positive integer.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidId(i64),
}
