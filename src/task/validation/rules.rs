//! Individual validation rule implementations.
//!
//! Each rule is a pure function. Rules return `Ok(())` on success or a
//! specific [`TaskDomainError`] on failure; the error's `Display` output is
//! the message shown to the user.

use super::ValidationConfig;
use crate::task::domain::TaskDomainError;

/// Validates task description text against the configured limits.
///
/// The text is trimmed before checking, so surrounding whitespace never
/// counts towards the length limit.
///
/// # Errors
///
/// Returns [`TaskDomainError::EmptyText`] when the trimmed text is empty,
/// or [`TaskDomainError::TextTooLong`] when the trimmed text exceeds the
/// configured maximum length.
pub fn validate_task_text(text: &str, config: &ValidationConfig) -> Result<(), TaskDomainError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyText);
    }

    if trimmed.chars().count() > config.max_text_length {
        return Err(TaskDomainError::TextTooLong {
            limit: config.max_text_length,
        });
    }

    Ok(())
}

/// Normalises task description text.
///
/// Trims surrounding whitespace and collapses internal whitespace runs to
/// single spaces. Idempotent: sanitising already-sanitised text is a no-op.
#[must_use]
pub fn sanitize_task_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns `true` when the raw value is usable as a task identifier.
#[must_use]
pub const fn is_valid_id(value: i64) -> bool {
    value > 0
}
