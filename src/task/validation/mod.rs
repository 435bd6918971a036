//! Task input validation.
//!
//! Pure rules for checking and normalising task text, plus the
//! configuration that bounds them. Rules have no side effects and never
//! touch storage.

pub mod rules;

pub use rules::{is_valid_id, sanitize_task_text, validate_task_text};

/// Configuration for task text validation.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Maximum task text length in characters, measured after trimming.
    pub max_text_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_text_length: 500,
        }
    }
}
