use thiserror::Error;

/// Why an `add` was refused. The list is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task description is empty")]
    EmptyDescription,

    #[error("Deadline is missing")]
    EmptyDeadline,

    #[error("Deadline is not a date (expected YYYY-MM-DD): {0}")]
    InvalidDeadline(String),
}

/// Task list errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No task at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid priority level: {0} (expected 1, 2 or 3)")]
    InvalidPriority(u8),
}
