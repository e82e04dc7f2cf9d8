//! Validation failures surfaced to the user.

/// Reasons a create or edit request is rejected before any state changes.
///
/// The `Display` text is the exact notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter task title!")]
    EmptyTaskTitle,

    #[error("Enter subtask title!")]
    EmptySubtaskTitle,

    #[error("Year must be between {min} and {max}!")]
    DeadlineYearOutOfRange { min: i32, max: i32 },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
