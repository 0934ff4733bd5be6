//! Action error types
//!
//! Every screen handler validates a few trivial preconditions before it mutates
//! anything. A failed check is reported as an [`ActionError`]; its `Display`
//! text is exactly what the user sees in the error toast.

use thiserror::Error;

/// Validation failures raised by screen controllers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Chat input was empty or whitespace
    #[error("Write something before sending")]
    EmptyMessage,

    /// Story composer submitted without a title or body
    #[error("Please fill in both title and content")]
    MissingStoryFields,

    /// Purchase costs more than the current Seeds balance
    #[error("Not enough Seeds! You need {short} more Seeds.")]
    InsufficientSeeds { short: u32 },

    /// Session requested with an expert who is offline
    #[error("This expert is currently offline. Please try again later.")]
    ExpertOffline,

    /// Support amount was zero or unparseable
    #[error("Please enter a support amount greater than $0")]
    InvalidAmount,

    /// Story already liked in this session
    #[error("You already liked this story 💚")]
    AlreadyLiked,

    /// Outfit is the one FINN has on
    #[error("FINN is already wearing the {0}")]
    AlreadyWearing(String),

    /// Bubble Drifter round already running
    #[error("Bubble Drifter is already running")]
    GameInProgress,

    /// Bubble was popped already or never existed
    #[error("That bubble already drifted away")]
    BubbleGone,

    /// Unknown id for a seeded record
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
}

impl ActionError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        ActionError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Result type alias for screen actions
pub type ActionResult<T> = Result<T, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ActionError::InsufficientSeeds { short: 24 };
        assert_eq!(err.to_string(), "Not enough Seeds! You need 24 more Seeds.");

        let err = ActionError::MissingStoryFields;
        assert_eq!(err.to_string(), "Please fill in both title and content");
    }

    #[test]
    fn test_not_found_helper() {
        let err = ActionError::not_found("Expert", 42);
        assert_eq!(err.to_string(), "Expert 42 not found");
        assert!(matches!(err, ActionError::NotFound { kind: "Expert", .. }));
    }
}
