//! User-facing notices
//!
//! The confirmation a handler emits after it has applied its update. The UI
//! renders each notice as a transient toast.

use crate::error::ActionError;

/// Visual tone of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// A toast-ready message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}

impl From<ActionError> for Notice {
    fn from(err: ActionError) -> Self {
        Notice::error(err.to_string())
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_converts_to_error_notice() {
        let notice: Notice = ActionError::ExpertOffline.into();
        assert!(notice.is_error());
        assert_eq!(
            notice.message,
            "This expert is currently offline. Please try again later."
        );
    }
}
