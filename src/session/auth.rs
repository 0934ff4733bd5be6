//! Login and signup screen
//!
//! Two independent axes: sign-in vs sign-up, and member vs expert. Nothing
//! is verified; every submit just confirms and says where to go next.

use crate::notice::Notice;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    User,
    Expert,
}

/// Member form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Expert application fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpertApplication {
    pub full_name: String,
    pub email: String,
    pub license_number: String,
    pub specialization: String,
}

/// Confirmation plus an optional navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub notice: Notice,
    pub redirect: Option<Route>,
}

#[derive(Debug, Clone, Default)]
pub struct AuthFlow {
    mode: AuthMode,
    role: Role,
    show_password: bool,
    pub credentials: Credentials,
    pub application: ExpertApplication,
}

impl AuthFlow {
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
    }

    pub fn select_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn submit(&self) -> AuthOutcome {
        let message = match self.mode {
            AuthMode::SignIn => "Welcome back to Echo! 🌊",
            AuthMode::SignUp => "Welcome to Echo! Let's begin your growth journey! 🌱",
        };
        tracing::debug!(mode = ?self.mode, "Member form submitted");
        AuthOutcome {
            notice: Notice::success(message),
            redirect: Some(Route::Dashboard),
        }
    }

    pub fn continue_as_guest(&self) -> AuthOutcome {
        AuthOutcome {
            notice: Notice::success("Exploring Echo as a guest! You can upgrade anytime! 👋"),
            redirect: Some(Route::Chats),
        }
    }

    pub fn submit_expert_application(&self) -> AuthOutcome {
        AuthOutcome {
            notice: Notice::success(
                "Expert application received! We'll verify your credentials and be in touch! 🩺",
            ),
            redirect: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle_changes_greeting() {
        let mut flow = AuthFlow::default();
        assert_eq!(flow.submit().notice.message, "Welcome back to Echo! 🌊");

        flow.toggle_mode();
        assert_eq!(flow.mode(), AuthMode::SignUp);
        let outcome = flow.submit();
        assert!(outcome.notice.message.starts_with("Welcome to Echo!"));
        assert_eq!(outcome.redirect, Some(Route::Dashboard));

        flow.toggle_mode();
        assert_eq!(flow.mode(), AuthMode::SignIn);
    }

    #[test]
    fn test_role_and_password_axes_are_independent() {
        let mut flow = AuthFlow::default();
        flow.toggle_mode();
        flow.select_role(Role::Expert);
        flow.toggle_password_visibility();
        assert_eq!(flow.mode(), AuthMode::SignUp);
        assert_eq!(flow.role(), Role::Expert);
        assert!(flow.password_visible());
    }

    #[test]
    fn test_guest_and_expert_paths() {
        let flow = AuthFlow::default();
        assert_eq!(flow.continue_as_guest().redirect, Some(Route::Chats));
        assert_eq!(flow.submit_expert_application().redirect, None);
    }
}
