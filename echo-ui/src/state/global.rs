//! Global Application State
//!
//! The toast layer and the companion settings. Screen data is not global:
//! each page owns its controller and drops it on navigation.

use echo::catalog::seed::STARTING_SEEDS;
use echo::{ActionResult, CompanionConfig, Notice, Tone};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Reply delay and starting balance for new screens
    pub companion: StoredValue<CompanionConfig>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        companion: store_value(CompanionConfig::default()),
    };

    provide_context(state);
}

/// Fetch the state provided by [`provide_global_state`]
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    pub fn companion(&self) -> CompanionConfig {
        self.companion.get_value()
    }

    /// Balance shown in the header badge
    pub fn starting_seeds(&self) -> u32 {
        self.companion
            .try_with_value(|c| c.starting_seeds)
            .unwrap_or(STARTING_SEEDS)
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    pub fn notify(&self, notice: &Notice) {
        match notice.tone {
            Tone::Success => self.show_success(&notice.message),
            Tone::Error => self.show_error(&notice.message),
        }
    }

    /// Toast the outcome of a handler
    pub fn report(&self, result: ActionResult<Notice>) {
        match result {
            Ok(notice) => self.notify(&notice),
            Err(e) => {
                log::debug!("action rejected: {}", e);
                self.show_error(&e.to_string());
            }
        }
    }

    /// Like [`report`](Self::report) for handlers that may have nothing to say
    pub fn report_quiet(&self, result: ActionResult<Option<Notice>>) {
        match result {
            Ok(Some(notice)) => self.notify(&notice),
            Ok(None) => {}
            Err(e) => self.report(Err(e)),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use echo::ActionError;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn rejected_action_lands_in_error_toast() {
        let runtime = create_runtime();
        provide_global_state();
        let state = use_global_state();

        state.report(Err(ActionError::InvalidAmount));
        assert_eq!(
            state.error.get_untracked().as_deref(),
            Some("Please enter a support amount greater than $0")
        );
        assert_eq!(state.success.get_untracked(), None);

        state.report(Ok(Notice::success("Message sent! 💫")));
        assert_eq!(state.success.get_untracked().as_deref(), Some("Message sent! 💫"));

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn quiet_report_skips_empty_outcomes() {
        let runtime = create_runtime();
        provide_global_state();
        let state = use_global_state();

        state.report_quiet(Ok(None));
        assert_eq!(state.success.get_untracked(), None);
        assert_eq!(state.error.get_untracked(), None);

        state.report_quiet(Err(ActionError::BubbleGone));
        assert_eq!(
            state.error.get_untracked().as_deref(),
            Some("That bubble already drifted away")
        );

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn starting_seeds_follow_companion_config() {
        let runtime = create_runtime();
        provide_global_state();
        assert_eq!(use_global_state().starting_seeds(), STARTING_SEEDS);
        runtime.dispose();
    }
}
