//! Toast Notification Component
//!
//! Shows the latest success and error notices.

use echo::Tone;
use leptos::*;

use crate::state::use_global_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2 max-w-sm">
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage message=msg tone=Tone::Success />
                })
            }}

            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage message=msg tone=Tone::Error />
                })
            }}
        </div>
    }
}

fn toast_style(tone: Tone) -> (&'static str, &'static str) {
    match tone {
        Tone::Success => ("🌱", "bg-teal-700 border-teal-500"),
        Tone::Error => ("⚠", "bg-red-700 border-red-500"),
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    tone: Tone,
) -> impl IntoView {
    let (icon, bg_class) = toast_style(tone);

    view! {
        <div
            role="status"
            class=format!(
                "flex items-start space-x-3 {} border text-white px-4 py-3 rounded-lg shadow-lg \
                 transform transition-all duration-300 ease-out animate-slide-in",
                bg_class
            )
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}

