//! Login Page
//!
//! Member sign-in/sign-up and the expert application. Renders outside the
//! shell layout.

use echo::session::{AuthFlow, AuthMode, AuthOutcome, Role};
use leptos::*;
use leptos_router::*;

use crate::state::{use_global_state, GlobalState};

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("💬", "Safe Conversations", "World Chat, Streams, and private Haven"),
    ("✨", "FINN AI Assistant", "Your friendly dolphin companion"),
    ("🛡", "Expert Network", "Verified mental health professionals"),
];

const VERIFICATION_STEPS: &[&str] = &[
    "License verification (1-2 business days)",
    "Background check and credential review",
    "Platform training and onboarding",
];

/// Toast the outcome and follow its redirect, if any
fn finish<N>(state: GlobalState, navigate: &N, outcome: AuthOutcome)
where
    N: Fn(&str, NavigateOptions),
{
    state.notify(&outcome.notice);
    if let Some(route) = outcome.redirect {
        log::debug!("login redirect to {}", route);
        navigate(route.path(), Default::default());
    }
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let flow = create_rw_signal(AuthFlow::default());

    view! {
        <div class="min-h-screen bg-gradient-to-br from-gray-900 to-gray-800 flex items-center justify-center p-4">
            <div class="w-full max-w-6xl grid lg:grid-cols-2 gap-8 items-center">
                <Branding flow=flow />

                <div class="w-full max-w-md mx-auto">
                    <RoleTabs flow=flow />
                    {move || match flow.with(|f| f.role()) {
                        Role::User => view! { <MemberForm flow=flow /> }.into_view(),
                        Role::Expert => view! { <ExpertForm flow=flow /> }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Branding(flow: RwSignal<AuthFlow>) -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let guest = move |_| {
        if let Some(outcome) = flow.try_with(|f| f.continue_as_guest()) {
            finish(state, &navigate, outcome);
        }
    };

    view! {
        <div class="space-y-8 text-center lg:text-left">
            <div class="space-y-4">
                <A href="/" class="flex items-center justify-center lg:justify-start space-x-2">
                    <div class="h-12 w-12 rounded-full bg-gradient-to-br from-primary to-success" />
                    <div>
                        <div class="text-3xl font-bold">"Echo"</div>
                        <div class="text-sm text-gray-400">"Voices that Grow"</div>
                    </div>
                </A>
                <h1 class="text-4xl lg:text-5xl font-bold">
                    "Join Your "
                    <span class="bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                        "Safe Space"
                    </span>
                </h1>
                <p class="text-lg text-gray-400">
                    "Where minds bloom through connection, support, and understanding"
                </p>
            </div>

            <div class="grid gap-4 max-w-md mx-auto lg:mx-0">
                {HIGHLIGHTS
                    .iter()
                    .map(|(icon, title, text)| view! {
                        <div class="flex items-center gap-3 text-left">
                            <div class="h-10 w-10 bg-primary/10 rounded-lg flex items-center justify-center">
                                {*icon}
                            </div>
                            <div>
                                <h3 class="font-semibold">{*title}</h3>
                                <p class="text-sm text-gray-400">{*text}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="bg-gray-800 p-6 rounded-xl border border-gray-700">
                <h3 class="font-semibold mb-2">"Want to explore first?"</h3>
                <p class="text-sm text-gray-400 mb-4">
                    "Join as a guest to experience Echo's supportive community without creating an account"
                </p>
                <button
                    class="w-full px-4 py-2 border border-primary text-primary rounded-lg hover:bg-primary hover:text-gray-900 transition-colors"
                    on:click=guest
                >
                    "👥 Continue as Guest"
                </button>
            </div>
        </div>
    }
}

#[component]
fn RoleTabs(flow: RwSignal<AuthFlow>) -> impl IntoView {
    let tab = move |role: Role, label: &'static str| {
        view! {
            <button
                class=move || {
                    if flow.with(|f| f.role()) == role {
                        "flex-1 py-2 rounded-md bg-gray-700 text-white font-medium"
                    } else {
                        "flex-1 py-2 rounded-md text-gray-400 hover:text-white"
                    }
                }
                on:click=move |_| flow.update(|f| f.select_role(role))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="flex bg-gray-800 rounded-lg p-1 mb-4">
            {tab(Role::User, "💚 Join as User")}
            {tab(Role::Expert, "🩺 Join as Expert")}
        </div>
    }
}

#[component]
fn MemberForm(flow: RwSignal<AuthFlow>) -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();
    let signing_up = move || flow.with(|f| f.mode()) == AuthMode::SignUp;

    let submit = move |_| {
        if let Some(outcome) = flow.try_with(|f| f.submit()) {
            finish(state, &navigate, outcome);
        }
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div class="text-center space-y-1">
                <h2 class="text-xl font-semibold">
                    {move || if signing_up() { "Start Your Journey" } else { "Welcome Back" }}
                </h2>
                <p class="text-sm text-gray-400">
                    {move || if signing_up() { "Join our supportive community" } else { "Continue your growth in Echo" }}
                </p>
            </div>

            <Show when=signing_up>
                <Field
                    label="Display Name"
                    placeholder="Choose a supportive name"
                    value=Signal::derive(move || flow.with(|f| f.credentials.name.clone()))
                    on_input=move |v| flow.update(|f| f.credentials.name = v)
                />
            </Show>

            <Field
                label="Email"
                input_type="email"
                placeholder="your.email@example.com"
                value=Signal::derive(move || flow.with(|f| f.credentials.email.clone()))
                on_input=move |v| flow.update(|f| f.credentials.email = v)
            />

            <div class="space-y-1">
                <label class="text-sm font-medium">"Password"</label>
                <div class="relative">
                    <input
                        type=move || { if flow.with(|f| f.password_visible()) { "text" } else { "password" } }
                        placeholder="Secure password"
                        class="w-full px-4 py-2 pr-12 bg-gray-700 border border-gray-600 rounded-lg text-white focus:outline-none focus:ring-2 focus:ring-primary-500"
                        prop:value=move || flow.with(|f| f.credentials.password.clone())
                        on:input=move |ev| flow.update(|f| f.credentials.password = event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="absolute right-0 top-0 h-full px-3 text-gray-400"
                        aria-label="Toggle password visibility"
                        on:click=move |_| flow.update(|f| f.toggle_password_visibility())
                    >
                        {move || if flow.with(|f| f.password_visible()) { "🙈" } else { "👁" }}
                    </button>
                </div>
            </div>

            <Show when=signing_up>
                <label class="flex items-center space-x-2 text-sm text-gray-400">
                    <input type="checkbox" />
                    <span>"I agree to Echo's community guidelines and privacy policy"</span>
                </label>
            </Show>

            <button
                class="w-full px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                on:click=submit
            >
                {move || if signing_up() { "Join Echo →" } else { "Sign In →" }}
            </button>

            <div class="text-center">
                <button
                    class="text-sm text-gray-400 hover:text-white"
                    on:click=move |_| flow.update(|f| f.toggle_mode())
                >
                    {move || {
                        if signing_up() {
                            "Already have an account? Sign in"
                        } else {
                            "New to Echo? Create an account"
                        }
                    }}
                </button>
            </div>
            <Show when=move || !signing_up()>
                <div class="text-center text-sm text-gray-500">"Forgot your password?"</div>
            </Show>
        </div>
    }
}

#[component]
fn ExpertForm(flow: RwSignal<AuthFlow>) -> impl IntoView {
    let state = use_global_state();

    let submit = move |_| {
        if let Some(outcome) = flow.try_with(|f| f.submit_expert_application()) {
            state.notify(&outcome.notice);
        }
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div class="text-center space-y-2">
                <h2 class="text-xl font-semibold">"🩺 Join as Mental Health Expert"</h2>
                <p class="text-sm text-gray-400">"Help others on their mental wellness journey"</p>
                <span class="inline-block px-3 py-1 rounded-full text-xs bg-accent/10 text-accent border border-accent/20">
                    "Verification Required"
                </span>
            </div>

            <Field
                label="Full Name"
                placeholder="Dr. Your Name"
                value=Signal::derive(move || flow.with(|f| f.application.full_name.clone()))
                on_input=move |v| flow.update(|f| f.application.full_name = v)
            />
            <Field
                label="Professional Email"
                input_type="email"
                placeholder="name@clinic.com"
                value=Signal::derive(move || flow.with(|f| f.application.email.clone()))
                on_input=move |v| flow.update(|f| f.application.email = v)
            />
            <Field
                label="License Number"
                placeholder="Professional license number"
                value=Signal::derive(move || flow.with(|f| f.application.license_number.clone()))
                on_input=move |v| flow.update(|f| f.application.license_number = v)
            />
            <Field
                label="Specialization"
                placeholder="e.g., Clinical Psychology, Psychiatry"
                value=Signal::derive(move || flow.with(|f| f.application.specialization.clone()))
                on_input=move |v| flow.update(|f| f.application.specialization = v)
            />

            <div class="bg-gray-700/50 p-4 rounded-lg space-y-2">
                <h4 class="font-medium text-sm">"Verification Process:"</h4>
                <ul class="text-xs text-gray-400 space-y-1">
                    {VERIFICATION_STEPS
                        .iter()
                        .map(|step| view! { <li>{format!("• {}", step)}</li> })
                        .collect_view()}
                </ul>
            </div>

            <label class="flex items-center space-x-2 text-sm text-gray-400">
                <input type="checkbox" />
                <span>"I agree to Echo's professional standards and ethics code"</span>
            </label>

            <button
                class="w-full px-4 py-2 bg-accent-600 hover:bg-accent rounded-lg font-medium transition-colors"
                on:click=submit
            >
                "Submit Expert Application →"
            </button>
            <p class="text-xs text-gray-500 text-center">
                "We'll contact you within 48 hours regarding your application status"
            </p>
        </div>
    }
}

/// Labelled text input bound to one form field
#[component]
fn Field<F>(
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    value: Signal<String>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <div class="space-y-1">
            <label class="text-sm font-medium">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                class="w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white focus:outline-none focus:ring-2 focus:ring-primary-500"
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </div>
    }
}
