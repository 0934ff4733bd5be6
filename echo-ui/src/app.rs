//! App Root Component
//!
//! Router, global providers and the not-found screen. Login renders on its
//! own; every other screen sits inside [`Layout`].

use leptos::*;
use leptos_router::*;

use crate::components::{Layout, Toast};
use crate::pages::{Blog, Chats, Crowdfunding, Dashboard, Experts, Finn, Home, Login};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                <Routes>
                    <Route path="/login" view=Login />
                    <Route path="/" view=Layout>
                        <Route path="" view=Home />
                        <Route path="dashboard" view=Dashboard />
                        <Route path="chats" view=Chats />
                        <Route path="finn" view=Finn />
                        <Route path="experts" view=Experts />
                        <Route path="crowdfunding" view=Crowdfunding />
                        <Route path="blog" view=Blog />
                    </Route>
                    <Route path="/*any" view=NotFound />
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();

    create_effect(move |_| {
        log::warn!("404: no screen at {}", location.pathname.get());
    });

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center px-4">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-4xl font-bold mb-2">"404"</h1>
            <p class="text-xl text-gray-400 mb-6">"Oops! Page not found"</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Return to Home"
            </A>
        </div>
    }
}
