//! Shell layout shared by every screen except login

use leptos::*;
use leptos_router::*;

use super::Nav;

#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-gray-900 to-gray-800 text-white flex flex-col">
            <Nav />

            <main class="flex-1">
                <Outlet />
            </main>

            <footer class="border-t border-gray-800 py-6 text-center text-sm text-gray-500">
                "© 2024 Echo: Where Minds Bloom. Built with 💚 for mental wellness."
            </footer>
        </div>
    }
}
