//! Navigation Component
//!
//! Header bar with the brand, one link per shell screen, the Seeds badge and
//! a collapsible menu for narrow screens.

use echo::Route;
use leptos::*;
use leptos_router::*;

use crate::state::use_global_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_global_state();
    let (menu_open, set_menu_open) = create_signal(false);
    let seeds = state.starting_seeds();

    view! {
        <nav class="sticky top-0 z-40 bg-gray-800/95 backdrop-blur border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3 hover:opacity-80 transition-opacity">
                        <div class="h-8 w-8 rounded-full bg-gradient-to-br from-primary to-success" />
                        <div>
                            <div class="text-xl font-bold text-white">"Echo"</div>
                            <div class="text-xs text-gray-400">"Voices that Grow"</div>
                        </div>
                    </A>

                    // Navigation links
                    <div class="hidden md:flex items-center space-x-1">
                        {Route::nav()
                            .map(|(route, label)| view! { <NavLink route=route label=label /> })
                            .collect_view()}
                    </div>

                    <div class="hidden md:flex items-center">
                        <SeedBadge seeds=seeds />
                    </div>

                    <button
                        class="md:hidden px-3 py-2 rounded-lg border border-gray-600 text-gray-300"
                        aria-label="Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>

                // Mobile menu
                {move || {
                    if menu_open.get() {
                        view! {
                            <div
                                class="md:hidden flex flex-col space-y-1 pb-4"
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {Route::nav()
                                    .map(|(route, label)| view! { <NavLink route=route label=label /> })
                                    .collect_view()}
                                <div class="pt-3">
                                    <SeedBadge seeds=seeds />
                                </div>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    route: Route,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=route.path()
            exact=matches!(route, Route::Home)
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-primary-600 text-white"
        >
            <span class="mr-2">{route.nav_icon()}</span>
            {label}
        </A>
    }
}

#[component]
fn SeedBadge(seeds: u32) -> impl IntoView {
    view! {
        <span class="px-3 py-1 rounded-full text-sm bg-green-500/10 text-green-400 border border-green-500/20">
            {format!("🌱 {} Seeds", seeds)}
        </span>
    }
}
