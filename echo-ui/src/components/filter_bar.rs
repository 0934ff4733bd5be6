//! Search box and facet dropdowns
//!
//! Both report raw input values; the owning page turns them into
//! [`Selection`](echo::Selection)s and feeds its controller.

use echo::filter::ALL;
use leptos::*;

/// Free-text search input
#[component]
pub fn SearchInput<F>(
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <div class="relative flex-1">
            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-500">"🔍"</span>
            <input
                type="text"
                placeholder=placeholder
                class="w-full pl-10 pr-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white \
                       placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-primary-500"
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </div>
    }
}

/// Dropdown over a fixed option list with a leading "all" entry
#[component]
pub fn FacetSelect<F>(
    /// Label of the "all" entry
    all_label: &'static str,
    options: Vec<String>,
    #[prop(into)]
    value: Signal<String>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <select
            class="px-3 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white \
                   focus:outline-none focus:ring-2 focus:ring-primary-500"
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value=ALL>{all_label}</option>
            {options
                .into_iter()
                .map(|option| view! { <option value=option.clone()>{option.clone()}</option> })
                .collect_view()}
        </select>
    }
}

/// Option list from a static table
pub fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
