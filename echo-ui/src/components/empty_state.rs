use leptos::*;

/// Shown when a filtered list comes back empty
#[component]
pub fn EmptyState<F>(
    icon: &'static str,
    title: &'static str,
    hint: &'static str,
    on_clear: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class="bg-gray-800 rounded-xl p-12 text-center">
            <div class="text-5xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-gray-400 mb-6">{hint}</p>
            <button
                class="px-4 py-2 border border-gray-600 rounded-lg hover:bg-gray-700 transition-colors"
                on:click=move |_| on_clear()
            >
                "Clear Filters"
            </button>
        </div>
    }
}
