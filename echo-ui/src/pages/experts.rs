//! Experts Page
//!
//! Searchable directory of mental health professionals.

use echo::catalog::seed::{LOCATION_OPTIONS, SPECIALTY_OPTIONS};
use echo::catalog::{Availability, Expert};
use echo::session::{ConnectMode, ExpertDirectory};
use echo::Selection;
use leptos::*;

use crate::components::filter_bar::options;
use crate::components::{EmptyState, FacetSelect, SearchInput};
use crate::state::use_global_state;

fn availability_dot(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "bg-green-400",
        Availability::Busy => "bg-yellow-400",
        Availability::Offline => "bg-gray-500",
    }
}

/// Experts page component
#[component]
pub fn Experts() -> impl IntoView {
    let directory = create_rw_signal(ExpertDirectory::new());

    let query = Signal::derive(move || directory.with(|d| d.filter().query.clone()));
    let specialty = Signal::derive(move || {
        directory.with(|d| d.filter().facets.specialty.as_value().to_string())
    });
    let location = Signal::derive(move || {
        directory.with(|d| d.filter().facets.location.as_value().to_string())
    });
    let visible = move || directory.with(|d| d.visible().into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="container mx-auto px-4 py-6 max-w-7xl space-y-6">
            <div class="text-center space-y-4">
                <h1 class="text-3xl font-bold">"Expert Network"</h1>
                <p class="text-gray-400 max-w-2xl mx-auto">
                    "Connect with verified mental health professionals for personalized support and guidance"
                </p>
            </div>

            // Search and filters
            <div class="bg-gray-800 rounded-xl p-6 space-y-4">
                <div class="flex gap-4 flex-col md:flex-row">
                    <SearchInput
                        placeholder="Search by name or specialty..."
                        value=query
                        on_input=move |v| directory.update(|d| d.set_query(v))
                    />
                    <FacetSelect
                        all_label="All Specialties"
                        options=options(SPECIALTY_OPTIONS)
                        value=specialty
                        on_change=move |v| directory.update(|d| d.set_specialty(Selection::from_value(&v)))
                    />
                    <FacetSelect
                        all_label="All Locations"
                        options=options(LOCATION_OPTIONS)
                        value=location
                        on_change=move |v| directory.update(|d| d.set_location(Selection::from_value(&v)))
                    />
                </div>
                <div class="flex items-center justify-between text-sm text-gray-400">
                    <span>{move || format!("Found {} experts", directory.with(|d| d.visible().len()))}</span>
                    <span>"🛡 All experts are verified and licensed"</span>
                </div>
            </div>

            <div class="grid gap-6">
                {move || {
                    visible()
                        .into_iter()
                        .map(|expert| view! { <ExpertCard expert=expert directory=directory /> })
                        .collect_view()
                }}
            </div>

            <Show when=move || directory.with(|d| d.visible().is_empty())>
                <EmptyState
                    icon="🔍"
                    title="No experts found"
                    hint="Try adjusting your search criteria or browse all available experts"
                    on_clear=move || directory.update(|d| d.clear_filters())
                />
            </Show>

            <div class="bg-primary/5 border border-primary/20 rounded-xl p-6 text-center space-y-4">
                <div class="font-semibold text-primary">"🛡 Secure & Private"</div>
                <p class="text-sm text-gray-400 max-w-2xl mx-auto">
                    "All conversations with experts are conducted through our secure Haven platform with \
                     end-to-end encryption. Your privacy and safety are our top priorities."
                </p>
                <div class="flex items-center justify-center gap-6 text-xs text-gray-400">
                    <span>"✓ Licensed Professionals"</span>
                    <span>"✓ Encrypted Communications"</span>
                    <span>"✓ 24/7 Crisis Support"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExpertCard(expert: Expert, directory: RwSignal<ExpertDirectory>) -> impl IntoView {
    let state = use_global_state();
    let id = expert.id;
    let offline = !expert.availability.accepts_sessions();
    let verified = expert.verified;
    let dot = format!("h-2 w-2 rounded-full {}", availability_dot(expert.availability));

    let connect = move |mode: ConnectMode| {
        if let Some(result) = directory.try_with(|d| d.connect(id, mode)) {
            state.report(result);
        }
    };

    let action = move |mode: ConnectMode, label: &'static str, primary: bool| {
        let class = if primary {
            "w-full px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 disabled:opacity-50 disabled:cursor-not-allowed"
        } else {
            "w-full px-4 py-2 rounded-lg border border-gray-600 hover:bg-gray-700 disabled:opacity-50 disabled:cursor-not-allowed"
        };
        view! {
            <button class=class disabled=offline on:click=move |_| connect(mode)>
                {label}
            </button>
        }
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6 hover:shadow-lg transition-shadow">
            <div class="flex flex-col lg:flex-row gap-6">
                <div class="flex gap-4 flex-1">
                    <div class="relative">
                        <div class="h-16 w-16 rounded-full bg-gradient-to-br from-primary to-success flex items-center justify-center text-lg font-semibold">
                            {expert.initials()}
                        </div>
                        <Show when=move || verified>
                            <span class="absolute -bottom-1 -right-1 text-green-400">"✔"</span>
                        </Show>
                    </div>

                    <div class="flex-1 space-y-2">
                        <div class="flex items-start justify-between">
                            <div>
                                <h3 class="font-semibold text-lg">{expert.name.clone()}</h3>
                                <p class="text-gray-400">{expert.title.clone()}</p>
                            </div>
                            <div class="text-right">
                                <div class="flex items-center gap-1">
                                    <span class="text-yellow-400">"★"</span>
                                    <span class="font-medium">{format!("{:.1}", expert.rating)}</span>
                                    <span class="text-gray-400 text-sm">{format!("({})", expert.review_count)}</span>
                                </div>
                                <div class="flex items-center justify-end gap-1 mt-1">
                                    <span class=dot />
                                    <span class="text-xs text-gray-400">{expert.availability.label()}</span>
                                </div>
                            </div>
                        </div>

                        <div class="flex flex-wrap gap-2">
                            {expert
                                .specialties
                                .iter()
                                .map(|s| view! {
                                    <span class="px-2 py-0.5 text-xs border border-gray-600 rounded-full">{s.clone()}</span>
                                })
                                .collect_view()}
                        </div>

                        <p class="text-sm text-gray-400">{expert.description.clone()}</p>

                        <div class="flex items-center gap-4 text-xs text-gray-400">
                            <span>{format!("📍 {}", expert.location)}</span>
                            <span>{format!("⏱ {}", expert.response_time)}</span>
                            <span>{format!("${}/session", expert.price)}</span>
                        </div>

                        <div class="flex items-center gap-2">
                            <span class="text-xs text-gray-400">"Languages:"</span>
                            {expert
                                .languages
                                .iter()
                                .map(|lang| view! {
                                    <span class="px-2 py-0.5 text-xs bg-gray-700 rounded-full">{lang.clone()}</span>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="flex flex-col gap-3 lg:w-48">
                    {action(ConnectMode::Chat, "💬 Haven Chat", true)}
                    {action(ConnectMode::Call, "📞 Voice Call", false)}
                    {action(ConnectMode::Video, "🎥 Video Session", false)}
                    <button class="w-full text-xs text-gray-400 hover:text-white">"📅 Schedule Later"</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_dot_is_muted() {
        assert_eq!(availability_dot(Availability::Offline), "bg-gray-500");
        assert_ne!(
            availability_dot(Availability::Available),
            availability_dot(Availability::Busy)
        );
    }
}
