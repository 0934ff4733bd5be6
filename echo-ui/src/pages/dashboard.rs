//! Dashboard Page
//!
//! "My Oasis": avatar and palette customization, achievements, and the
//! growth journey.

use echo::catalog::seed::{AVATAR_STAGES, COLOR_PALETTES};
use echo::session::{Oasis, GOALS, JOURNEY_PROGRESS, LEVEL, STAT_CARDS, STREAK_DAYS, WEEKLY_ACTIVITY};
use leptos::*;

use crate::components::ProgressBar;
use crate::state::use_global_state;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Customize,
    Achievements,
    Journey,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Customize, Tab::Achievements, Tab::Journey];

    fn label(&self) -> &'static str {
        match self {
            Tab::Customize => "🎨 Customize Bloom",
            Tab::Achievements => "🏆 Achievements",
            Tab::Journey => "📅 My Journey",
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "py-2 rounded-md bg-gray-700 text-white font-medium"
    } else {
        "py-2 rounded-md text-gray-400 hover:text-white"
    }
}

fn selectable_card(selected: bool) -> &'static str {
    if selected {
        "cursor-pointer rounded-xl p-4 text-center bg-primary/5 ring-2 ring-primary transition-all"
    } else {
        "cursor-pointer rounded-xl p-4 text-center bg-gray-700/50 hover:bg-gray-700 transition-all"
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    let oasis = create_rw_signal(Oasis::default());
    let (tab, set_tab) = create_signal(Tab::Customize);

    view! {
        <div class="container mx-auto px-4 py-8 space-y-8">
            // Welcome header
            <div class="text-center">
                <div class="relative inline-block mb-4">
                    <div class="h-24 w-24 rounded-full border-4 border-primary/20 bg-gradient-to-br from-primary to-success flex items-center justify-center text-4xl">
                        {move || oasis.with(|o| o.avatar().emoji)}
                    </div>
                    <span class="absolute -bottom-1 -right-1 h-8 w-8 rounded-full bg-accent text-gray-900 text-sm font-bold flex items-center justify-center">
                        {LEVEL}
                    </span>
                </div>
                <h1 class="text-3xl font-bold mb-2">"Welcome to Your Oasis"</h1>
                <p class="text-gray-400">"Your personal space for growth and reflection"</p>
                <div class="flex justify-center gap-2 mt-4 text-sm">
                    <span class="px-3 py-1 rounded-full bg-green-500/10 text-green-400 border border-green-500/20">
                        {format!("🌱 {} Seeds", state.starting_seeds())}
                    </span>
                    <span class="px-3 py-1 rounded-full bg-primary/10 text-primary border border-primary/20">
                        {format!("Level {}", LEVEL)}
                    </span>
                    <span class="px-3 py-1 rounded-full bg-accent/10 text-accent border border-accent/20">
                        {format!("🔥 {} Day Streak", STREAK_DAYS)}
                    </span>
                </div>
            </div>

            // Stat cards
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {STAT_CARDS
                    .iter()
                    .map(|card| view! {
                        <div class="bg-gray-800 rounded-xl p-6 hover:shadow-lg transition-shadow">
                            <div class="flex items-center justify-between mb-2">
                                <span class="text-sm text-gray-400">{card.label}</span>
                                <span>{card.icon}</span>
                            </div>
                            <div class="text-2xl font-bold">{card.value}</div>
                            <p class="text-xs text-gray-400 mt-1">{card.trend}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            // Tabs
            <div class="grid grid-cols-3 bg-gray-800 rounded-lg p-1">
                {Tab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class=move || tab_class(tab.get() == t)
                            on:click=move |_| set_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || match tab.get() {
                Tab::Customize => view! { <Customize oasis=oasis /> }.into_view(),
                Tab::Achievements => view! { <Achievements oasis=oasis /> }.into_view(),
                Tab::Journey => view! { <Journey /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Customize(oasis: RwSignal<Oasis>) -> impl IntoView {
    let state = use_global_state();

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-8">
            <h2 class="text-xl font-semibold">"✨ Bloom Avatar Customization"</h2>

            <div>
                <h3 class="font-semibold mb-4">"Choose Your Growth Stage"</h3>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {AVATAR_STAGES
                        .iter()
                        .map(|stage| view! {
                            <div
                                class=move || selectable_card(oasis.with(|o| o.avatar().id == stage.id))
                                on:click=move |_| {
                                    if let Some(result) = oasis.try_update(|o| o.choose_avatar(stage.id)) {
                                        state.report(result);
                                    }
                                }
                            >
                                <div class="text-4xl mb-2">{stage.emoji}</div>
                                <h4 class="font-medium text-sm">{stage.name}</h4>
                                <p class="text-xs text-gray-400 mt-1">{stage.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div>
                <h3 class="font-semibold mb-4">"Color Palette"</h3>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {COLOR_PALETTES
                        .iter()
                        .map(|palette| view! {
                            <div
                                class=move || selectable_card(oasis.with(|o| o.palette().id == palette.id))
                                on:click=move |_| {
                                    if let Some(result) = oasis.try_update(|o| o.choose_palette(palette.id)) {
                                        state.report(result);
                                    }
                                }
                            >
                                <div class="flex justify-center gap-1 mb-2">
                                    {palette
                                        .swatches
                                        .iter()
                                        .map(|swatch| view! {
                                            <div class=format!("h-6 w-6 rounded-full {}", swatch) />
                                        })
                                        .collect_view()}
                                </div>
                                <h4 class="font-medium text-sm">{palette.name}</h4>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Achievements(oasis: RwSignal<Oasis>) -> impl IntoView {
    let (achievements, completed) = oasis.with_untracked(|o| (o.achievements(), o.completed_achievements()));

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"🏆 Your Achievements"</h2>
                <span class="text-sm text-gray-400">
                    {format!("{} of {} completed", completed, achievements.len())}
                </span>
            </div>
            {achievements
                .iter()
                .map(|achievement| {
                    let row = if achievement.completed {
                        "flex items-center gap-4 p-4 rounded-lg border bg-green-500/5 border-green-500/20"
                    } else {
                        "flex items-center gap-4 p-4 rounded-lg border bg-gray-700/20 border-gray-700 opacity-70"
                    };
                    view! {
                        <div class=row>
                            <span class="text-2xl">{achievement.icon}</span>
                            <div class="flex-1">
                                <h4 class="font-semibold">{achievement.name}</h4>
                                <p class="text-sm text-gray-400">{achievement.description}</p>
                            </div>
                            <Show when=move || achievement.completed>
                                <span class="px-2 py-1 rounded-full text-xs bg-green-500/10 text-green-400 border border-green-500/20">
                                    "Completed"
                                </span>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn Journey() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-6">
            <h2 class="text-xl font-semibold">"📈 Your Growth Journey"</h2>

            <div class="space-y-2">
                <div class="flex justify-between text-sm">
                    <span class="font-medium">"Overall Progress"</span>
                    <span class="text-gray-400">{format!("{}%", JOURNEY_PROGRESS)}</span>
                </div>
                <ProgressBar percent=JOURNEY_PROGRESS />
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <div class="space-y-3">
                    <h4 class="font-semibold">"This Week"</h4>
                    {WEEKLY_ACTIVITY
                        .iter()
                        .map(|(label, count)| view! {
                            <div class="flex justify-between text-sm">
                                <span class="text-gray-400">{*label}</span>
                                <span class="font-medium">{*count}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="space-y-3">
                    <h4 class="font-semibold">"Goals"</h4>
                    {GOALS
                        .iter()
                        .map(|goal| view! {
                            <div class="flex items-center gap-2 text-sm text-gray-400">
                                <span class="h-2 w-2 rounded-full bg-primary" />
                                {*goal}
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
