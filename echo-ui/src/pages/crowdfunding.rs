//! Crowdfunding Page
//!
//! Community-funded care campaigns with quick and custom support amounts.

use echo::catalog::seed::{CAMPAIGN_CATEGORIES, QUICK_SUPPORT_AMOUNTS};
use echo::catalog::{thousands, Campaign};
use echo::session::{parse_amount, CampaignBoard, COMMUNITY_STATS};
use echo::Selection;
use leptos::*;

use crate::components::filter_bar::options;
use crate::components::{EmptyState, FacetSelect, ProgressBar, SearchInput};
use crate::state::use_global_state;

/// Crowdfunding page component
#[component]
pub fn Crowdfunding() -> impl IntoView {
    let state = use_global_state();
    let board = create_rw_signal(CampaignBoard::new());

    let query = Signal::derive(move || board.with(|b| b.filter().query.clone()));
    let category = Signal::derive(move || {
        board.with(|b| b.filter().facets.category.as_value().to_string())
    });

    let stats = [
        ("💲", format!("${}", thousands(COMMUNITY_STATS.total_raised)), "Total Raised", "text-green-400"),
        ("👥", thousands(COMMUNITY_STATS.supporters), "Supporters", "text-primary"),
        ("🎯", thousands(COMMUNITY_STATS.lives_helped), "Lives Helped", "text-accent"),
        ("💛", thousands(COMMUNITY_STATS.active_campaigns), "Active Campaigns", "text-yellow-400"),
    ];

    view! {
        <div class="container mx-auto px-4 py-6 max-w-6xl space-y-6">
            <div class="text-center space-y-4">
                <h1 class="text-3xl font-bold">"Community Support"</h1>
                <p class="text-gray-400 max-w-2xl mx-auto">
                    "Help community members access mental health care through verified crowdfunding campaigns"
                </p>
                <button
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg transition-colors"
                    on:click=move |_| state.show_success("Campaign creation opens after identity verification 🌱")
                >
                    "➕ Create Campaign"
                </button>
            </div>

            <div class="bg-gray-800 rounded-xl p-4">
                <div class="flex gap-4 flex-col md:flex-row">
                    <SearchInput
                        placeholder="Search campaigns..."
                        value=query
                        on_input=move |v| board.update(|b| b.set_query(v))
                    />
                    <FacetSelect
                        all_label="All Categories"
                        options=options(CAMPAIGN_CATEGORIES)
                        value=category
                        on_change=move |v| board.update(|b| b.set_category(Selection::from_value(&v)))
                    />
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                {stats
                    .into_iter()
                    .map(|(icon, value, label, tint)| view! {
                        <div class="bg-gray-800 rounded-xl p-4 text-center space-y-2">
                            <div class=format!("text-3xl {}", tint)>{icon}</div>
                            <div class="text-2xl font-bold">{value}</div>
                            <div class="text-sm text-gray-400">{label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="space-y-6">
                {move || {
                    board
                        .with(|b| b.visible().into_iter().cloned().collect::<Vec<_>>())
                        .into_iter()
                        .map(|campaign| view! { <CampaignCard campaign=campaign board=board /> })
                        .collect_view()
                }}
            </div>

            <Show when=move || board.with(|b| b.visible().is_empty())>
                <EmptyState
                    icon="💚"
                    title="No campaigns found"
                    hint="Try adjusting your search criteria or create a new campaign"
                    on_clear=move || board.update(|b| b.clear_filters())
                />
            </Show>

            <div class="bg-primary/5 border border-primary/20 rounded-xl p-6 text-center space-y-4">
                <div class="font-semibold text-primary">"🛡 Verified & Secure"</div>
                <p class="text-sm text-gray-400 max-w-2xl mx-auto">
                    "All campaigns go through our eKYC verification process. Funds are held in escrow and \
                     released directly to healthcare providers to ensure proper use for mental health treatment."
                </p>
                <div class="flex items-center justify-center gap-6 text-xs text-gray-400">
                    <span>"✓ Identity Verified"</span>
                    <span>"✓ Healthcare Provider Direct Pay"</span>
                    <span>"✓ Secure Payment Processing"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CampaignCard(campaign: Campaign, board: RwSignal<CampaignBoard>) -> impl IntoView {
    let state = use_global_state();
    let id = campaign.id;
    let verified = campaign.verified;
    let urgent = campaign.urgent;
    let percent = campaign.progress_percent().round() as u32;

    let (custom_open, set_custom_open) = create_signal(false);
    let (custom, set_custom) = create_signal(String::new());

    let support = move |amount: u32| {
        if let Some(result) = board.try_update(|b| b.support(id, amount)) {
            state.report(result);
        }
    };

    let give_custom = move || match parse_amount(&custom.get_untracked()) {
        Ok(amount) => {
            support(amount);
            set_custom.set(String::new());
            set_custom_open.set(false);
        }
        Err(e) => state.report(Err(e)),
    };

    let share = move |_| {
        if let Some(result) = board.try_with(|b| b.share(id)) {
            state.report(result);
        }
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-4 hover:shadow-lg transition-all duration-300">
            <div class="flex items-start justify-between">
                <div class="flex items-start gap-3">
                    <div class="h-12 w-12 rounded-full bg-gradient-to-br from-primary to-success flex items-center justify-center font-semibold">
                        {campaign.creator_initial()}
                    </div>
                    <div class="space-y-1">
                        <div class="flex items-center gap-2">
                            <h3 class="font-semibold text-lg">{campaign.title.clone()}</h3>
                            <Show when=move || verified>
                                <span class="text-green-400">"✔"</span>
                            </Show>
                            <Show when=move || urgent>
                                <span class="px-2 py-0.5 text-xs rounded-full bg-red-500/10 text-red-400 border border-red-500/20">
                                    "Urgent"
                                </span>
                            </Show>
                        </div>
                        <p class="text-sm text-gray-400">{format!("by {}", campaign.created_by)}</p>
                        <span class="px-2 py-0.5 text-xs border border-gray-600 rounded-full">
                            {campaign.category.clone()}
                        </span>
                    </div>
                </div>
                <button class="p-2 rounded-lg hover:bg-gray-700" aria-label="Share" on:click=share>
                    "🔗"
                </button>
            </div>

            <p>{campaign.description.clone()}</p>
            <div class="bg-gray-700/50 p-4 rounded-lg">
                <p class="text-sm text-gray-400 italic">{format!("\"{}\"", campaign.story)}</p>
            </div>

            <div class="space-y-2">
                <div class="flex justify-between items-center text-sm">
                    <span class="text-gray-400">"Progress"</span>
                    <span class="font-medium">
                        {format!(
                            "${} of ${}",
                            thousands(campaign.raised_amount),
                            thousands(campaign.goal_amount)
                        )}
                    </span>
                </div>
                <ProgressBar percent=percent fill="bg-green-500" />
                <div class="flex justify-between text-xs text-gray-400">
                    <span>{format!("{}% funded", percent)}</span>
                    <span>{format!("{} days left", campaign.days_left)}</span>
                </div>
            </div>

            <div class="flex items-center gap-6 text-sm text-gray-400">
                <span>{format!("👥 {} supporters", campaign.supporters_count)}</span>
                <span>{format!("⏱ {} days remaining", campaign.days_left)}</span>
            </div>

            <div class="flex gap-3 pt-2">
                {QUICK_SUPPORT_AMOUNTS
                    .iter()
                    .enumerate()
                    .map(|(i, &amount)| {
                        let class = if i == 0 {
                            "flex-1 px-4 py-2 rounded-lg bg-green-600 hover:bg-green-700"
                        } else {
                            "flex-1 px-4 py-2 rounded-lg border border-gray-600 hover:bg-gray-700"
                        };
                        view! {
                            <button class=class on:click=move |_| support(amount)>
                                {format!("Support ${}", amount)}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="px-3 py-2 rounded-lg text-gray-400 hover:text-white"
                    on:click=move |_| set_custom_open.update(|open| *open = !*open)
                >
                    "Custom Amount"
                </button>
            </div>

            <Show when=move || custom_open.get()>
                <div class="flex gap-2">
                    <input
                        type="text"
                        inputmode="numeric"
                        placeholder="$ Amount"
                        class="flex-1 px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-primary-500"
                        prop:value=move || custom.get()
                        on:input=move |ev| set_custom.set(event_target_value(&ev))
                        on:keydown=move |ev: ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                give_custom();
                            }
                        }
                    />
                    <button
                        class="px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg"
                        on:click=move |_| give_custom()
                    >
                        "💚 Give"
                    </button>
                </div>
            </Show>
        </div>
    }
}
