//! FINN Page
//!
//! Chat with the companion, the wardrobe shop, the Bubble Drifter game and
//! guided activities. One [`FinnSession`] backs every tab so the Seeds
//! balance carries across them until the screen is left.

use chrono::Utc;
use echo::catalog::{seed::OUTFITS, ChatMessage, Sender};
use echo::session::{Affirmations, Breathing, Bubble, FinnSession, OutfitStatus};
use gloo_timers::callback::Interval;
use leptos::*;

use crate::state::{use_global_state, ReplyTimers};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Chat,
    Wardrobe,
    Games,
    Activities,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Chat, Tab::Wardrobe, Tab::Games, Tab::Activities];

    fn label(&self) -> &'static str {
        match self {
            Tab::Chat => "💬 Chat with FINN",
            Tab::Wardrobe => "🎨 Wardrobe",
            Tab::Games => "🎮 Mini-Games",
            Tab::Activities => "✨ Activities",
        }
    }
}

const SUGGESTIONS: &[(&str, &str, &str)] = &[
    ("💡", "Start a Stream", "Create a group chat about positivity"),
    ("🔒", "Move to Haven", "Continue this conversation privately"),
    ("🎮", "Play Mini-Game", "Try Bubble Drifter to earn Seeds"),
];

fn bubble_style(bubble: &Bubble) -> String {
    format!(
        "left: {:.0}px; top: {:.0}px; width: {:.0}px; height: {:.0}px",
        bubble.x, bubble.y, bubble.size, bubble.size
    )
}

/// FINN page component
#[component]
pub fn Finn() -> impl IntoView {
    let state = use_global_state();
    let seed = js_sys::Date::now() as u64;
    let finn = create_rw_signal(FinnSession::new(&state.companion(), seed, Utc::now()));
    let timers = ReplyTimers::new();
    let (tab, set_tab) = create_signal(Tab::Chat);

    on_cleanup(move || {
        timers.cancel_all();
        if let Some(discarded) = finn.try_update_untracked(|f| f.close()) {
            log::debug!("FINN session closed, {} replies discarded", discarded);
        }
    });

    view! {
        <div class="container mx-auto px-4 py-6 max-w-6xl space-y-6">
            // Header
            <div class="text-center space-y-2">
                <div class="relative inline-block">
                    <div class="h-24 w-24 rounded-full border-4 border-primary/20 bg-gradient-to-br from-primary to-accent flex items-center justify-center text-4xl">
                        "🐬"
                    </div>
                    <span class="absolute -top-2 -right-2 text-2xl">
                        {move || finn.with(|f| f.wearing().emoji)}
                    </span>
                </div>
                <h1 class="text-3xl font-bold">"Meet FINN"</h1>
                <p class="text-gray-400">"Your friendly AI dolphin companion"</p>
                <span class="inline-block px-3 py-1 rounded-full text-sm bg-green-500/10 text-green-400 border border-green-500/20">
                    {move || format!("🌱 {} Seeds Available", finn.with(|f| f.seeds()))}
                </span>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-1 bg-gray-800 rounded-lg p-1">
                {Tab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class=move || {
                                if tab.get() == t {
                                    "py-2 rounded-md bg-gray-700 text-white font-medium"
                                } else {
                                    "py-2 rounded-md text-gray-400 hover:text-white"
                                }
                            }
                            on:click=move |_| set_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || match tab.get() {
                Tab::Chat => view! { <ChatTab finn=finn timers=timers /> }.into_view(),
                Tab::Wardrobe => view! { <WardrobeTab finn=finn /> }.into_view(),
                Tab::Games => view! { <GamesTab finn=finn /> }.into_view(),
                Tab::Activities => view! { <ActivitiesTab /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ChatTab(finn: RwSignal<FinnSession>, timers: ReplyTimers) -> impl IntoView {
    let state = use_global_state();
    let (draft, set_draft) = create_signal(String::new());
    let scroller = create_node_ref::<html::Div>();

    create_effect(move |_| {
        finn.track();
        if let Some(el) = scroller.get() {
            request_animation_frame(move || el.set_scroll_top(el.scroll_height()));
        }
    });

    let send = move || {
        let text = draft.get_untracked();
        let Some(result) = finn.try_update(|f| f.send(&text, Utc::now())) else {
            return;
        };
        match result {
            Ok(reply) => {
                set_draft.set(String::new());
                if let Some(pending) = reply {
                    timers.arm(pending, move |token| {
                        finn.try_update(|f| f.deliver_reply(token, Utc::now()).is_some());
                    });
                }
            }
            Err(e) => state.report(Err(e)),
        }
    };

    view! {
        <div class="space-y-6">
            <div class="grid md:grid-cols-3 gap-4">
                {SUGGESTIONS
                    .iter()
                    .map(|(icon, title, text)| view! {
                        <div class="bg-gray-800 rounded-xl p-4 text-center border border-primary/20 hover:shadow-lg cursor-pointer">
                            <div class="text-2xl mb-2">{*icon}</div>
                            <h4 class="font-semibold text-sm mb-1">{*title}</h4>
                            <p class="text-xs text-gray-400">{*text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="bg-gray-800 rounded-xl h-[500px] flex flex-col p-4">
                <h2 class="flex items-center gap-2 font-semibold mb-3">
                    "🤖 Chat with FINN"
                    <span class="px-2 rounded-full text-xs bg-primary/10 text-primary border border-primary/20">
                        "🐬 AI Powered"
                    </span>
                </h2>

                <div node_ref=scroller class="flex-1 overflow-y-auto chat-scroll pr-2 space-y-4">
                    {move || {
                        finn.with(|f| {
                            f.messages()
                                .iter()
                                .cloned()
                                .map(|message| view! { <FinnLine message=message /> })
                                .collect_view()
                        })
                    }}
                </div>

                <div class="border-t border-gray-700 pt-4 mt-4">
                    <div class="flex gap-2">
                        <input
                            type="text"
                            placeholder="Share your feelings with FINN... 💙"
                            class="flex-1 px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-primary-500"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=move |ev: ev::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    send();
                                }
                            }
                        />
                        <button
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg"
                            aria-label="Send"
                            on:click=move |_| send()
                        >
                            "➤"
                        </button>
                    </div>
                    <p class="text-xs text-gray-500 mt-2 text-center">
                        "FINN is trained to provide emotional support and positive guidance 🌊"
                    </p>
                </div>
            </div>
        </div>
    }
}

/// One line of the FINN conversation, user messages right-aligned
#[component]
fn FinnLine(message: ChatMessage) -> impl IntoView {
    let mine = message.sender == Sender::You;
    let glyph = message.sender.avatar_glyph();
    let avatar = move || view! {
        <div class="h-8 w-8 shrink-0 rounded-full bg-gradient-to-br from-primary to-accent flex items-center justify-center">
            {glyph.clone()}
        </div>
    };

    view! {
        <div class={if mine { "flex gap-3 justify-end" } else { "flex gap-3 justify-start" }}>
            {(!mine).then(avatar.clone())}
            <div class={if mine {
                "max-w-[70%] p-3 rounded-lg bg-primary-600 text-white"
            } else {
                "max-w-[70%] p-3 rounded-lg bg-gray-700"
            }}>
                <p class="text-sm">{message.body}</p>
                <span class="text-xs opacity-70 mt-1 block">
                    {echo::catalog::relative_label(message.sent_at, Utc::now())}
                </span>
            </div>
            {mine.then(avatar)}
        </div>
    }
}

#[component]
fn WardrobeTab(finn: RwSignal<FinnSession>) -> impl IntoView {
    let state = use_global_state();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"🎨 FINN's Wardrobe Collection"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {OUTFITS
                    .iter()
                    .map(|outfit| {
                        let status = move || finn.with(|f| f.outfit_status(outfit));
                        let buy = move |_| {
                            if let Some(result) = finn.try_update(|f| f.buy_outfit(outfit.id)) {
                                state.report(result);
                            }
                        };
                        view! {
                            <div class=move || {
                                if status() == OutfitStatus::Wearing {
                                    "rounded-xl p-4 text-center space-y-3 bg-primary/5 ring-2 ring-primary"
                                } else {
                                    "rounded-xl p-4 text-center space-y-3 bg-gray-700/50 hover:bg-gray-700"
                                }
                            }>
                                <div class="text-4xl">{outfit.emoji}</div>
                                <h3 class="font-semibold">{outfit.name}</h3>
                                <p class="text-xs text-gray-400">{outfit.description}</p>
                                {move || match status() {
                                    OutfitStatus::Wearing => view! {
                                        <span class="inline-block px-3 py-1 rounded-full text-xs bg-green-500/10 text-green-400 border border-green-500/20">
                                            "Currently Wearing"
                                        </span>
                                    }.into_view(),
                                    s => view! {
                                        <button
                                            class={if matches!(s, OutfitStatus::Short(_)) {
                                                "px-4 py-2 rounded-lg bg-gray-600 opacity-50 cursor-not-allowed"
                                            } else {
                                                "px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700"
                                            }}
                                            disabled=matches!(s, OutfitStatus::Short(_))
                                            on:click=buy
                                        >
                                            {s.label(outfit)}
                                        </button>
                                    }.into_view(),
                                }}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn GamesTab(finn: RwSignal<FinnSession>) -> impl IntoView {
    let state = use_global_state();

    let start = move |_| {
        if let Some(result) = finn.try_update(|f| f.start_game()) {
            state.report(result);
        }
    };

    let pop = move |id: u32| {
        if let Some(result) = finn.try_update(|f| f.pop_bubble(id)) {
            state.report_quiet(result);
        }
    };

    let active = move || finn.with(|f| f.game().is_active());

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <h2 class="text-xl font-semibold">"🎮 Bubble Drifter"</h2>
                <div class="relative h-96 bg-gradient-to-b from-primary/10 to-accent/10 rounded-lg border border-gray-700 overflow-hidden">
                    {move || {
                        finn.with(|f| {
                            f.game()
                                .bubbles()
                                .iter()
                                .map(|bubble| {
                                    let id = bubble.id;
                                    view! {
                                        <div
                                            class="bubble bg-primary/30 rounded-full border-2 border-primary/20 hover:scale-110 transition-transform"
                                            style=bubble_style(bubble)
                                            on:click=move |_| pop(id)
                                        />
                                    }
                                })
                                .collect_view()
                        })
                    }}
                    <Show when=move || !active() && finn.with(|f| f.game().bubbles().is_empty())>
                        <div class="absolute inset-0 flex items-center justify-center text-center">
                            <div class="space-y-2">
                                <div class="text-4xl">"🫧"</div>
                                <p class="text-sm text-gray-400">"Click to pop bubbles!"</p>
                            </div>
                        </div>
                    </Show>
                </div>
                <div class="flex items-center justify-between">
                    <span class="text-sm font-medium">
                        {move || format!("Score: {}", finn.with(|f| f.game().score()))}
                    </span>
                    <button
                        class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 disabled:opacity-50"
                        disabled=active
                        on:click=start
                    >
                        {move || if active() { "Playing..." } else { "▶ Start Game" }}
                    </button>
                </div>
            </section>

            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <h2 class="text-xl font-semibold">"⭐ Shared Starlight"</h2>
                <div class="h-96 bg-gradient-to-b from-indigo-900/20 to-purple-900/20 rounded-lg border border-gray-700 flex items-center justify-center">
                    <div class="text-center space-y-4">
                        <div class="text-6xl">"⭐"</div>
                        <p class="text-sm text-gray-400">"Multiplayer breathing exercise"</p>
                        <span class="inline-block px-3 py-1 rounded-full text-xs bg-warning/10 text-warning border border-warning/20">
                            "Coming Soon"
                        </span>
                        <p class="text-xs text-gray-500">"Connect with friends for guided meditation"</p>
                    </div>
                </div>
                <button disabled class="w-full px-4 py-2 rounded-lg bg-gray-700 opacity-50 cursor-not-allowed">
                    "👥 Find Meditation Partners"
                </button>
            </section>
        </div>
    }
}

#[component]
fn ActivitiesTab() -> impl IntoView {
    let breathing = create_rw_signal(Breathing::default());
    let affirmations = create_rw_signal(Affirmations::default());
    let ticker = store_value(None::<Interval>);

    let stop_ticker = move || {
        ticker.try_update_value(|t| t.take());
    };

    on_cleanup(stop_ticker);

    let toggle = move |_| {
        if breathing.with(|b| b.is_running()) {
            breathing.update(|b| b.stop());
            stop_ticker();
        } else {
            breathing.update(|b| b.start());
            let interval = Interval::new(1000, move || {
                breathing.try_update(|b| b.tick());
            });
            ticker.set_value(Some(interval));
            log::debug!("breathing exercise started");
        }
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <section class="bg-gray-800 rounded-xl p-6 space-y-4 text-center">
                <h2 class="text-xl font-semibold text-left">"💗 Breathing Exercise"</h2>
                <div class=move || {
                    if breathing.with(|b| b.is_running()) {
                        "breathe h-32 w-32 mx-auto bg-gradient-to-br from-primary to-accent rounded-full flex items-center justify-center"
                    } else {
                        "h-32 w-32 mx-auto bg-gradient-to-br from-primary to-accent rounded-full flex items-center justify-center"
                    }
                }>
                    <span class="text-4xl">"🫁"</span>
                </div>
                <h3 class="font-semibold">"4-7-8 Breathing"</h3>
                {move || {
                    breathing.with(|b| {
                        if b.is_running() {
                            view! {
                                <div class="space-y-1">
                                    <p class="text-lg font-medium">{b.phase().prompt()}</p>
                                    <p class="text-3xl font-bold text-primary">{b.remaining()}</p>
                                    <p class="text-xs text-gray-500">{format!("Cycles completed: {}", b.cycles())}</p>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <p class="text-sm text-gray-400">"Follow FINN's guidance for calm breathing"</p>
                            }.into_view()
                        }
                    })
                }}
                <button
                    class="w-full px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700"
                    on:click=toggle
                >
                    {move || {
                        if breathing.with(|b| b.is_running()) {
                            "⏸ Stop Breathing Exercise"
                        } else {
                            "▶ Start Breathing Exercise"
                        }
                    }}
                </button>
            </section>

            <section class="bg-gray-800 rounded-xl p-6 space-y-4 text-center">
                <h2 class="text-xl font-semibold text-left">"✨ Positive Affirmations"</h2>
                <div class="p-6 bg-gray-700/50 rounded-lg">
                    <p class="text-lg font-medium italic">
                        {move || format!("\"{}\"", affirmations.with(|a| a.current()))}
                    </p>
                </div>
                <button
                    class="w-full px-4 py-2 rounded-lg border border-gray-600 hover:bg-gray-700"
                    on:click=move |_| {
                        affirmations.update(|a| {
                            a.advance();
                        })
                    }
                >
                    "🔄 New Affirmation"
                </button>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_style() {
        let bubble = Bubble {
            id: 3,
            x: 120.4,
            y: 200.6,
            size: 32.0,
        };
        assert_eq!(
            bubble_style(&bubble),
            "left: 120px; top: 201px; width: 32px; height: 32px"
        );
    }
}
