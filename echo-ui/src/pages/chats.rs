//! Chats Page
//!
//! World chat with reactions and FINN replies, plus the static Streams and
//! Haven tabs.

use chrono::Utc;
use echo::catalog::seed::{MEMBERS_ONLINE, STREAMS};
use echo::session::WorldChat;
use leptos::*;

use crate::components::MessageRow;
use crate::state::{use_global_state, ReplyTimers};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Space {
    World,
    Streams,
    Haven,
}

impl Space {
    const ALL: [Space; 3] = [Space::World, Space::Streams, Space::Haven];

    fn label(&self) -> &'static str {
        match self {
            Space::World => "🌍 World Chat",
            Space::Streams => "👥 Streams",
            Space::Haven => "🛡 Haven",
        }
    }

    fn badge(&self) -> &'static str {
        match self {
            Space::World => "Live",
            Space::Streams => "5 Active",
            Space::Haven => "Private",
        }
    }
}

/// Chats page component
#[component]
pub fn Chats() -> impl IntoView {
    let (space, set_space) = create_signal(Space::World);

    view! {
        <div class="container mx-auto px-4 py-6 max-w-6xl space-y-6">
            <div class="text-center space-y-2">
                <h1 class="text-3xl font-bold">"Safe Connections"</h1>
                <p class="text-gray-400">"Choose your space for meaningful conversations"</p>
            </div>

            <div class="bg-gray-800 rounded-xl flex flex-col h-[600px]">
                <div class="grid grid-cols-3 gap-1 p-3 border-b border-gray-700">
                    {Space::ALL
                        .into_iter()
                        .map(|s| view! {
                            <button
                                class=move || {
                                    if space.get() == s {
                                        "py-2 rounded-md bg-gray-700 text-white font-medium"
                                    } else {
                                        "py-2 rounded-md text-gray-400 hover:text-white"
                                    }
                                }
                                on:click=move |_| set_space.set(s)
                            >
                                {s.label()}
                                <span class="ml-2 px-2 rounded-full text-xs bg-primary/10 text-primary">
                                    {s.badge()}
                                </span>
                            </button>
                        })
                        .collect_view()}
                </div>

                {move || match space.get() {
                    Space::World => view! { <WorldChatPanel /> }.into_view(),
                    Space::Streams => view! { <StreamsPanel /> }.into_view(),
                    Space::Haven => view! { <HavenPanel /> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn WorldChatPanel() -> impl IntoView {
    let state = use_global_state();
    let chat = create_rw_signal(WorldChat::new(&state.companion(), Utc::now()));
    let timers = ReplyTimers::new();
    let (draft, set_draft) = create_signal(String::new());
    let scroller = create_node_ref::<html::Div>();

    on_cleanup(move || {
        timers.cancel_all();
        if let Some(discarded) = chat.try_update_untracked(|c| c.close()) {
            log::debug!("world chat closed, {} replies discarded", discarded);
        }
    });

    // Keep the newest message in view
    create_effect(move |_| {
        chat.track();
        if let Some(el) = scroller.get() {
            request_animation_frame(move || el.set_scroll_top(el.scroll_height()));
        }
    });

    let send = move || {
        let text = draft.get_untracked();
        let Some(result) = chat.try_update(|c| c.send(&text, Utc::now())) else {
            return;
        };
        match result {
            Ok(outcome) => {
                set_draft.set(String::new());
                state.notify(&outcome.notice);
                if let Some(pending) = outcome.reply {
                    timers.arm(pending, move |token| {
                        let delivered = chat
                            .try_update(|c| c.deliver_reply(token, Utc::now()).is_some())
                            .unwrap_or(false);
                        log::debug!("FINN reply {:?} delivered: {}", token, delivered);
                    });
                }
            }
            Err(e) => state.report(Err(e)),
        }
    };

    let react = Callback::new(move |(id, emoji): (u64, String)| {
        if let Some(result) = chat.try_update(|c| c.react(id, &emoji)) {
            state.report(result);
        }
    });

    view! {
        <div class="flex-1 flex flex-col p-4 min-h-0">
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center gap-2">
                    <span class="h-2 w-2 bg-green-400 rounded-full animate-pulse" />
                    <span class="text-sm text-gray-400">{format!("{} members online", MEMBERS_ONLINE)}</span>
                </div>
                <button class="px-3 py-1 text-sm border border-gray-600 rounded-lg hover:bg-gray-700">
                    "➕ Invite"
                </button>
            </div>

            <div node_ref=scroller class="flex-1 overflow-y-auto chat-scroll pr-2 space-y-2">
                {move || {
                    chat.with(|c| {
                        c.messages()
                            .iter()
                            .cloned()
                            .map(|message| view! { <MessageRow message=message on_react=react /> })
                            .collect_view()
                    })
                }}
            </div>

            <div class="border-t border-gray-700 pt-4 mt-4">
                <div class="flex gap-2">
                    <input
                        type="text"
                        placeholder="Share something positive... 🌱"
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
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg transition-colors"
                        aria-label="Send"
                        on:click=move |_| send()
                    >
                        "➤"
                    </button>
                </div>
                <div class="flex justify-between mt-2 text-xs text-gray-500">
                    <span>"FINN is monitoring for safety 🐬"</span>
                    <span>"Press Enter to send"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StreamsPanel() -> impl IntoView {
    view! {
        <div class="flex-1 overflow-y-auto p-4 text-center py-12 space-y-4">
            <div class="text-5xl">"👥"</div>
            <h3 class="font-semibold">"Join a Stream"</h3>
            <p class="text-sm text-gray-400">"Connect with focused groups around specific topics"</p>
            <div class="grid gap-3 max-w-md mx-auto">
                {STREAMS
                    .iter()
                    .map(|stream| view! {
                        <div class="p-3 bg-gray-700/50 rounded-lg flex items-center justify-between hover:bg-gray-700 cursor-pointer">
                            <div class="text-left">
                                <h4 class="font-medium text-sm">{stream.name}</h4>
                                <p class="text-xs text-gray-400">{stream.topic}</p>
                            </div>
                            <span class="px-2 py-0.5 text-xs border border-gray-600 rounded-full">
                                {format!("{} active", stream.members)}
                            </span>
                        </div>
                    })
                    .collect_view()}
            </div>
            <button class="mt-4 px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg">
                "➕ Create New Stream"
            </button>
        </div>
    }
}

#[component]
fn HavenPanel() -> impl IntoView {
    view! {
        <div class="flex-1 p-4 text-center py-12 space-y-4">
            <div class="text-5xl">"🛡"</div>
            <h3 class="font-semibold">"Private Haven"</h3>
            <p class="text-sm text-gray-400">"Encrypted, one-on-one conversations for deeper support"</p>
            <div class="max-w-md mx-auto p-4 border border-green-500/20 rounded-xl space-y-2">
                <div class="h-8 w-8 mx-auto rounded-full bg-gradient-to-br from-primary to-accent flex items-center justify-center">
                    "🐬"
                </div>
                <h4 class="font-medium text-sm">"FINN AI Assistant"</h4>
                <p class="text-xs text-gray-400">"Available 24/7 for support"</p>
                <button class="px-3 py-1 text-sm border border-gray-600 rounded-lg hover:bg-gray-700">
                    "Start Private Chat"
                </button>
            </div>
            <p class="text-xs text-gray-500 max-w-sm mx-auto">
                "Haven chats are end-to-end encrypted and completely private. \
                 Only you and your conversation partner can see the messages."
            </p>
        </div>
    }
}
