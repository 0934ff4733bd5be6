//! Chat message row
//!
//! Shared by the world chat and the FINN conversation. Reactions are only
//! interactive when the page passes `on_react`.

use chrono::Utc;
use echo::catalog::{relative_label, seed::QUICK_REACTIONS, ChatMessage, Sender};
use leptos::*;

fn avatar_class(sender: &Sender) -> &'static str {
    match sender {
        Sender::Finn => "bg-gradient-to-br from-primary to-accent text-white",
        Sender::You => "bg-gradient-to-br from-success to-primary text-white",
        Sender::Member(_) => "bg-gradient-to-br from-secondary to-muted text-gray-900",
    }
}

#[component]
pub fn MessageRow(
    message: ChatMessage,
    #[prop(optional)]
    on_react: Option<Callback<(u64, String)>>,
) -> impl IntoView {
    let id = message.id;
    let from_finn = message.is_from_finn();
    let row_class = if from_finn {
        "flex gap-3 p-4 rounded-lg bg-primary/5 border border-primary/20 group"
    } else {
        "flex gap-3 p-4 rounded-lg hover:bg-gray-700/20 transition-colors group"
    };

    view! {
        <div class=row_class>
            <div class=format!(
                "h-10 w-10 shrink-0 rounded-full flex items-center justify-center font-semibold {}",
                avatar_class(&message.sender)
            )>
                {message.sender.avatar_glyph()}
            </div>
            <div class="flex-1 space-y-2">
                <div class="flex items-center gap-2">
                    <span class={if from_finn { "font-semibold text-sm text-primary" } else { "font-semibold text-sm" }}>
                        {message.sender.display_name().to_string()}
                    </span>
                    <Show when=move || from_finn>
                        <span class="px-2 rounded-full text-xs bg-primary/10 text-primary border border-primary/20">
                            "AI Assistant"
                        </span>
                    </Show>
                    <span class="text-xs text-gray-500">
                        {relative_label(message.sent_at, Utc::now())}
                    </span>
                </div>
                <p class="text-sm leading-relaxed">{message.body.clone()}</p>

                {on_react.map(|react| view! {
                    <div class="flex flex-wrap gap-1">
                        {message
                            .reactions
                            .iter()
                            .map(|reaction| {
                                let emoji = reaction.emoji.clone();
                                view! {
                                    <button
                                        class="h-6 px-2 text-xs rounded-md border border-gray-600 hover:bg-gray-700"
                                        on:click=move |_| react.call((id, emoji.clone()))
                                    >
                                        {format!("{} {}", reaction.emoji, reaction.count)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-1 opacity-0 group-hover:opacity-100 transition-opacity">
                        {QUICK_REACTIONS
                            .iter()
                            .map(|emoji| view! {
                                <button
                                    class="h-6 w-6 text-xs rounded hover:bg-gray-700"
                                    on:click=move |_| react.call((id, emoji.to_string()))
                                >
                                    {*emoji}
                                </button>
                            })
                            .collect_view()}
                    </div>
                })}
            </div>
        </div>
    }
}
