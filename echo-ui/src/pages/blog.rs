//! Blog Page
//!
//! Bloom Stories: a community feed with a story composer, tag filtering and
//! Seeds rewards for likes, comments and shares.

use chrono::Utc;
use echo::catalog::relative_label;
use echo::session::{BlogFeed, FEED_STATS, PUBLISH_REWARD};
use echo::{ActionResult, BlogPost, Notice, Selection};
use leptos::*;

use crate::components::EmptyState;
use crate::state::use_global_state;

fn chip_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1 text-xs rounded-full bg-primary-600 text-white"
    } else {
        "px-3 py-1 text-xs rounded-full bg-gray-700 text-gray-300 hover:bg-gray-600"
    }
}

/// Blog page component
#[component]
pub fn Blog() -> impl IntoView {
    let state = use_global_state();
    let feed = create_rw_signal(BlogFeed::new(state.starting_seeds(), Utc::now()));

    let stats = [
        (FEED_STATS.stories_shared, "Stories Shared", "text-primary"),
        (FEED_STATS.seeds_earned, "Seeds Earned", "text-green-400"),
        (FEED_STATS.positive_impact, "Positive Impact", "text-accent"),
    ];

    let tags = move || {
        feed.with(|f| f.tags().into_iter().map(String::from).collect::<Vec<_>>())
    };
    let selected_tag = move || feed.with(|f| f.filter().facets.tag.clone());

    view! {
        <div class="container mx-auto px-4 py-6 max-w-4xl space-y-6">
            <div class="text-center space-y-4">
                <h1 class="text-4xl font-bold">"✏ Bloom Stories"</h1>
                <p class="text-lg text-gray-400 max-w-2xl mx-auto">
                    "Share your journey, inspire others, and earn Seeds through meaningful connections. \
                     Every story has the power to help someone bloom."
                </p>
                <div class="flex justify-center items-center gap-4">
                    <button
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg transition-colors"
                        on:click=move |_| feed.update(|f| f.toggle_composer())
                    >
                        "➕ Share Your Story"
                    </button>
                    <span class="px-3 py-1 rounded-full bg-green-500/10 text-green-400 text-sm font-medium">
                        {move || format!("🌱 {} Seeds", feed.with(|f| f.seeds()))}
                    </span>
                </div>
            </div>

            <Show when=move || feed.with(|f| f.is_composing())>
                <Composer feed=feed />
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {stats
                    .into_iter()
                    .map(|(value, label, tint)| view! {
                        <div class="bg-gray-800 rounded-xl p-4 text-center">
                            <div class=format!("text-2xl font-bold {}", tint)>{value}</div>
                            <div class="text-sm text-gray-400">{label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>

            // Tag filter
            <div class="flex flex-wrap gap-2">
                <button
                    class=move || chip_class(selected_tag().is_all())
                    on:click=move |_| feed.update(|f| f.set_tag(Selection::All))
                >
                    "All Stories"
                </button>
                {move || {
                    tags()
                        .into_iter()
                        .map(|tag| {
                            let value = tag.clone();
                            let active = tag.clone();
                            view! {
                                <button
                                    class=move || chip_class(selected_tag() == Selection::only(active.clone()))
                                    on:click=move |_| feed.update(|f| f.set_tag(Selection::only(value.clone())))
                                >
                                    {format!("#{}", tag)}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="space-y-6">
                {move || {
                    feed.with(|f| f.visible().into_iter().cloned().collect::<Vec<_>>())
                        .into_iter()
                        .map(|post| view! { <StoryCard post=post feed=feed /> })
                        .collect_view()
                }}
            </div>

            <Show when=move || feed.with(|f| f.visible().is_empty())>
                <EmptyState
                    icon="🌸"
                    title="No stories with this tag yet"
                    hint="Pick another tag or be the first to share a story about it"
                    on_clear=move || feed.update(|f| f.clear_filters())
                />
            </Show>

            <div class="text-center">
                <button class="px-8 py-2 border border-gray-600 rounded-lg hover:bg-gray-700">
                    "Load More Stories"
                </button>
            </div>
        </div>
    }
}

#[component]
fn Composer(feed: RwSignal<BlogFeed>) -> impl IntoView {
    let state = use_global_state();

    let publish = move |_| {
        if let Some(result) = feed.try_update(|f| f.publish(Utc::now())) {
            state.report(result);
        }
    };

    let input_class = "w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white \
                       placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-primary-500";

    view! {
        <div class="bg-gray-800 border border-primary/20 rounded-xl p-6 space-y-4 shadow-lg animate-slide-in">
            <h2 class="text-lg font-semibold">"✨ Share Your Bloom Story"</h2>
            <input
                type="text"
                placeholder="Give your story a meaningful title..."
                class=format!("{} text-lg font-medium", input_class)
                prop:value=move || feed.with(|f| f.draft().title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    feed.update(|f| f.draft_mut().title = value);
                }
            />
            <textarea
                placeholder="Share your journey, insights, or words of encouragement. Your story might be exactly what someone needs to hear today..."
                class=format!("{} min-h-32", input_class)
                prop:value=move || feed.with(|f| f.draft().content.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    feed.update(|f| f.draft_mut().content = value);
                }
            />
            <input
                type="text"
                placeholder="Tags (e.g., anxiety, recovery, mindfulness, self-care)"
                class=input_class
                prop:value=move || feed.with(|f| f.draft().tags.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    feed.update(|f| f.draft_mut().tags = value);
                }
            />
            <div class="flex justify-between items-center">
                <div class="text-sm text-gray-400">
                    {format!("🌱 Earn {} Seeds for posting + Seeds from likes and comments!", PUBLISH_REWARD)}
                </div>
                <div class="flex gap-2">
                    <button
                        class="px-4 py-2 border border-gray-600 rounded-lg hover:bg-gray-700"
                        on:click=move |_| feed.update(|f| f.cancel_draft())
                    >
                        "Cancel"
                    </button>
                    <button class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg" on:click=publish>
                        "Publish Story"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StoryCard(post: BlogPost, feed: RwSignal<BlogFeed>) -> impl IntoView {
    let state = use_global_state();
    let id = post.id;
    let verified = post.author.verified;

    let act = move |op: fn(&mut BlogFeed, u32) -> ActionResult<Notice>| {
        if let Some(result) = feed.try_update(|f| op(f, id)) {
            state.report(result);
        }
    };
    let liked = move || feed.with(|f| f.has_liked(id));

    view! {
        <article class="bg-gray-800 rounded-xl p-6 space-y-4 hover:shadow-lg transition-all duration-300">
            <div class="flex justify-between items-start">
                <div class="flex items-center gap-3">
                    <div class="h-10 w-10 rounded-full bg-gradient-to-br from-primary to-accent flex items-center justify-center text-sm font-semibold">
                        {post.author_initials()}
                    </div>
                    <div>
                        <div class="flex items-center gap-2">
                            <span class="font-semibold">{post.author.name.clone()}</span>
                            <Show when=move || verified>
                                <span class="px-2 py-0.5 text-xs rounded-full bg-accent/10 text-accent">"✓ Verified"</span>
                            </Show>
                            <span class="px-2 py-0.5 text-xs rounded-full bg-primary/10 text-primary">
                                {format!("Level {}", post.author.level)}
                            </span>
                        </div>
                        <div class="text-sm text-gray-400">{relative_label(post.posted_at, Utc::now())}</div>
                    </div>
                </div>
                <span class="text-sm font-medium text-green-400">{format!("🌱 +{}", post.seeds_earned)}</span>
            </div>

            <div>
                <h2 class="text-xl font-bold mb-3">{post.title.clone()}</h2>
                <p class="text-gray-400 leading-relaxed">{post.content.clone()}</p>
            </div>

            <div class="flex flex-wrap gap-2">
                {post
                    .tags
                    .iter()
                    .map(|tag| view! {
                        <span class="px-2 py-0.5 text-xs rounded-full bg-gray-700">{format!("#{}", tag)}</span>
                    })
                    .collect_view()}
            </div>

            <div class="border-t border-gray-700 pt-3 flex justify-between items-center">
                <div class="flex gap-4 text-sm text-gray-400">
                    <button
                        class={move || if liked() { "text-pink-400" } else { "hover:text-pink-400" }}
                        on:click=move |_| act(BlogFeed::like)
                    >
                        {format!("💗 {}", post.likes)}
                    </button>
                    <button class="hover:text-primary" on:click=move |_| act(BlogFeed::comment)>
                        {format!("💬 {}", post.comments)}
                    </button>
                    <button class="hover:text-green-400" on:click=move |_| act(BlogFeed::share)>
                        {format!("🔗 {}", post.shares)}
                    </button>
                </div>
                <button class="text-gray-400 hover:text-white" aria-label="Bookmark">"🔖"</button>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_highlight() {
        assert!(chip_class(true).contains("bg-primary-600"));
        assert!(!chip_class(false).contains("bg-primary-600"));
    }
}
