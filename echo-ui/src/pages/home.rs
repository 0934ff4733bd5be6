//! Home Page
//!
//! Landing screen: hero, feature cards and the growth journey.

use leptos::*;
use leptos_router::*;

const COMMUNITY_BADGES: &[&str] = &[
    "🌱 1,245 seeds grown",
    "💬 5,320 messages shared",
    "👥 312 active users",
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    summary: &'static str,
    details: &'static [&'static str],
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🌳",
        title: "Bloom Avatar",
        summary: "Customize your unique digital identity that grows with your journey",
        details: &["Create a personalized avatar that evolves as you progress. Fun, gamified profiles that reflect your growth and achievements."],
    },
    Feature {
        icon: "💬",
        title: "Safe Connections",
        summary: "World Chat, Streams, and Haven for every type of conversation",
        details: &[
            "World Chat - Open community support",
            "Streams - Focused group conversations",
            "Haven - Private, encrypted chats",
        ],
    },
    Feature {
        icon: "🐬",
        title: "Meet FINN",
        summary: "Your friendly AI dolphin companion",
        details: &[
            "Interactive mini-games",
            "Personalized guidance",
            "Safe conversation moderation",
        ],
    },
    Feature {
        icon: "🩺",
        title: "Expert Network",
        summary: "Connect with verified mental health professionals",
        details: &["Access licensed therapists, counselors, and mental health experts through secure, encrypted connections."],
    },
    Feature {
        icon: "💚",
        title: "Health Crowdfunding",
        summary: "Community support for mental health needs",
        details: &["Verified campaigns with eKYC for mental health treatments, therapy sessions, and wellness programs."],
    },
    Feature {
        icon: "📝",
        title: "Share Your Story",
        summary: "Express yourself through thoughtful blogging",
        details: &["Write and share your wellness journey. Earn Seeds through community engagement and meaningful connections."],
    },
];

const JOURNEY: &[(&str, &str, &str)] = &[
    ("🌱", "Plant Your Seeds", "Start with small, meaningful connections and conversations"),
    ("🌿", "Nurture Growth", "Engage with community, learn from experts, and practice self-care"),
    ("🌸", "Bloom Together", "Share your journey and help others grow in their wellness path"),
];

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div>
            <Hero />
            <Features />
            <Journey />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="py-20 px-4 text-center">
            <span class="inline-block mb-6 px-3 py-1 rounded-full text-sm bg-primary/10 text-primary border border-primary/20">
                "Where Minds Bloom 🌱"
            </span>

            <div class="flex flex-wrap justify-center gap-6 mb-8 text-sm text-gray-400">
                {COMMUNITY_BADGES
                    .iter()
                    .map(|badge| view! { <span>{*badge}</span> })
                    .collect_view()}
            </div>

            <h1 class="text-5xl md:text-6xl font-bold mb-6">
                "Echo: Where "
                <span class="bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                    "Minds Bloom"
                </span>
            </h1>
            <p class="text-xl text-gray-300 mb-4 font-medium">"Healing, Growth, and Connection"</p>
            <p class="text-lg text-gray-400 mb-12 max-w-2xl mx-auto">
                "A nurturing platform where mental wellness grows through authentic connection, \
                 professional support, and meaningful community. Start your journey of healing and growth today."
            </p>

            <div class="flex flex-col sm:flex-row gap-4 justify-center">
                <A
                    href="/login"
                    class="px-8 py-4 bg-primary-600 hover:bg-primary-700 rounded-lg text-lg font-semibold shadow-lg transition-colors"
                >
                    "💚 Join Your Safe Space"
                </A>
                <A
                    href="/chats"
                    class="px-8 py-4 bg-gray-700 hover:bg-gray-600 rounded-lg text-lg font-semibold shadow-lg transition-colors"
                >
                    "💬 Continue as Guest"
                </A>
            </div>
            <div class="mt-6">
                <A
                    href="/login"
                    class="inline-block px-6 py-3 border border-accent text-accent hover:bg-accent hover:text-gray-900 rounded-lg font-semibold transition-colors"
                >
                    "🩺 Join as Expert"
                </A>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-16 px-4">
            <div class="container mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">"Nurture Your Growth"</h2>
                    <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                        "Discover a comprehensive platform designed to support your mental wellness \
                         journey with personalized features and caring community."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <div class="bg-gray-800 rounded-xl p-6 border border-primary/20 hover:shadow-lg transition-shadow">
                                <div class="text-3xl mb-3">{feature.icon}</div>
                                <h3 class="text-xl font-semibold mb-1">{feature.title}</h3>
                                <p class="text-gray-400 mb-4">{feature.summary}</p>
                                <ul class="space-y-2 text-sm text-gray-400">
                                    {feature
                                        .details
                                        .iter()
                                        .map(|line| view! { <li>{*line}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Journey() -> impl IntoView {
    view! {
        <section class="py-16 px-4 bg-gray-800/40">
            <div class="container mx-auto max-w-3xl">
                <h2 class="text-4xl font-bold mb-6">"Your Growth Journey"</h2>
                <p class="text-lg text-gray-400 mb-8">
                    "Just like seeds that bloom into beautiful trees, your mental wellness journey is a \
                     process of growth, nurturing, and patience. Every step forward, no matter how small, \
                     is progress worth celebrating."
                </p>
                <div class="space-y-4">
                    {JOURNEY
                        .iter()
                        .map(|(icon, title, text)| view! {
                            <div class="flex items-start space-x-3">
                                <span class="text-2xl">{*icon}</span>
                                <div>
                                    <h4 class="font-semibold">{*title}</h4>
                                    <p class="text-sm text-gray-400">{*text}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
