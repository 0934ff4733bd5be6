//! Built-in sample data
//!
//! Owned records are returned fresh from a function on every call so each
//! screen controller starts from the same state. Timestamped records are built
//! relative to the caller's `now`.

use chrono::{DateTime, Duration, Utc};

use super::types::*;

/// Starting Seeds balance for a fresh session
pub const STARTING_SEEDS: u32 = 256;

pub const SPECIALTY_OPTIONS: &[&str] = &[
    "Anxiety",
    "Depression",
    "Trauma",
    "ADHD",
    "Relationships",
    "Addiction",
    "Child Psychology",
];

pub const LOCATION_OPTIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Denver, CO",
    "Seattle, WA",
];

pub const CAMPAIGN_CATEGORIES: &[&str] = &[
    "Therapy",
    "Medication",
    "Specialized Treatment",
    "Youth Mental Health",
    "Family Therapy",
];

/// Preset amounts offered on every campaign card
pub const QUICK_SUPPORT_AMOUNTS: &[u32] = &[25, 50, 100];

pub const QUICK_REACTIONS: &[&str] = &["💚", "🫂", "🌟", "🙏"];

pub const MEMBERS_ONLINE: u32 = 147;

pub const STREAMS: &[Stream] = &[
    Stream {
        name: "Anxiety Support",
        members: 23,
        topic: "Coping strategies",
    },
    Stream {
        name: "Mindfulness Circle",
        members: 15,
        topic: "Daily practices",
    },
    Stream {
        name: "Student Wellness",
        members: 31,
        topic: "Academic stress",
    },
    Stream {
        name: "Creative Healing",
        members: 12,
        topic: "Art therapy",
    },
];

pub const OUTFITS: &[Outfit] = &[
    Outfit {
        id: "casual",
        name: "Cozy Sweater",
        cost: 0,
        emoji: "🧥",
        description: "Default comfy look",
    },
    Outfit {
        id: "formal",
        name: "Bow Tie",
        cost: 50,
        emoji: "🎀",
        description: "Dapper and distinguished",
    },
    Outfit {
        id: "beach",
        name: "Sunglasses",
        cost: 30,
        emoji: "🕶️",
        description: "Cool ocean vibes",
    },
    Outfit {
        id: "party",
        name: "Party Hat",
        cost: 40,
        emoji: "🎉",
        description: "Ready to celebrate",
    },
    Outfit {
        id: "wizard",
        name: "Wizard Hat",
        cost: 80,
        emoji: "🧙‍♂️",
        description: "Magical powers activated",
    },
];

pub const FINN_GREETING: &str = "Hello! I'm FINN, your friendly AI dolphin companion! 🐬 I'm here to support you, play games, and help make your Echo journey amazing. How are you feeling today?";

pub const FINN_REPLIES: &[&str] = &[
    "That's wonderful to hear! 🌟 Your positive energy brightens my day!",
    "I understand how you're feeling. Remember, every small step counts! 🌱",
    "You're doing great! Want to try a fun breathing exercise together? 🌊",
    "I'm always here for you! How about we play a quick game to lift your spirits? 🎮",
    "Your growth journey is inspiring! I've seen so much progress in you! 💙",
    "That sounds challenging. Would you like to move to a private Haven chat for more support? 🏠",
    "Let's celebrate the small wins! Every positive moment matters! ✨",
    "I'm curious - what's been the best part of your day so far? 🌈",
];

/// FINN's answer when someone mentions it (or asks for help) in the world chat
pub const WORLD_CHAT_FINN_REPLY: &str = "I'm here to help! 🐬 Would you like to move to a more private Haven chat, or shall we continue here? I can also suggest some calming activities if you'd like! 🌊";

pub const AFFIRMATIONS: &[&str] = &[
    "I am growing stronger every day, just like the seeds that bloom into beautiful trees.",
    "Small steps still move me forward.",
    "I deserve the same kindness I give to others.",
    "My feelings are valid, and they will pass like waves.",
    "I am allowed to rest and begin again.",
];

pub const AVATAR_STAGES: &[AvatarStage] = &[
    AvatarStage {
        id: "sprout",
        name: "Young Sprout",
        emoji: "🌱",
        description: "Just beginning to grow",
    },
    AvatarStage {
        id: "sapling",
        name: "Healthy Sapling",
        emoji: "🌿",
        description: "Growing stronger",
    },
    AvatarStage {
        id: "bloom",
        name: "Blooming Tree",
        emoji: "🌳",
        description: "In full bloom",
    },
    AvatarStage {
        id: "flower",
        name: "Flower Garden",
        emoji: "🌸",
        description: "Spreading beauty",
    },
];

pub const COLOR_PALETTES: &[ColorPalette] = &[
    ColorPalette {
        id: "seafoam",
        name: "Ocean Breeze",
        swatches: ["bg-primary", "bg-success", "bg-accent"],
    },
    ColorPalette {
        id: "sunset",
        name: "Sunset Glow",
        swatches: ["bg-warning", "bg-accent", "bg-destructive/70"],
    },
    ColorPalette {
        id: "forest",
        name: "Forest Deep",
        swatches: ["bg-success", "bg-primary", "bg-muted"],
    },
    ColorPalette {
        id: "lavender",
        name: "Calm Lavender",
        swatches: ["bg-secondary", "bg-primary/50", "bg-accent/50"],
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        name: "First Steps",
        description: "Joined Echo community",
        completed: true,
        icon: "🌱",
    },
    Achievement {
        name: "Conversation Starter",
        description: "Sent your first message",
        completed: true,
        icon: "💬",
    },
    Achievement {
        name: "FINN's Friend",
        description: "Played with FINN",
        completed: false,
        icon: "🐬",
    },
    Achievement {
        name: "Helper",
        description: "Supported a community member",
        completed: false,
        icon: "🤝",
    },
    Achievement {
        name: "Growth Mindset",
        description: "7 days of active engagement",
        completed: false,
        icon: "📈",
    },
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn experts() -> Vec<Expert> {
    vec![
        Expert {
            id: 1,
            name: "Dr. Sarah Chen".into(),
            title: "Licensed Clinical Psychologist".into(),
            specialties: strings(&["Anxiety", "Depression", "Trauma", "CBT"]),
            rating: 4.9,
            review_count: 156,
            location: "San Francisco, CA".into(),
            verified: true,
            price: 120,
            availability: Availability::Available,
            response_time: "Within 2 hours".into(),
            languages: strings(&["English", "Mandarin"]),
            description: "Specializing in anxiety disorders and trauma recovery with 10+ years of experience. I believe in creating a safe, supportive environment for healing.".into(),
        },
        Expert {
            id: 2,
            name: "Dr. Marcus Johnson".into(),
            title: "Psychiatrist & Therapist".into(),
            specialties: strings(&["ADHD", "Bipolar", "Medication Management"]),
            rating: 4.8,
            review_count: 203,
            location: "New York, NY".into(),
            verified: true,
            price: 150,
            availability: Availability::Busy,
            response_time: "Within 4 hours".into(),
            languages: strings(&["English", "Spanish"]),
            description: "Board-certified psychiatrist with expertise in medication management and therapy. Committed to holistic mental health care.".into(),
        },
        Expert {
            id: 3,
            name: "Dr. Emily Rodriguez".into(),
            title: "Licensed Marriage & Family Therapist".into(),
            specialties: strings(&["Relationships", "Family Therapy", "Couples Counseling"]),
            rating: 4.7,
            review_count: 89,
            location: "Austin, TX".into(),
            verified: true,
            price: 100,
            availability: Availability::Available,
            response_time: "Within 1 hour".into(),
            languages: strings(&["English", "Spanish"]),
            description: "Helping couples and families build stronger connections through evidence-based therapeutic approaches.".into(),
        },
        Expert {
            id: 4,
            name: "Dr. James Wilson".into(),
            title: "Clinical Social Worker".into(),
            specialties: strings(&["Substance Abuse", "Addiction Recovery", "Group Therapy"]),
            rating: 4.9,
            review_count: 134,
            location: "Denver, CO".into(),
            verified: true,
            price: 90,
            availability: Availability::Available,
            response_time: "Within 3 hours".into(),
            languages: strings(&["English"]),
            description: "Specialized in addiction recovery and substance abuse treatment with compassionate, evidence-based care.".into(),
        },
        Expert {
            id: 5,
            name: "Dr. Priya Patel".into(),
            title: "Child & Adolescent Psychologist".into(),
            specialties: strings(&["Child Psychology", "Autism", "ADHD", "Behavioral Issues"]),
            rating: 4.8,
            review_count: 92,
            location: "Seattle, WA".into(),
            verified: true,
            price: 110,
            availability: Availability::Offline,
            response_time: "Within 6 hours".into(),
            languages: strings(&["English", "Hindi"]),
            description: "Dedicated to helping children and teens navigate mental health challenges with age-appropriate therapeutic techniques.".into(),
        },
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            title: "Therapy Sessions for Single Mother".into(),
            description: "Help Sarah access weekly therapy sessions to cope with postpartum depression and anxiety.".into(),
            created_by: "SarahBloom".into(),
            goal_amount: 2400,
            raised_amount: 1680,
            supporters_count: 34,
            days_left: 12,
            category: "Therapy".into(),
            verified: true,
            urgent: true,
            story: "As a new single mother struggling with postpartum depression, I'm finding it hard to afford the therapy sessions I desperately need. Your support would help me become the mother my daughter deserves.".into(),
        },
        Campaign {
            id: 2,
            title: "Anxiety Medication for Student".into(),
            description: "College student needs help covering anxiety medication and counseling services.".into(),
            created_by: "HopeSeeker".into(),
            goal_amount: 800,
            raised_amount: 520,
            supporters_count: 28,
            days_left: 8,
            category: "Medication".into(),
            verified: true,
            urgent: false,
            story: "Starting college has been overwhelming, and my anxiety has gotten worse. I need help covering medication and campus counseling services to continue my education successfully.".into(),
        },
        Campaign {
            id: 3,
            title: "PTSD Treatment for Veteran".into(),
            description: "Supporting a veteran's journey to recovery through specialized PTSD treatment program.".into(),
            created_by: "VeteranSupport".into(),
            goal_amount: 5000,
            raised_amount: 3250,
            supporters_count: 89,
            days_left: 20,
            category: "Specialized Treatment".into(),
            verified: true,
            urgent: false,
            story: "After serving our country, this veteran needs specialized PTSD treatment that's not fully covered by insurance. Every contribution helps restore hope and healing.".into(),
        },
        Campaign {
            id: 4,
            title: "Teen Depression Support Program".into(),
            description: "Funding counseling sessions for teenagers dealing with depression and social anxiety.".into(),
            created_by: "TeenHelper".into(),
            goal_amount: 1500,
            raised_amount: 890,
            supporters_count: 45,
            days_left: 15,
            category: "Youth Mental Health".into(),
            verified: true,
            urgent: true,
            story: "Our local teen support group needs funding to provide free counseling sessions for teenagers who can't afford mental health care. Together, we can save young lives.".into(),
        },
        Campaign {
            id: 5,
            title: "Family Therapy After Loss".into(),
            description: "Help a family process grief through professional family therapy sessions.".into(),
            created_by: "GrievingFamily".into(),
            goal_amount: 1800,
            raised_amount: 450,
            supporters_count: 12,
            days_left: 25,
            category: "Family Therapy".into(),
            verified: true,
            urgent: false,
            story: "After losing our father unexpectedly, our family is struggling to cope. We need professional help to process our grief and heal together as a family unit.".into(),
        },
    ]
}

pub fn blog_posts(now: DateTime<Utc>) -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            author: Author { name: "Maya Chen".into(), level: 15, verified: true },
            title: "Finding Peace in Small Moments".into(),
            content: "Today I realized that healing doesn't always come from big breakthroughs. Sometimes it's found in the quiet moments - sipping tea while watching the sunrise, or feeling the gentle breeze during an evening walk. These small pockets of peace have become my anchors during turbulent times. I've learned to collect these moments like pressed flowers in a book, returning to them whenever I need a reminder that beauty and calm still exist in this world. What small moments bring you peace?".into(),
            likes: 47,
            comments: 12,
            shares: 8,
            posted_at: now - Duration::hours(2),
            tags: strings(&["mindfulness", "peace", "self-care"]),
            seeds_earned: 235,
        },
        BlogPost {
            id: 2,
            author: Author { name: "Alex Rivera".into(), level: 8, verified: false },
            title: "My Journey with Anxiety - 6 Months Later".into(),
            content: "Six months ago, I could barely leave my room. Anxiety felt like a constant storm cloud following me everywhere. Today, I'm sharing this from a café - something that would have been impossible back then. The journey hasn't been linear. There were setbacks, days when progress felt impossible, and moments when I wanted to give up. But with the support of this amazing community and professional help, I've learned that courage isn't the absence of fear - it's taking one small step despite it. To anyone struggling: you're not alone, and every tiny step forward matters.".into(),
            likes: 89,
            comments: 23,
            shares: 15,
            posted_at: now - Duration::hours(5),
            tags: strings(&["anxiety", "recovery", "mental-health"]),
            seeds_earned: 445,
        },
        BlogPost {
            id: 3,
            author: Author { name: "Dr. Sarah Kim".into(), level: 25, verified: true },
            title: "The Science Behind Gratitude Practice".into(),
            content: "As a mental health professional, I'm constantly amazed by the research on gratitude. Studies show that regular gratitude practice can literally rewire our brains for positivity. The anterior cingulate cortex and medial prefrontal cortex - areas associated with emotional regulation - show increased activity in people who practice gratitude regularly. But beyond the science, I've seen it transform lives. Start small: three things you're grateful for each day. It doesn't have to be profound - maybe it's your morning coffee or a friend's text message. What matters is the practice of noticing the good that already exists.".into(),
            likes: 156,
            comments: 31,
            shares: 42,
            posted_at: now - Duration::hours(8),
            tags: strings(&["gratitude", "neuroscience", "mental-health", "expert-insight"]),
            seeds_earned: 780,
        },
    ]
}

/// Opening world-chat history, oldest first
pub fn world_chat(now: DateTime<Utc>) -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(
            1,
            Sender::Finn,
            "Welcome to Echo! 🐬 I'm here to help you navigate and connect safely. How are you feeling today?",
            now - Duration::minutes(2),
        ),
        ChatMessage::new(
            2,
            Sender::Member("BloomingRose".into()),
            "Hi everyone! Just joined and feeling a bit nervous but excited to be part of this community 🌹",
            now - Duration::minutes(5),
        )
        .reaction("💚", 3)
        .reaction("🫂", 2),
        ChatMessage::new(
            3,
            Sender::Member("GentleWave".into()),
            "Welcome @BloomingRose! This is such a supportive space. We're glad you're here! 💙",
            now - Duration::minutes(3),
        ),
        ChatMessage::new(
            4,
            Sender::Member("SeedOfHope".into()),
            "Today I practiced some mindfulness and it really helped with my anxiety. Small steps! 🌱",
            now - Duration::minutes(1),
        )
        .reaction("🌟", 5)
        .reaction("💚", 4)
        .reaction("🙏", 2),
    ]
}

/// Opening FINN conversation
pub fn finn_conversation(now: DateTime<Utc>) -> Vec<ChatMessage> {
    vec![ChatMessage::new(1, Sender::Finn, FINN_GREETING, now)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_counts() {
        let now = Utc::now();
        assert_eq!(experts().len(), 5);
        assert_eq!(campaigns().len(), 5);
        assert_eq!(blog_posts(now).len(), 3);
        assert_eq!(world_chat(now).len(), 4);
        assert_eq!(OUTFITS.len(), 5);
        assert_eq!(FINN_REPLIES.len(), 8);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<u32> = experts().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 5);
        let ids: HashSet<u32> = campaigns().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 5);
        let ids: HashSet<&str> = OUTFITS.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), OUTFITS.len());
    }

    #[test]
    fn test_location_options_cover_every_expert() {
        for expert in experts() {
            assert!(LOCATION_OPTIONS.contains(&expert.location.as_str()));
        }
    }

    #[test]
    fn test_categories_cover_every_campaign() {
        for campaign in campaigns() {
            assert!(CAMPAIGN_CATEGORIES.contains(&campaign.category.as_str()));
        }
    }

    #[test]
    fn test_only_default_outfit_is_free() {
        let free: Vec<_> = OUTFITS.iter().filter(|o| o.is_free()).collect();
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].id, "casual");
    }
}
