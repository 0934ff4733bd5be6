//! Record types for the seeded catalog
//!
//! Two kinds of records live here:
//! - Owned records (`Expert`, `Campaign`, `BlogPost`, `ChatMessage`) that a
//!   screen controller holds in a `Vec` and may update in place
//! - Static catalog entries (`Outfit`, `AvatarStage`, ...) that are compiled in
//!   as `&'static` slices and never change

use chrono::{DateTime, Utc};

use super::format::initials;

/// Expert availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    Busy,
    Offline,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Busy => "Busy",
            Availability::Offline => "Offline",
        }
    }

    /// Busy experts still accept sessions; only offline ones refuse.
    pub fn accepts_sessions(&self) -> bool {
        !matches!(self, Availability::Offline)
    }
}

/// A verified mental-health professional in the directory
#[derive(Debug, Clone, PartialEq)]
pub struct Expert {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub specialties: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub location: String,
    pub verified: bool,
    /// Session price in whole dollars
    pub price: u32,
    pub availability: Availability,
    pub response_time: String,
    pub languages: Vec<String>,
    pub description: String,
}

impl Expert {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// A crowdfunding campaign for mental-health care
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub goal_amount: u32,
    pub raised_amount: u32,
    pub supporters_count: u32,
    pub days_left: u32,
    pub category: String,
    pub verified: bool,
    pub urgent: bool,
    pub story: String,
}

impl Campaign {
    /// Funding progress as a percentage, capped at 100
    pub fn progress_percent(&self) -> f64 {
        if self.goal_amount == 0 {
            return 100.0;
        }
        (self.raised_amount as f64 / self.goal_amount as f64 * 100.0).min(100.0)
    }

    pub fn creator_initial(&self) -> String {
        self.created_by.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Author block shown on a story
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub level: u32,
    pub verified: bool,
}

/// A community story in the Bloom Stories feed
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub posted_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub seeds_earned: u32,
}

impl BlogPost {
    pub fn author_initials(&self) -> String {
        initials(&self.author.name)
    }
}

/// Who wrote a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    /// The local user
    You,
    /// Another community member
    Member(String),
    /// The FINN companion
    Finn,
}

impl Sender {
    pub fn display_name(&self) -> &str {
        match self {
            Sender::You => "You",
            Sender::Member(name) => name,
            Sender::Finn => "FINN",
        }
    }

    /// Glyph rendered in the avatar bubble
    pub fn avatar_glyph(&self) -> String {
        match self {
            Sender::You => "🌱".to_string(),
            Sender::Finn => "🐬".to_string(),
            Sender::Member(name) => name.chars().next().map(String::from).unwrap_or_default(),
        }
    }
}

/// Emoji reaction tally on a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub emoji: String,
    pub count: u32,
}

impl Reaction {
    pub fn new(emoji: impl Into<String>, count: u32) -> Self {
        Self {
            emoji: emoji.into(),
            count,
        }
    }
}

/// A message in the world chat or a FINN conversation
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub reactions: Vec<Reaction>,
}

impl ChatMessage {
    pub fn new(id: u64, sender: Sender, body: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            id,
            sender,
            body: body.into(),
            sent_at,
            reactions: Vec::new(),
        }
    }

    /// Builder method: attach a reaction tally
    pub fn reaction(mut self, emoji: &str, count: u32) -> Self {
        self.reactions.push(Reaction::new(emoji, count));
        self
    }

    pub fn is_from_finn(&self) -> bool {
        self.sender == Sender::Finn
    }
}

/// Cosmetic item FINN can wear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outfit {
    pub id: &'static str,
    pub name: &'static str,
    /// Price in Seeds; zero means free
    pub cost: u32,
    pub emoji: &'static str,
    pub description: &'static str,
}

impl Outfit {
    pub fn is_free(&self) -> bool {
        self.cost == 0
    }
}

/// Growth stage for the Bloom avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarStage {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

/// Colour palette for the Bloom avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub id: &'static str,
    pub name: &'static str,
    /// Utility classes for the three swatches
    pub swatches: [&'static str; 3],
}

/// Dashboard achievement badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub description: &'static str,
    pub completed: bool,
    pub icon: &'static str,
}

/// Topic-focused group chat listed on the Streams tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stream {
    pub name: &'static str,
    pub members: u32,
    pub topic: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(raised: u32, goal: u32) -> Campaign {
        Campaign {
            id: 1,
            title: "t".into(),
            description: "d".into(),
            created_by: "HopeSeeker".into(),
            goal_amount: goal,
            raised_amount: raised,
            supporters_count: 0,
            days_left: 1,
            category: "Therapy".into(),
            verified: true,
            urgent: false,
            story: String::new(),
        }
    }

    #[test]
    fn test_progress_percent_caps_at_100() {
        assert_eq!(campaign(1680, 2400).progress_percent().round(), 70.0);
        assert_eq!(campaign(3000, 2400).progress_percent(), 100.0);
        assert_eq!(campaign(10, 0).progress_percent(), 100.0);
    }

    #[test]
    fn test_creator_initial() {
        assert_eq!(campaign(0, 1).creator_initial(), "H");
    }

    #[test]
    fn test_sender_glyphs() {
        assert_eq!(Sender::Finn.avatar_glyph(), "🐬");
        assert_eq!(Sender::You.display_name(), "You");
        assert_eq!(Sender::Member("GentleWave".into()).avatar_glyph(), "G");
    }

    #[test]
    fn test_offline_experts_refuse_sessions() {
        assert!(Availability::Busy.accepts_sessions());
        assert!(!Availability::Offline.accepts_sessions());
    }
}
