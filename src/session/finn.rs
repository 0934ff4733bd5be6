//! FINN companion screen
//!
//! Chat with canned replies, the outfit wardrobe and the Bubble Drifter
//! mini-game. The session owns its random source so replies and bubble
//! placement are reproducible under a fixed seed.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::chat::next_message_id;
use super::reply::{PendingReply, ReplyQueue, ReplyToken};
use super::wallet::Wallet;
use crate::catalog::{seed, ChatMessage, Outfit, Sender};
use crate::config::CompanionConfig;
use crate::error::{ActionError, ActionResult};
use crate::notice::Notice;

pub const BUBBLE_COUNT: u32 = 10;
pub const POINTS_PER_BUBBLE: u32 = 10;
/// Score points per Seed paid out at the end of a round
pub const POINTS_PER_SEED: u32 = 10;

/// A poppable bubble in the play area (pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Bubble {
    fn random(id: u32, rng: &mut SmallRng) -> Self {
        Self {
            id,
            x: rng.random_range(0.0..300.0),
            y: rng.random_range(100.0..300.0),
            size: rng.random_range(20.0..50.0),
        }
    }
}

/// Bubble Drifter round state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BubbleGame {
    bubbles: Vec<Bubble>,
    score: u32,
    active: bool,
}

impl BubbleGame {
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// How an outfit card should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutfitStatus {
    Wearing,
    /// Free or already bought
    Owned,
    Affordable,
    Short(u32),
}

impl OutfitStatus {
    pub fn label(&self, outfit: &Outfit) -> String {
        match self {
            OutfitStatus::Wearing => "Wearing ✨".to_string(),
            OutfitStatus::Owned if outfit.is_free() => "Free ✨".to_string(),
            OutfitStatus::Owned => "Owned ✨".to_string(),
            OutfitStatus::Affordable => format!("{} Seeds 🌱", outfit.cost),
            OutfitStatus::Short(n) => format!("Need {} more 🌱", n),
        }
    }
}

pub struct FinnSession {
    messages: Vec<ChatMessage>,
    replies: ReplyQueue,
    rng: SmallRng,
    wallet: Wallet,
    owned: HashSet<&'static str>,
    wearing: &'static Outfit,
    game: BubbleGame,
}

fn find_outfit(id: &str) -> ActionResult<&'static Outfit> {
    seed::OUTFITS
        .iter()
        .find(|o| o.id == id)
        .ok_or_else(|| ActionError::not_found("Outfit", id))
}

impl FinnSession {
    pub fn new(config: &CompanionConfig, rng_seed: u64, now: DateTime<Utc>) -> Self {
        let wearing = &seed::OUTFITS[0];
        Self {
            messages: seed::finn_conversation(now),
            replies: ReplyQueue::new(Duration::from_millis(config.reply_delay_ms)),
            rng: SmallRng::seed_from_u64(rng_seed),
            wallet: Wallet::new(config.starting_seeds),
            owned: HashSet::from([wearing.id]),
            wearing,
            game: BubbleGame::default(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn seeds(&self) -> u32 {
        self.wallet.balance()
    }

    pub fn wearing(&self) -> &'static Outfit {
        self.wearing
    }

    pub fn game(&self) -> &BubbleGame {
        &self.game
    }

    pub fn outfit_status(&self, outfit: &Outfit) -> OutfitStatus {
        if outfit.id == self.wearing.id {
            OutfitStatus::Wearing
        } else if outfit.is_free() || self.owned.contains(outfit.id) {
            OutfitStatus::Owned
        } else {
            match self.wallet.shortfall(outfit.cost) {
                0 => OutfitStatus::Affordable,
                n => OutfitStatus::Short(n),
            }
        }
    }

    /// Send a message to FINN and queue one canned reply
    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> ActionResult<Option<PendingReply>> {
        if text.trim().is_empty() {
            return Err(ActionError::EmptyMessage);
        }
        let id = next_message_id(&self.messages);
        self.messages.push(ChatMessage::new(id, Sender::You, text, now));

        let pick = self.rng.random_range(0..seed::FINN_REPLIES.len());
        Ok(self.replies.schedule(seed::FINN_REPLIES[pick]))
    }

    pub fn deliver_reply(&mut self, token: ReplyToken, now: DateTime<Utc>) -> Option<&ChatMessage> {
        let body = self.replies.take(token)?;
        let id = next_message_id(&self.messages);
        self.messages.push(ChatMessage::new(id, Sender::Finn, body, now));
        self.messages.last()
    }

    /// Wear an outfit, buying it first when needed
    pub fn buy_outfit(&mut self, id: &str) -> ActionResult<Notice> {
        let outfit = find_outfit(id)?;

        match self.outfit_status(outfit) {
            OutfitStatus::Wearing => Err(ActionError::AlreadyWearing(outfit.name.to_string())),
            OutfitStatus::Owned => {
                self.wearing = outfit;
                Ok(Notice::success(format!(
                    "FINN is now wearing {}! {}",
                    outfit.name, outfit.emoji
                )))
            }
            OutfitStatus::Affordable | OutfitStatus::Short(_) => {
                self.wallet.spend(outfit.cost)?;
                self.owned.insert(outfit.id);
                self.wearing = outfit;
                tracing::info!(
                    outfit = outfit.id,
                    cost = outfit.cost,
                    balance = self.wallet.balance(),
                    "Outfit purchased"
                );
                Ok(Notice::success(format!(
                    "FINN loves the new {}! {} (-{} Seeds)",
                    outfit.name, outfit.emoji, outfit.cost
                )))
            }
        }
    }

    pub fn start_game(&mut self) -> ActionResult<Notice> {
        if self.game.active {
            return Err(ActionError::GameInProgress);
        }
        let rng = &mut self.rng;
        self.game = BubbleGame {
            bubbles: (0..BUBBLE_COUNT).map(|id| Bubble::random(id, rng)).collect(),
            score: 0,
            active: true,
        };
        Ok(Notice::success("Bubble Drifter started! Pop the bubbles! 🫧"))
    }

    /// Pop a bubble. Returns the completion notice when it was the last one.
    pub fn pop_bubble(&mut self, id: u32) -> ActionResult<Option<Notice>> {
        let idx = self
            .game
            .bubbles
            .iter()
            .position(|b| b.id == id)
            .ok_or(ActionError::BubbleGone)?;
        self.game.bubbles.remove(idx);
        self.game.score += POINTS_PER_BUBBLE;

        if !self.game.bubbles.is_empty() {
            return Ok(None);
        }

        self.game.active = false;
        let earned = self.game.score / POINTS_PER_SEED;
        self.wallet.credit(earned);
        tracing::info!(score = self.game.score, earned, "Bubble Drifter finished");
        Ok(Some(Notice::success(format!(
            "Game complete! Earned {} Seeds! 🌱",
            earned
        ))))
    }

    /// Screen teardown: discard pending replies
    pub fn close(&mut self) -> usize {
        self.replies.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seeds: u32) -> FinnSession {
        let config = CompanionConfig {
            starting_seeds: seeds,
            ..Default::default()
        };
        FinnSession::new(&config, 7, Utc::now())
    }

    #[test]
    fn test_reply_comes_from_canned_list() {
        let mut finn = session(256);
        let pending = finn.send("I feel a bit low", Utc::now()).unwrap().unwrap();
        let reply = finn.deliver_reply(pending.token, Utc::now()).unwrap();
        assert!(seed::FINN_REPLIES.contains(&reply.body.as_str()));
        assert_eq!(finn.messages().len(), 3);
    }

    #[test]
    fn test_same_seed_same_replies() {
        let mut a = session(256);
        let mut b = session(256);
        for _ in 0..5 {
            let ta = a.send("hi", Utc::now()).unwrap().unwrap().token;
            let tb = b.send("hi", Utc::now()).unwrap().unwrap().token;
            assert_eq!(
                a.deliver_reply(ta, Utc::now()).map(|m| m.body.clone()),
                b.deliver_reply(tb, Utc::now()).map(|m| m.body.clone())
            );
        }
    }

    #[test]
    fn test_blank_message_is_rejected() {
        let mut finn = session(256);
        assert_eq!(finn.send("", Utc::now()), Err(ActionError::EmptyMessage));
        assert_eq!(finn.messages().len(), 1);
    }

    #[test]
    fn test_buy_outfit() {
        let mut finn = session(256);
        let notice = finn.buy_outfit("wizard").unwrap();
        assert_eq!(notice.message, "FINN loves the new Wizard Hat! 🧙‍♂️ (-80 Seeds)");
        assert_eq!(finn.seeds(), 176);
        assert_eq!(finn.wearing().id, "wizard");
    }

    #[test]
    fn test_outfit_above_balance_changes_nothing() {
        let mut finn = session(20);
        assert_eq!(
            finn.buy_outfit("formal"),
            Err(ActionError::InsufficientSeeds { short: 30 })
        );
        assert_eq!(finn.seeds(), 20);
        assert_eq!(finn.wearing().id, "casual");
        assert_eq!(
            finn.outfit_status(find_outfit("formal").unwrap()),
            OutfitStatus::Short(30)
        );
    }

    #[test]
    fn test_owned_outfits_are_free_to_rewear() {
        let mut finn = session(100);
        finn.buy_outfit("beach").unwrap();
        let notice = finn.buy_outfit("casual").unwrap();
        assert_eq!(notice.message, "FINN is now wearing Cozy Sweater! 🧥");

        finn.buy_outfit("beach").unwrap();
        assert_eq!(finn.seeds(), 70);
        assert_eq!(
            finn.buy_outfit("beach"),
            Err(ActionError::AlreadyWearing("Sunglasses".into()))
        );
    }

    #[test]
    fn test_bubble_game_pays_out() {
        let mut finn = session(0);
        finn.start_game().unwrap();
        assert_eq!(finn.start_game(), Err(ActionError::GameInProgress));

        let ids: Vec<u32> = finn.game().bubbles().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), BUBBLE_COUNT as usize);
        for bubble in finn.game().bubbles() {
            assert!((0.0..300.0).contains(&bubble.x));
            assert!((100.0..300.0).contains(&bubble.y));
        }

        let (last, rest) = ids.split_last().unwrap();
        for id in rest {
            assert_eq!(finn.pop_bubble(*id), Ok(None));
        }
        assert_eq!(finn.pop_bubble(rest[0]), Err(ActionError::BubbleGone));

        let notice = finn.pop_bubble(*last).unwrap().unwrap();
        assert_eq!(notice.message, "Game complete! Earned 10 Seeds! 🌱");
        assert_eq!(finn.seeds(), 10);
        assert_eq!(finn.game().score(), 100);
        assert!(!finn.game().is_active());

        // A new round may start once the last one ends
        assert!(finn.start_game().is_ok());
        assert_eq!(finn.game().score(), 0);
    }

    #[test]
    fn test_close_discards_replies() {
        let mut finn = session(256);
        let pending = finn.send("hello", Utc::now()).unwrap().unwrap();
        finn.close();
        assert!(finn.deliver_reply(pending.token, Utc::now()).is_none());
        assert!(finn.send("again", Utc::now()).unwrap().is_none());
    }
}
