//! World chat screen

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::reply::{PendingReply, ReplyQueue, ReplyToken};
use crate::catalog::{seed, ChatMessage, Reaction, Sender};
use crate::config::CompanionConfig;
use crate::error::{ActionError, ActionResult};
use crate::notice::Notice;

/// Result of sending a chat message
#[derive(Debug, Clone, PartialEq)]
pub struct SendOutcome {
    pub notice: Notice,
    /// Set when a FINN reply was queued
    pub reply: Option<PendingReply>,
}

/// True when the message calls for FINN
fn summons_finn(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("finn") || lower.contains("help")
}

/// Next id after the largest in `messages`
pub(crate) fn next_message_id(messages: &[ChatMessage]) -> u64 {
    messages.iter().map(|m| m.id).max().unwrap_or(0) + 1
}

pub struct WorldChat {
    messages: Vec<ChatMessage>,
    replies: ReplyQueue,
}

impl WorldChat {
    pub fn new(config: &CompanionConfig, now: DateTime<Utc>) -> Self {
        Self {
            messages: seed::world_chat(now),
            replies: ReplyQueue::new(Duration::from_millis(config.reply_delay_ms)),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> ActionResult<SendOutcome> {
        if text.trim().is_empty() {
            return Err(ActionError::EmptyMessage);
        }

        let id = next_message_id(&self.messages);
        self.messages.push(ChatMessage::new(id, Sender::You, text, now));

        let reply = if summons_finn(text) {
            self.replies.schedule(seed::WORLD_CHAT_FINN_REPLY)
        } else {
            None
        };

        Ok(SendOutcome {
            notice: Notice::success("Message sent! 💫"),
            reply,
        })
    }

    /// Append a queued FINN reply. Returns `None` for a token that was
    /// already delivered or discarded by [`WorldChat::close`].
    pub fn deliver_reply(&mut self, token: ReplyToken, now: DateTime<Utc>) -> Option<&ChatMessage> {
        let body = self.replies.take(token)?;
        let id = next_message_id(&self.messages);
        self.messages.push(ChatMessage::new(id, Sender::Finn, body, now));
        self.messages.last()
    }

    pub fn react(&mut self, message_id: u64, emoji: &str) -> ActionResult<Notice> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or_else(|| ActionError::not_found("Message", message_id))?;

        match message.reactions.iter_mut().find(|r| r.emoji == emoji) {
            Some(reaction) => reaction.count = reaction.count.saturating_add(1),
            None => message.reactions.push(Reaction::new(emoji, 1)),
        }
        Ok(Notice::success(format!("Reaction added! {}", emoji)))
    }

    /// Screen teardown: discard pending replies
    pub fn close(&mut self) -> usize {
        self.replies.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat() -> WorldChat {
        WorldChat::new(&CompanionConfig::default(), Utc::now())
    }

    #[test]
    fn test_plain_message_has_no_reply() {
        let mut chat = chat();
        let outcome = chat.send("Good morning all", Utc::now()).unwrap();
        assert_eq!(outcome.notice.message, "Message sent! 💫");
        assert!(outcome.reply.is_none());

        let last = chat.messages().last().unwrap();
        assert_eq!(last.id, 5);
        assert_eq!(last.sender, Sender::You);
    }

    #[test]
    fn test_mentioning_finn_schedules_reply() {
        let mut chat = chat();
        let outcome = chat.send("Hey FINN, I need some HELP", Utc::now()).unwrap();
        let pending = outcome.reply.unwrap();
        assert_eq!(pending.delay, Duration::from_millis(1000));

        let reply = chat.deliver_reply(pending.token, Utc::now()).unwrap();
        assert!(reply.is_from_finn());
        assert_eq!(reply.body, seed::WORLD_CHAT_FINN_REPLY);
        assert_eq!(chat.messages().len(), 6);

        assert!(chat.deliver_reply(pending.token, Utc::now()).is_none());
        assert_eq!(chat.messages().len(), 6);
    }

    #[test]
    fn test_close_drops_late_replies() {
        let mut chat = chat();
        let pending = chat.send("help", Utc::now()).unwrap().reply.unwrap();
        assert_eq!(chat.close(), 1);
        assert!(chat.deliver_reply(pending.token, Utc::now()).is_none());
        assert_eq!(chat.messages().len(), 5);
    }

    #[test]
    fn test_blank_message_is_rejected() {
        let mut chat = chat();
        assert_eq!(chat.send("   ", Utc::now()), Err(ActionError::EmptyMessage));
        assert_eq!(chat.messages().len(), 4);
    }

    #[test]
    fn test_reactions() {
        let mut chat = chat();
        chat.react(2, "💚").unwrap();
        let notice = chat.react(2, "🌟").unwrap();
        assert_eq!(notice.message, "Reaction added! 🌟");

        let reactions = &chat.messages()[1].reactions;
        assert_eq!(reactions[0], Reaction::new("💚", 4));
        assert_eq!(reactions[2], Reaction::new("🌟", 1));

        assert!(chat.react(404, "💚").is_err());
    }
}
