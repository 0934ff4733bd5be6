//! Delayed companion replies
//!
//! A reply is scheduled now and delivered after a delay. The queue hands out
//! a token per reply; the caller arms a timer and redeems the token when it
//! fires. Closing the queue discards every outstanding token, so a timer that
//! outlives its screen finds nothing to deliver.

use std::time::Duration;

/// Handle for one scheduled reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReplyToken(u64);

/// What the caller needs to arm a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    pub token: ReplyToken,
    pub delay: Duration,
}

#[derive(Debug)]
pub struct ReplyQueue {
    delay: Duration,
    next_token: u64,
    pending: Vec<(ReplyToken, String)>,
    closed: bool,
}

impl ReplyQueue {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_token: 1,
            pending: Vec::new(),
            closed: false,
        }
    }

    /// Queue a reply body. Returns `None` once the queue is closed.
    pub fn schedule(&mut self, body: impl Into<String>) -> Option<PendingReply> {
        if self.closed {
            return None;
        }
        let token = ReplyToken(self.next_token);
        self.next_token += 1;
        self.pending.push((token, body.into()));
        tracing::debug!(
            token = token.0,
            delay_ms = self.delay.as_millis() as u64,
            "Reply scheduled"
        );
        Some(PendingReply {
            token,
            delay: self.delay,
        })
    }

    /// Redeem a token. Each token yields its body at most once.
    pub fn take(&mut self, token: ReplyToken) -> Option<String> {
        let idx = self.pending.iter().position(|(t, _)| *t == token)?;
        Some(self.pending.remove(idx).1)
    }

    /// Discard everything pending and refuse new work
    pub fn close(&mut self) -> usize {
        self.closed = true;
        let dropped = self.pending.len();
        self.pending.clear();
        if dropped > 0 {
            tracing::debug!(dropped, "Reply queue closed with pending replies");
        }
        dropped
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_redeemed_once() {
        let mut queue = ReplyQueue::new(Duration::from_millis(1000));
        let a = queue.schedule("first").unwrap();
        let b = queue.schedule("second").unwrap();
        assert_ne!(a.token, b.token);
        assert_eq!(a.delay, Duration::from_millis(1000));

        assert_eq!(queue.take(b.token).as_deref(), Some("second"));
        assert_eq!(queue.take(b.token), None);
        assert_eq!(queue.pending_len(), 1);
    }

    #[test]
    fn test_close_discards_pending() {
        let mut queue = ReplyQueue::new(Duration::from_millis(10));
        let pending = queue.schedule("late").unwrap();
        assert_eq!(queue.close(), 1);
        assert!(queue.is_closed());
        assert_eq!(queue.take(pending.token), None);
        assert!(queue.schedule("after close").is_none());
    }
}
