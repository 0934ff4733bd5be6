//! Timers for delayed companion replies
//!
//! Each screen that schedules replies owns one [`ReplyTimers`]. Dropping a
//! `Timeout` cancels it, so clearing the map on cleanup stops every reply
//! that has not fired yet. A timer that fires removes its own entry.

use std::collections::HashMap;

use echo::session::{PendingReply, ReplyToken};
use gloo_timers::callback::Timeout;
use leptos::*;

#[derive(Clone, Copy)]
pub struct ReplyTimers(StoredValue<HashMap<ReplyToken, Timeout>>);

impl Default for ReplyTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyTimers {
    pub fn new() -> Self {
        Self(store_value(HashMap::new()))
    }

    /// Arm a timer that redeems `pending` once its delay has elapsed
    pub fn arm<F>(&self, pending: PendingReply, deliver: F)
    where
        F: FnOnce(ReplyToken) + 'static,
    {
        let token = pending.token;
        let timers = self.0;
        let timeout = Timeout::new(delay_millis(pending), move || {
            timers.try_update_value(|armed| armed.remove(&token));
            deliver(token);
        });
        self.0.try_update_value(|armed| armed.insert(token, timeout));
    }

    /// Timers that have not fired yet
    pub fn armed(&self) -> usize {
        self.0.try_with_value(HashMap::len).unwrap_or(0)
    }

    pub fn cancel_all(&self) {
        let cancelled = self
            .0
            .try_update_value(|armed| {
                let n = armed.len();
                armed.clear();
                n
            })
            .unwrap_or(0);
        if cancelled > 0 {
            log::debug!("dropped {} reply timers", cancelled);
        }
    }
}

fn delay_millis(pending: PendingReply) -> u32 {
    u32::try_from(pending.delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use echo::session::ReplyQueue;
    use std::time::Duration;

    #[test]
    fn test_delay_millis() {
        let mut queue = ReplyQueue::new(Duration::from_millis(1000));
        let pending = queue.schedule("hi").unwrap();
        assert_eq!(delay_millis(pending), 1000);

        let mut queue = ReplyQueue::new(Duration::from_secs(u64::MAX / 1000));
        let pending = queue.schedule("later").unwrap();
        assert_eq!(delay_millis(pending), u32::MAX);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use echo::session::ReplyQueue;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn fired_timers_leave_the_map() {
        let runtime = create_runtime();
        let timers = ReplyTimers::new();
        let mut queue = ReplyQueue::new(Duration::from_millis(5));
        let delivered = Rc::new(RefCell::new(Vec::new()));

        for body in ["one", "two", "three"] {
            let pending = queue.schedule(body).unwrap();
            let delivered = Rc::clone(&delivered);
            timers.arm(pending, move |token| delivered.borrow_mut().push(token));
        }
        assert_eq!(timers.armed(), 3);

        TimeoutFuture::new(50).await;
        assert_eq!(delivered.borrow().len(), 3);
        assert_eq!(timers.armed(), 0);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn cancelled_timers_never_deliver() {
        let runtime = create_runtime();
        let timers = ReplyTimers::new();
        let mut queue = ReplyQueue::new(Duration::from_millis(5));
        let delivered = Rc::new(RefCell::new(0));

        let pending = queue.schedule("late").unwrap();
        let counter = Rc::clone(&delivered);
        timers.arm(pending, move |_| *counter.borrow_mut() += 1);
        timers.cancel_all();
        assert_eq!(timers.armed(), 0);

        TimeoutFuture::new(50).await;
        assert_eq!(*delivered.borrow(), 0);

        runtime.dispose();
    }
}
