//! State Management
//!
//! Global toast state and per-screen reply timers.

pub mod global;
pub mod replies;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use replies::ReplyTimers;
