//! Screen controllers
//!
//! One owned value per screen holds its mock dataset and every local
//! mutation. Handlers check their preconditions, update in place and return
//! a [`Notice`](crate::notice::Notice) or an
//! [`ActionError`](crate::error::ActionError) for the toast layer.

mod activities;
mod auth;
mod blog;
mod chat;
mod crowdfunding;
mod dashboard;
mod experts;
mod finn;
mod reply;
mod wallet;

pub use activities::{Affirmations, BreathPhase, Breathing};
pub use auth::{AuthFlow, AuthMode, AuthOutcome, Credentials, ExpertApplication, Role};
pub use blog::{
    BlogFeed, Draft, FeedStats, COMMENT_REWARD, FEED_STATS, LIKE_REWARD, PUBLISH_REWARD,
    SHARE_REWARD,
};
pub use chat::{SendOutcome, WorldChat};
pub use crowdfunding::{parse_amount, CampaignBoard, CommunityStats, COMMUNITY_STATS};
pub use dashboard::{
    Oasis, StatCard, GOALS, JOURNEY_PROGRESS, LEVEL, STAT_CARDS, STREAK_DAYS, WEEKLY_ACTIVITY,
};
pub use experts::{ConnectMode, ExpertDirectory};
pub use finn::{Bubble, BubbleGame, FinnSession, OutfitStatus, BUBBLE_COUNT};
pub use reply::{PendingReply, ReplyQueue, ReplyToken};
pub use wallet::Wallet;
