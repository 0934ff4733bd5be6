//! Bloom Stories feed

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::wallet::Wallet;
use crate::catalog::{seed, Author, BlogPost};
use crate::error::{ActionError, ActionResult};
use crate::filter::{self, BlogFacets, FilterState, Selection};
use crate::notice::Notice;

/// Seeds credited for publishing a story
pub const PUBLISH_REWARD: u32 = 25;
/// Seeds credited to the reader for commenting
pub const COMMENT_REWARD: u32 = 3;
/// Seeds the author receives per like
pub const LIKE_REWARD: u32 = 5;
/// Seeds the author receives per share
pub const SHARE_REWARD: u32 = 2;

/// Level shown on stories written by the local user
const OWN_LEVEL: u32 = 12;

/// Headline figures above the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedStats {
    pub stories_shared: &'static str,
    pub seeds_earned: &'static str,
    pub positive_impact: &'static str,
}

pub const FEED_STATS: FeedStats = FeedStats {
    stories_shared: "324",
    seeds_earned: "2.1K",
    positive_impact: "89%",
};

/// Story composer fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    /// Comma-separated
    pub tags: String,
}

impl Draft {
    /// Non-empty trimmed entries of the tag field
    pub fn parsed_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }
}

pub struct BlogFeed {
    posts: Vec<BlogPost>,
    liked: HashSet<u32>,
    composing: bool,
    draft: Draft,
    wallet: Wallet,
    filter: FilterState<BlogFacets>,
}

impl BlogFeed {
    pub fn new(starting_seeds: u32, now: DateTime<Utc>) -> Self {
        Self {
            posts: seed::blog_posts(now),
            liked: HashSet::new(),
            composing: false,
            draft: Draft::default(),
            wallet: Wallet::new(starting_seeds),
            filter: FilterState::default(),
        }
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn seeds(&self) -> u32 {
        self.wallet.balance()
    }

    pub fn has_liked(&self, id: u32) -> bool {
        self.liked.contains(&id)
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn toggle_composer(&mut self) {
        self.composing = !self.composing;
    }

    /// Close the composer and throw the draft away
    pub fn cancel_draft(&mut self) {
        self.composing = false;
        self.draft = Draft::default();
    }

    /// Every tag used in the feed, first-seen order
    pub fn tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.posts
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .filter(|t| seen.insert(*t))
            .collect()
    }

    pub fn filter(&self) -> &FilterState<BlogFacets> {
        &self.filter
    }

    pub fn set_tag(&mut self, tag: Selection) {
        self.filter.facets.tag = tag;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn visible(&self) -> Vec<&BlogPost> {
        filter::apply(&self.posts, &self.filter)
    }

    /// Publish the draft as a new story at the top of the feed
    pub fn publish(&mut self, now: DateTime<Utc>) -> ActionResult<Notice> {
        let title = self.draft.title.trim();
        let content = self.draft.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(ActionError::MissingStoryFields);
        }

        let id = self.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let post = BlogPost {
            id,
            author: Author {
                name: "You".to_string(),
                level: OWN_LEVEL,
                verified: false,
            },
            title: title.to_string(),
            content: content.to_string(),
            likes: 0,
            comments: 0,
            shares: 0,
            posted_at: now,
            tags: self.draft.parsed_tags(),
            seeds_earned: PUBLISH_REWARD,
        };
        tracing::info!(post = id, title = %post.title, "Story published");

        self.posts.insert(0, post);
        self.wallet.credit(PUBLISH_REWARD);
        self.cancel_draft();
        Ok(Notice::success(format!(
            "Post created! You earned {} Seeds! 🌱",
            PUBLISH_REWARD
        )))
    }

    fn post_mut(&mut self, id: u32) -> ActionResult<&mut BlogPost> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ActionError::not_found("Story", id))
    }

    pub fn like(&mut self, id: u32) -> ActionResult<Notice> {
        if self.liked.contains(&id) {
            return Err(ActionError::AlreadyLiked);
        }
        let post = self.post_mut(id)?;
        post.likes = post.likes.saturating_add(1);
        post.seeds_earned = post.seeds_earned.saturating_add(LIKE_REWARD);
        self.liked.insert(id);
        Ok(Notice::success(format!(
            "Liked! Author earned {} Seeds 🌱",
            LIKE_REWARD
        )))
    }

    pub fn comment(&mut self, id: u32) -> ActionResult<Notice> {
        let post = self.post_mut(id)?;
        post.comments = post.comments.saturating_add(1);
        self.wallet.credit(COMMENT_REWARD);
        Ok(Notice::success(format!(
            "Comment added! You earned {} Seeds 🌱",
            COMMENT_REWARD
        )))
    }

    pub fn share(&mut self, id: u32) -> ActionResult<Notice> {
        let post = self.post_mut(id)?;
        post.shares = post.shares.saturating_add(1);
        post.seeds_earned = post.seeds_earned.saturating_add(SHARE_REWARD);
        Ok(Notice::success(format!(
            "Post shared! Author earned {} Seeds 🌱",
            SHARE_REWARD
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> BlogFeed {
        BlogFeed::new(256, Utc::now())
    }

    #[test]
    fn test_publish_prepends_and_rewards() {
        let mut feed = feed();
        feed.toggle_composer();
        *feed.draft_mut() = Draft {
            title: "  First bloom ".into(),
            content: "Writing this helped.".into(),
            tags: "healing, , gratitude ,".into(),
        };

        let notice = feed.publish(Utc::now()).unwrap();
        assert_eq!(notice.message, "Post created! You earned 25 Seeds! 🌱");

        let post = &feed.posts()[0];
        assert_eq!(post.id, 4);
        assert_eq!(post.title, "First bloom");
        assert_eq!(post.author.name, "You");
        assert_eq!(post.tags, vec!["healing", "gratitude"]);
        assert_eq!(feed.posts().len(), 4);
        assert_eq!(feed.seeds(), 281);
        assert_eq!(feed.draft(), &Draft::default());
        assert!(!feed.is_composing());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let mut feed = feed();
        feed.draft_mut().content = "Some body text".into();
        let before = feed.posts().to_vec();

        assert_eq!(feed.publish(Utc::now()), Err(ActionError::MissingStoryFields));
        assert_eq!(feed.posts(), before.as_slice());
        assert_eq!(feed.seeds(), 256);
        assert_eq!(feed.draft().content, "Some body text");
    }

    #[test]
    fn test_whitespace_content_is_rejected() {
        let mut feed = feed();
        feed.draft_mut().title = "Title".into();
        feed.draft_mut().content = "   \n".into();
        assert_eq!(feed.publish(Utc::now()), Err(ActionError::MissingStoryFields));
        assert_eq!(feed.posts().len(), 3);
    }

    #[test]
    fn test_like_once_per_story() {
        let mut feed = feed();
        feed.like(1).unwrap();
        assert_eq!(feed.posts()[0].likes, 48);
        assert!(feed.has_liked(1));

        assert_eq!(feed.like(1), Err(ActionError::AlreadyLiked));
        assert_eq!(feed.posts()[0].likes, 48);

        feed.like(2).unwrap();
        assert_eq!(feed.posts()[1].likes, 90);
    }

    #[test]
    fn test_comment_and_share() {
        let mut feed = feed();
        feed.comment(3).unwrap();
        feed.share(3).unwrap();
        let post = &feed.posts()[2];
        assert_eq!(post.comments, 32);
        assert_eq!(post.shares, 43);
        assert_eq!(feed.seeds(), 259);
        assert!(feed.comment(99).is_err());
    }

    #[test]
    fn test_tags_and_tag_filter() {
        let mut feed = feed();
        let tags = feed.tags();
        assert_eq!(tags.len(), 9);
        assert_eq!(tags.iter().filter(|t| **t == "mental-health").count(), 1);

        feed.set_tag(Selection::only("peace"));
        assert_eq!(feed.visible().len(), 1);
        feed.clear_filters();
        assert_eq!(feed.visible().len(), 3);
    }
}
