//! Crowdfunding screen

use crate::catalog::{seed, Campaign};
use crate::error::{ActionError, ActionResult};
use crate::filter::{self, CampaignFacets, FilterState, Selection};
use crate::notice::Notice;

/// Community-wide totals shown above the campaign list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityStats {
    pub total_raised: u32,
    pub supporters: u32,
    pub lives_helped: u32,
    pub active_campaigns: u32,
}

pub const COMMUNITY_STATS: CommunityStats = CommunityStats {
    total_raised: 87_420,
    supporters: 1_247,
    lives_helped: 156,
    active_campaigns: 45,
};

/// Parse the custom support amount field. Blank, malformed and zero
/// amounts are all rejected.
pub fn parse_amount(input: &str) -> ActionResult<u32> {
    let cleaned = input.trim().trim_start_matches('$').trim();
    match cleaned.parse::<u32>() {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err(ActionError::InvalidAmount),
    }
}

pub struct CampaignBoard {
    campaigns: Vec<Campaign>,
    filter: FilterState<CampaignFacets>,
}

impl Default for CampaignBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignBoard {
    pub fn new() -> Self {
        Self {
            campaigns: seed::campaigns(),
            filter: FilterState::default(),
        }
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn filter(&self) -> &FilterState<CampaignFacets> {
        &self.filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_category(&mut self, category: Selection) {
        self.filter.facets.category = category;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn visible(&self) -> Vec<&Campaign> {
        filter::apply(&self.campaigns, &self.filter)
    }

    fn campaign_mut(&mut self, id: u32) -> ActionResult<&mut Campaign> {
        self.campaigns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ActionError::not_found("Campaign", id))
    }

    /// Record a contribution of `amount` dollars
    pub fn support(&mut self, id: u32, amount: u32) -> ActionResult<Notice> {
        if amount == 0 {
            return Err(ActionError::InvalidAmount);
        }
        let campaign = self.campaign_mut(id)?;
        campaign.raised_amount = campaign.raised_amount.saturating_add(amount);
        campaign.supporters_count = campaign.supporters_count.saturating_add(1);

        tracing::info!(
            campaign = id,
            amount,
            raised = campaign.raised_amount,
            "Campaign supported"
        );
        Ok(Notice::success(format!(
            "Thank you for supporting with ${}! Your kindness makes a difference. 💚",
            amount
        )))
    }

    pub fn share(&self, id: u32) -> ActionResult<Notice> {
        if !self.campaigns.iter().any(|c| c.id == id) {
            return Err(ActionError::not_found("Campaign", id));
        }
        Ok(Notice::success(
            "Campaign link copied to clipboard! Share the hope! 🌟",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_updates_counters() {
        let mut board = CampaignBoard::new();
        let notice = board.support(2, 50).unwrap();
        assert_eq!(
            notice.message,
            "Thank you for supporting with $50! Your kindness makes a difference. 💚"
        );
        let campaign = &board.campaigns()[1];
        assert_eq!(campaign.raised_amount, 570);
        assert_eq!(campaign.supporters_count, 29);
    }

    #[test]
    fn test_zero_support_is_rejected() {
        let mut board = CampaignBoard::new();
        assert_eq!(board.support(1, 0), Err(ActionError::InvalidAmount));
        assert_eq!(board.campaigns()[0].raised_amount, 1680);
    }

    #[test]
    fn test_overfunded_progress_is_capped() {
        let mut board = CampaignBoard::new();
        board.support(2, 1000).unwrap();
        assert_eq!(board.campaigns()[1].progress_percent(), 100.0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("75"), Ok(75));
        assert_eq!(parse_amount(" $120 "), Ok(120));
        assert_eq!(parse_amount("0"), Err(ActionError::InvalidAmount));
        assert_eq!(parse_amount(""), Err(ActionError::InvalidAmount));
        assert_eq!(parse_amount("-5"), Err(ActionError::InvalidAmount));
        assert_eq!(parse_amount("ten"), Err(ActionError::InvalidAmount));
    }

    #[test]
    fn test_share() {
        let board = CampaignBoard::new();
        assert!(board.share(3).is_ok());
        assert!(board.share(42).is_err());
    }

    #[test]
    fn test_veteran_search() {
        let mut board = CampaignBoard::new();
        board.set_query("veteran");
        assert_eq!(board.visible().len(), 1);
        board.set_category(Selection::only("Specialized Treatment"));
        assert_eq!(board.visible().len(), 1);
        board.clear_filters();
        assert_eq!(board.visible().len(), 5);
    }
}
