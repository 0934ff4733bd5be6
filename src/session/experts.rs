//! Expert directory screen

use crate::catalog::{seed, Expert};
use crate::error::{ActionError, ActionResult};
use crate::filter::{self, ExpertFacets, FilterState, Selection};
use crate::notice::Notice;

/// How the user wants to reach an expert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectMode {
    Chat,
    Call,
    Video,
}

impl ConnectMode {
    fn action_text(&self) -> &'static str {
        match self {
            ConnectMode::Chat => "Starting secure Haven chat",
            ConnectMode::Call => "Initiating voice call",
            ConnectMode::Video => "Starting video session",
        }
    }
}

pub struct ExpertDirectory {
    experts: Vec<Expert>,
    filter: FilterState<ExpertFacets>,
}

impl Default for ExpertDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpertDirectory {
    pub fn new() -> Self {
        Self::with_experts(seed::experts())
    }

    pub fn with_experts(experts: Vec<Expert>) -> Self {
        Self {
            experts,
            filter: FilterState::default(),
        }
    }

    pub fn experts(&self) -> &[Expert] {
        &self.experts
    }

    pub fn filter(&self) -> &FilterState<ExpertFacets> {
        &self.filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_specialty(&mut self, specialty: Selection) {
        self.filter.facets.specialty = specialty;
    }

    pub fn set_location(&mut self, location: Selection) {
        self.filter.facets.location = location;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Experts matching the current filter, in directory order
    pub fn visible(&self) -> Vec<&Expert> {
        filter::apply(&self.experts, &self.filter)
    }

    pub fn connect(&self, id: u32, mode: ConnectMode) -> ActionResult<Notice> {
        let expert = self
            .experts
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ActionError::not_found("Expert", id))?;

        if !expert.availability.accepts_sessions() {
            return Err(ActionError::ExpertOffline);
        }

        tracing::debug!(expert = id, ?mode, "Connecting with expert");
        Ok(Notice::success(format!(
            "{} with {}! 🔒",
            mode.action_text(),
            expert.name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_messages() {
        let directory = ExpertDirectory::new();
        let notice = directory.connect(1, ConnectMode::Chat).unwrap();
        assert_eq!(notice.message, "Starting secure Haven chat with Dr. Sarah Chen! 🔒");

        // Busy experts still take calls
        let notice = directory.connect(2, ConnectMode::Call).unwrap();
        assert_eq!(notice.message, "Initiating voice call with Dr. Marcus Johnson! 🔒");

        let notice = directory.connect(3, ConnectMode::Video).unwrap();
        assert!(notice.message.starts_with("Starting video session"));
    }

    #[test]
    fn test_offline_expert_is_refused() {
        let directory = ExpertDirectory::new();
        assert_eq!(
            directory.connect(5, ConnectMode::Chat),
            Err(ActionError::ExpertOffline)
        );
    }

    #[test]
    fn test_unknown_expert() {
        let directory = ExpertDirectory::new();
        assert!(matches!(
            directory.connect(99, ConnectMode::Chat),
            Err(ActionError::NotFound { kind: "Expert", .. })
        ));
    }

    #[test]
    fn test_filter_controls() {
        let mut directory = ExpertDirectory::new();
        directory.set_query("anxiety");
        assert_eq!(directory.visible().len(), 1);

        directory.set_query("");
        directory.set_location(Selection::only("Austin, TX"));
        assert_eq!(directory.visible()[0].name, "Dr. Emily Rodriguez");

        directory.set_specialty(Selection::only("Trauma"));
        assert!(directory.visible().is_empty());

        directory.clear_filters();
        assert_eq!(directory.visible().len(), 5);
    }
}
