//! List filtering
//!
//! One pure composition shared by the Experts, Crowdfunding and Blog screens:
//!
//! - **Query**: case-insensitive substring over an item's searchable fields
//! - **Facets**: categorical selectors, each either `All` or one exact value
//!
//! Predicates are ANDed. Order is preserved and nothing is ranked, so applying
//! the same state to its own output returns the output unchanged.
//!
//! ```rust,ignore
//! use echo::catalog::seed;
//! use echo::filter::{apply, ExpertFacets, FilterState, Selection};
//!
//! let experts = seed::experts();
//! let state = FilterState::new(ExpertFacets::default())
//!     .query("anxiety")
//!     .facets(ExpertFacets { location: Selection::only("San Francisco, CA"), ..Default::default() });
//! let visible = apply(&experts, &state);
//! ```

mod facets;

pub use facets::{BlogFacets, CampaignFacets, ExpertFacets};

/// Selector value meaning "no constraint"
pub const ALL: &str = "all";

/// A single categorical selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn only(value: impl Into<String>) -> Self {
        Selection::Only(value.into())
    }

    /// Parse a `<select>` value; the `"all"` sentinel maps to [`Selection::All`]
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    /// Inverse of [`Selection::from_value`]
    pub fn as_value(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Only(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Exact match against a single-valued attribute
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    /// Exact membership in a multi-valued attribute
    pub fn admits_any<S: AsRef<str>>(&self, values: &[S]) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => values.iter().any(|v| v.as_ref() == wanted),
        }
    }
}

/// Items that can be matched by the free-text query
pub trait Searchable {
    /// Text fields the query is matched against
    fn search_fields(&self) -> Vec<&str>;
}

/// A set of categorical selectors for item type `T`
pub trait Facets<T> {
    /// True when every selector admits the item
    fn admits(&self, item: &T) -> bool;
}

/// Query text plus facet selections owned by one screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState<F> {
    pub query: String,
    pub facets: F,
}

impl<F: Default> FilterState<F> {
    pub fn new(facets: F) -> Self {
        Self {
            query: String::new(),
            facets,
        }
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn facets(mut self, facets: F) -> Self {
        self.facets = facets;
        self
    }

    /// Reset the query and every selector to `All`
    pub fn clear(&mut self) {
        self.query.clear();
        self.facets = F::default();
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}

/// Case-insensitive substring test over an item's searchable fields.
///
/// `needle` must already be lowercase.
fn query_matches<T: Searchable>(item: &T, needle: &str) -> bool {
    needle.is_empty()
        || item
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Filter `items` by `state`, preserving input order.
///
/// An empty result is a normal outcome rendered as "no results".
pub fn apply<'a, T, F, I>(items: I, state: &FilterState<F>) -> Vec<&'a T>
where
    T: Searchable + 'a,
    F: Facets<T>,
    I: IntoIterator<Item = &'a T>,
{
    let needle = state.query.to_lowercase();
    items
        .into_iter()
        .filter(|item| query_matches(*item, &needle) && state.facets.admits(item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use chrono::Utc;

    fn names<'a>(experts: &[&'a crate::catalog::Expert]) -> Vec<&'a str> {
        experts.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_selection_from_value() {
        assert_eq!(Selection::from_value("all"), Selection::All);
        assert_eq!(Selection::from_value("ADHD"), Selection::only("ADHD"));
        assert_eq!(Selection::only("ADHD").as_value(), "ADHD");
        assert_eq!(Selection::All.as_value(), ALL);
    }

    #[test]
    fn test_selection_admits() {
        assert!(Selection::All.admits("anything"));
        assert!(Selection::only("Therapy").admits("Therapy"));
        assert!(!Selection::only("Therapy").admits("Family Therapy"));
        assert!(Selection::only("ADHD").admits_any(&["Bipolar", "ADHD"]));
        assert!(!Selection::only("ADHD").admits_any::<&str>(&[]));
    }

    #[test]
    fn test_empty_state_keeps_everything_in_order() {
        let experts = seed::experts();
        let state = FilterState::new(ExpertFacets::default());
        let visible = apply(&experts, &state);
        assert_eq!(visible.len(), experts.len());
        let ids: Vec<u32> = visible.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_anxiety_query_finds_only_sarah_chen() {
        let experts = seed::experts();
        let state = FilterState::new(ExpertFacets::default()).query("anxiety");
        assert_eq!(names(&apply(&experts, &state)), vec!["Dr. Sarah Chen"]);
    }

    #[test]
    fn test_query_is_case_insensitive_on_names() {
        let experts = seed::experts();
        for expert in &experts {
            for query in [expert.name.to_uppercase(), expert.name.to_lowercase()] {
                let state = FilterState::new(ExpertFacets::default()).query(query);
                let visible = apply(&experts, &state);
                assert!(visible.iter().any(|e| e.id == expert.id));
            }
        }

        let state = FilterState::new(ExpertFacets::default()).query("pAtEl");
        assert_eq!(names(&apply(&experts, &state)), vec!["Dr. Priya Patel"]);
    }

    #[test]
    fn test_query_does_not_search_expert_descriptions() {
        let experts = seed::experts();
        // "holistic" appears only in Dr. Johnson's description
        let state = FilterState::new(ExpertFacets::default()).query("holistic");
        assert!(apply(&experts, &state).is_empty());
    }

    #[test]
    fn test_specialty_facet_is_exact_membership() {
        let experts = seed::experts();
        let state = FilterState::new(ExpertFacets {
            specialty: Selection::only("ADHD"),
            ..Default::default()
        });
        assert_eq!(
            names(&apply(&experts, &state)),
            vec!["Dr. Marcus Johnson", "Dr. Priya Patel"]
        );

        // "Addiction" is offered as an option but only "Addiction Recovery" exists
        let state = FilterState::new(ExpertFacets {
            specialty: Selection::only("Addiction"),
            ..Default::default()
        });
        assert!(apply(&experts, &state).is_empty());
    }

    #[test]
    fn test_facets_and_query_are_anded() {
        let experts = seed::experts();
        let state = FilterState::new(ExpertFacets {
            specialty: Selection::only("ADHD"),
            location: Selection::only("Seattle, WA"),
        })
        .query("dr.");
        assert_eq!(names(&apply(&experts, &state)), vec!["Dr. Priya Patel"]);

        let state = state.query("marcus");
        assert!(apply(&experts, &state).is_empty());
    }

    #[test]
    fn test_all_is_equivalent_to_dropping_the_predicate() {
        let campaigns = seed::campaigns();
        for query in ["", "therapy", "student", "zzz"] {
            let with_all = FilterState::new(CampaignFacets {
                category: Selection::All,
            })
            .query(query);
            let expected: Vec<u32> = campaigns
                .iter()
                .filter(|c| {
                    let q = query.to_lowercase();
                    c.title.to_lowercase().contains(&q) || c.description.to_lowercase().contains(&q)
                })
                .map(|c| c.id)
                .collect();
            let got: Vec<u32> = apply(&campaigns, &with_all).iter().map(|c| c.id).collect();
            assert_eq!(got, expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_veteran_query_finds_one_campaign() {
        let campaigns = seed::campaigns();
        let state = FilterState::new(CampaignFacets::default()).query("veteran");
        let visible = apply(&campaigns, &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "PTSD Treatment for Veteran");

        let state = state.facets(CampaignFacets {
            category: Selection::only("Specialized Treatment"),
        });
        assert_eq!(apply(&campaigns, &state).len(), 1);

        let state = state.facets(CampaignFacets {
            category: Selection::only("Therapy"),
        });
        assert!(apply(&campaigns, &state).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let now = Utc::now();
        let posts = seed::blog_posts(now);
        let states = [
            FilterState::new(BlogFacets::default()),
            FilterState::new(BlogFacets::default()).query("the"),
            FilterState::new(BlogFacets {
                tag: Selection::only("mental-health"),
            }),
            FilterState::new(BlogFacets {
                tag: Selection::only("mental-health"),
            })
            .query("GRATITUDE"),
        ];
        for state in &states {
            let once = apply(&posts, state);
            let twice = apply(once.iter().copied(), state);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_blog_tag_facet() {
        let posts = seed::blog_posts(Utc::now());
        let state = FilterState::new(BlogFacets {
            tag: Selection::only("mental-health"),
        });
        let ids: Vec<u32> = apply(&posts, &state).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_clear_resets_query_and_facets() {
        let mut state = FilterState::new(ExpertFacets::default())
            .query("chen")
            .facets(ExpertFacets {
                specialty: Selection::only("Trauma"),
                location: Selection::only("Austin, TX"),
            });
        assert!(state.has_query());
        state.clear();
        assert_eq!(state, FilterState::new(ExpertFacets::default()));
    }
}
