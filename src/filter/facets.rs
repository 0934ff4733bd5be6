//! Searchable fields and facet sets for each listed record type

use super::{Facets, Searchable, Selection};
use crate::catalog::{BlogPost, Campaign, Expert};

impl Searchable for Expert {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(1 + self.specialties.len());
        fields.push(self.name.as_str());
        fields.extend(self.specialties.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Campaign {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }
}

/// Specialty and location selectors for the expert directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpertFacets {
    pub specialty: Selection,
    pub location: Selection,
}

impl Facets<Expert> for ExpertFacets {
    fn admits(&self, item: &Expert) -> bool {
        self.specialty.admits_any(&item.specialties) && self.location.admits(&item.location)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignFacets {
    pub category: Selection,
}

impl Facets<Campaign> for CampaignFacets {
    fn admits(&self, item: &Campaign) -> bool {
        self.category.admits(&item.category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFacets {
    pub tag: Selection,
}

impl Facets<BlogPost> for BlogFacets {
    fn admits(&self, item: &BlogPost) -> bool {
        self.tag.admits_any(&item.tags)
    }
}
