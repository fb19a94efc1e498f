//! Filter on advertised dietary accommodations.

use crate::traits::Filter;
use catalog::{Cafe, DietaryTag};
use std::collections::BTreeSet;

/// Keeps cafés offering at least one of the requested dietary tags.
///
/// ## Algorithm
/// Any-match: the café's tags and the requested tags must intersect.
/// An empty request places no constraint.
pub struct DietaryFilter {
    tags: BTreeSet<DietaryTag>,
}

impl DietaryFilter {
    pub fn new(tags: BTreeSet<DietaryTag>) -> Self {
        Self { tags }
    }
}

impl Filter for DietaryFilter {
    fn name(&self) -> &str {
        "DietaryFilter"
    }

    fn matches(&self, cafe: &Cafe) -> bool {
        self.tags.is_empty() || cafe.offers_any(&self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::CafeCatalog;

    fn passing_ids(filter: &DietaryFilter) -> Vec<String> {
        CafeCatalog::sample()
            .cafes()
            .iter()
            .filter(|c| filter.matches(c))
            .map(|c| c.id.to_string())
            .collect()
    }

    #[test]
    fn test_single_tag() {
        let filter = DietaryFilter::new([DietaryTag::Halal].into_iter().collect());
        assert_eq!(passing_ids(&filter), vec!["1", "4"]);
    }

    #[test]
    fn test_multiple_tags_any_match() {
        // Halal or Kosher, not Halal and Kosher
        let filter = DietaryFilter::new([DietaryTag::Halal, DietaryTag::Kosher].into_iter().collect());
        assert_eq!(passing_ids(&filter), vec!["1", "3", "4", "6"]);
    }

    #[test]
    fn test_empty_request_keeps_everything() {
        let filter = DietaryFilter::new(BTreeSet::new());
        assert_eq!(passing_ids(&filter).len(), 6);
    }
}
