//! Filter on seating style.

use crate::traits::Filter;
use catalog::{Cafe, Seating};
use std::collections::BTreeSet;

/// Keeps cafés whose seating is one of the accepted styles.
pub struct SeatingFilter {
    accepted: BTreeSet<Seating>,
}

impl SeatingFilter {
    pub fn new(accepted: BTreeSet<Seating>) -> Self {
        Self { accepted }
    }
}

impl Filter for SeatingFilter {
    fn name(&self) -> &str {
        "SeatingFilter"
    }

    fn matches(&self, cafe: &Cafe) -> bool {
        self.accepted.is_empty() || self.accepted.contains(&cafe.seating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::CafeCatalog;

    #[test]
    fn test_seating_filter() {
        let catalog = CafeCatalog::sample();
        let filter = SeatingFilter::new([Seating::Couches, Seating::Booths].into_iter().collect());

        let names: Vec<&str> = catalog
            .cafes()
            .iter()
            .filter(|c| filter.matches(c))
            .map(|c| c.name.as_str())
            .collect();

        assert_eq!(names, vec!["The Cozy Corner", "Sunny Side Café", "The Daily Grind"]);
    }
}
