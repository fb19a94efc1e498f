//! Filter to keep only cafés with power outlets.

use crate::traits::Filter;
use catalog::Cafe;

/// Removes cafés without outlets.
pub struct OutletsFilter;

impl Filter for OutletsFilter {
    fn name(&self) -> &str {
        "OutletsFilter"
    }

    fn matches(&self, cafe: &Cafe) -> bool {
        cafe.outlets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::CafeCatalog;

    #[test]
    fn test_outlets_filter() {
        let catalog = CafeCatalog::sample();
        let kept: Vec<&str> = catalog
            .cafes()
            .iter()
            .filter(|c| OutletsFilter.matches(c))
            .map(|c| c.id.as_str())
            .collect();

        assert_eq!(kept, vec!["1", "2", "3", "5"]);
    }
}
