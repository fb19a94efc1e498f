//! The query entry point: filter, then sort.

use crate::config::FilterConfig;
use crate::filter_pipeline::FilterPipeline;
use catalog::Cafe;

/// Run a query over `cafes`.
///
/// Returns references into `cafes`, filtered by every active constraint in
/// `config` and ordered by `config.sort_key`. Cafés with equal sort keys
/// keep their input order. The input is never modified and an empty result
/// is not an error.
pub fn query<'a>(cafes: &'a [Cafe], config: &FilterConfig) -> Vec<&'a Cafe> {
    let pipeline = FilterPipeline::from_config(config);
    let mut results = pipeline.apply(cafes);
    config.sort_key.sort(&mut results);

    tracing::debug!(
        sort = %config.sort_key,
        input = cafes.len(),
        output = results.len(),
        "Query complete"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortKey;
    use catalog::{CafeCatalog, DietaryTag, Seating};

    fn ids(results: &[&Cafe]) -> Vec<String> {
        results.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn test_no_filters_returns_everything_sorted() {
        let catalog = CafeCatalog::sample();
        let config = FilterConfig::new().with_sort(SortKey::Rating);

        let results = query(catalog.cafes(), &config);
        assert_eq!(ids(&results), vec!["5", "1", "3", "4", "2", "6"]);
    }

    #[test]
    fn test_halal_by_distance() {
        let catalog = CafeCatalog::sample();
        let config = FilterConfig::new().toggle_dietary(DietaryTag::Halal);

        let results = query(catalog.cafes(), &config);
        let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["The Cozy Corner", "Sunny Side Café"]);
    }

    #[test]
    fn test_conflicting_filters_give_empty_result() {
        let catalog = CafeCatalog::sample();
        let config = FilterConfig::new()
            .toggle_dietary(DietaryTag::GlutenFree)
            .toggle_seating(Seating::BarSeating);

        assert!(query(catalog.cafes(), &config).is_empty());
    }

    #[test]
    fn test_radius_and_noise() {
        let catalog = CafeCatalog::sample();
        let config = FilterConfig::new().within_km(1.0).with_sort(SortKey::Noise);

        let results = query(catalog.cafes(), &config);
        assert_eq!(ids(&results), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_source_is_untouched() {
        let catalog = CafeCatalog::sample();
        let before = catalog.cafes().to_vec();

        let config = FilterConfig::new().with_sort(SortKey::Study).with_outlets_only(true);
        let _ = query(catalog.cafes(), &config);

        assert_eq!(catalog.cafes(), before.as_slice());
    }
}
