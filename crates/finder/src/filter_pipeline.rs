//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::config::FilterConfig;
use crate::filters::{DietaryFilter, OutletsFilter, RadiusFilter, SeatingFilter};
use crate::traits::Filter;
use catalog::Cafe;

/// Chains multiple filters together into a processing pipeline.
///
/// A café survives the pipeline only if every filter matches it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(DietaryFilter::new(tags))
///     .add_filter(OutletsFilter);
///
/// let kept = pipeline.apply(catalog.cafes());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build the pipeline for a query configuration.
    ///
    /// Only constraints that are actually set get a filter, so an empty
    /// config yields an empty pipeline.
    pub fn from_config(config: &FilterConfig) -> Self {
        let mut pipeline = Self::new();
        if !config.dietary.is_empty() {
            pipeline = pipeline.add_filter(DietaryFilter::new(config.dietary.clone()));
        }
        if !config.seating.is_empty() {
            pipeline = pipeline.add_filter(SeatingFilter::new(config.seating.clone()));
        }
        if config.outlets_only {
            pipeline = pipeline.add_filter(OutletsFilter);
        }
        if let Some(max_km) = config.max_distance_km {
            pipeline = pipeline.add_filter(RadiusFilter::new(max_km));
        }
        pipeline
    }

    /// Names of the filters, in application order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence, preserving input order.
    ///
    /// ## Algorithm
    /// 1. Start with every input café
    /// 2. For each filter in order, retain the cafés it matches and log
    ///    the count before and after
    /// 3. Return what is left
    pub fn apply<'a, I>(&self, cafes: I) -> Vec<&'a Cafe>
    where
        I: IntoIterator<Item = &'a Cafe>,
    {
        let mut current: Vec<&'a Cafe> = cafes.into_iter().collect();
        for filter in &self.filters {
            let before = current.len();
            current.retain(|cafe| filter.matches(cafe));
            tracing::debug!(
                "Filter applied: {} (input count: {}, output count: {})",
                filter.name(),
                before,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{CafeCatalog, DietaryTag, Seating};

    #[test]
    fn test_empty_pipeline() {
        let catalog = CafeCatalog::sample();
        let pipeline = FilterPipeline::new();

        let kept = pipeline.apply(catalog.cafes());
        assert_eq!(kept.len(), 6);
    }

    #[test]
    fn test_single_filter() {
        let catalog = CafeCatalog::sample();
        let pipeline = FilterPipeline::new().add_filter(OutletsFilter);

        let kept = pipeline.apply(catalog.cafes());
        assert_eq!(kept.len(), 4);
        assert!(kept.iter().all(|c| c.outlets));
    }

    #[test]
    fn test_filters_are_anded() {
        let catalog = CafeCatalog::sample();
        let pipeline = FilterPipeline::new()
            .add_filter(DietaryFilter::new([DietaryTag::Vegetarian].into_iter().collect()))
            .add_filter(OutletsFilter);

        let kept = pipeline.apply(catalog.cafes());
        let ids: Vec<&str> = kept.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "5"]);
    }

    #[test]
    fn test_from_config_only_adds_active_filters() {
        assert!(FilterPipeline::from_config(&FilterConfig::default()).is_empty());

        let config = FilterConfig::new()
            .toggle_seating(Seating::Couches)
            .with_outlets_only(true);
        let pipeline = FilterPipeline::from_config(&config);
        assert_eq!(pipeline.filter_names(), vec!["SeatingFilter", "OutletsFilter"]);
    }
}
