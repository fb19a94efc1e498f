//! Query configuration.
//!
//! A `FilterConfig` is a plain value: it is built fresh for each query and
//! every helper returns a new config rather than mutating in place.

use crate::sort::SortKey;
use catalog::{DietaryTag, Seating};
use std::collections::BTreeSet;

/// Which cafés to keep and how to order them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterConfig {
    /// Any-match: keep cafés offering at least one of these (empty = no constraint)
    pub dietary: BTreeSet<DietaryTag>,
    /// Keep cafés with one of these seating styles (empty = no constraint)
    pub seating: BTreeSet<Seating>,
    pub outlets_only: bool,
    /// Search radius in kilometres (`None` = no constraint)
    pub max_distance_km: Option<f64>,
    pub sort_key: SortKey,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `tag` if it is not selected, deselect it otherwise.
    pub fn toggle_dietary(mut self, tag: DietaryTag) -> Self {
        if !self.dietary.remove(&tag) {
            self.dietary.insert(tag);
        }
        self
    }

    /// Select `seating` if it is not selected, deselect it otherwise.
    pub fn toggle_seating(mut self, seating: Seating) -> Self {
        if !self.seating.remove(&seating) {
            self.seating.insert(seating);
        }
        self
    }

    pub fn with_outlets_only(mut self, outlets_only: bool) -> Self {
        self.outlets_only = outlets_only;
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn within_km(mut self, max_km: f64) -> Self {
        self.max_distance_km = Some(max_km);
        self
    }

    /// Drop every filter but keep the chosen ordering.
    pub fn cleared(self) -> Self {
        Self {
            sort_key: self.sort_key,
            ..Self::default()
        }
    }

    /// True if any constraint would remove a café.
    pub fn has_active_filters(&self) -> bool {
        !self.dietary.is_empty()
            || !self.seating.is_empty()
            || self.outlets_only
            || self.max_distance_km.is_some()
    }
}
