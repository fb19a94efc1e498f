//! Optional filter on distance from the user.
//!
//! Only compares the distance already stored on each listing; nothing is
//! geocoded here.

use crate::traits::Filter;
use catalog::Cafe;

/// Keeps cafés within `max_km` kilometres (inclusive).
pub struct RadiusFilter {
    max_km: f64,
}

impl RadiusFilter {
    /// Create a new RadiusFilter.
    ///
    /// # Arguments
    /// * `max_km` - Search radius in kilometres (the app offers 1, 5, 10 and 20)
    pub fn new(max_km: f64) -> Self {
        Self { max_km }
    }
}

impl Filter for RadiusFilter {
    fn name(&self) -> &str {
        "RadiusFilter"
    }

    fn matches(&self, cafe: &Cafe) -> bool {
        cafe.distance_km <= self.max_km
    }
}
