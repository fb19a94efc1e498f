//! Result ordering.

use catalog::Cafe;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How filtered results are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Nearest first
    #[default]
    Distance,
    /// Highest rated first
    Rating,
    /// Quietest first
    Noise,
    /// Most study-friendly first
    Study,
}

/// Returned when a sort key string is not one of the known keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort key '{0}' (expected distance, rating, noise or study)")]
pub struct UnknownSortKey(pub String);

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Distance, SortKey::Rating, SortKey::Noise, SortKey::Study];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Distance => "distance",
            SortKey::Rating => "rating",
            SortKey::Noise => "noise",
            SortKey::Study => "study",
        }
    }

    /// Compare two cafés under this key.
    ///
    /// Ascending for distance and noise, descending for rating and study.
    /// Equal keys compare `Equal` so a stable sort keeps input order.
    pub fn compare(self, a: &Cafe, b: &Cafe) -> Ordering {
        match self {
            SortKey::Distance => a
                .distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal),
            SortKey::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
            SortKey::Noise => a.noise_level.ordinal().cmp(&b.noise_level.ordinal()),
            SortKey::Study => b.study_friendly.cmp(&a.study_friendly),
        }
    }

    /// Sort in place. `sort_by` is stable, which the tie-breaking relies on.
    pub fn sort(self, cafes: &mut [&Cafe]) {
        cafes.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSortKey(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::CafeCatalog;

    fn sorted_ids(key: SortKey) -> Vec<String> {
        let catalog = CafeCatalog::sample();
        let mut cafes: Vec<&Cafe> = catalog.cafes().iter().collect();
        key.sort(&mut cafes);
        cafes.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("distance".parse::<SortKey>().unwrap(), SortKey::Distance);
        assert_eq!("Rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert_eq!("study".parse::<SortKey>().unwrap(), SortKey::Study);
        assert_eq!(
            "price".parse::<SortKey>(),
            Err(UnknownSortKey("price".to_string()))
        );
    }

    #[test]
    fn test_default_is_distance() {
        assert_eq!(SortKey::default(), SortKey::Distance);
    }

    #[test]
    fn test_sort_by_rating_descending() {
        assert_eq!(sorted_ids(SortKey::Rating), vec!["5", "1", "3", "4", "2", "6"]);
    }

    #[test]
    fn test_sort_by_noise_is_stable() {
        // Quiet: 1, 3, 5; Moderate: 2, 4; Lively: 6
        assert_eq!(sorted_ids(SortKey::Noise), vec!["1", "3", "5", "2", "4", "6"]);
    }

    #[test]
    fn test_sort_by_study_is_stable() {
        // Three cafés tie at 5 and keep their listing order
        assert_eq!(sorted_ids(SortKey::Study), vec!["1", "3", "5", "2", "4", "6"]);
    }
}
