//! Parsing of user-facing labels and distances.
//!
//! Labels use their display spelling ("Open Tables", "Gluten-Free") and are
//! matched case-insensitively. Anything outside the closed sets is rejected
//! with `CatalogError::InvalidValue`.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::str::FromStr;

const KM_PER_MILE: f64 = 1.609344;

/// Find the variant whose label matches `s`, ignoring ASCII case.
fn match_label<T: Copy>(all: &[T], label: fn(T) -> &'static str, field: &str, s: &str) -> Result<T> {
    let s = s.trim();
    all.iter()
        .copied()
        .find(|v| label(*v).eq_ignore_ascii_case(s))
        .ok_or_else(|| CatalogError::invalid(field, s))
}

impl FromStr for Seating {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match_label(&Seating::ALL, Seating::label, "seating", s)
    }
}

impl FromStr for NoiseLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match_label(&NoiseLevel::ALL, NoiseLevel::label, "noise level", s)
    }
}

impl FromStr for DietaryTag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match_label(&DietaryTag::ALL, DietaryTag::label, "dietary tag", s)
    }
}

/// Parse a distance into kilometres.
///
/// Accepts `"5km"`, `"0.3 mi"` or a bare number (kilometres). Whitespace
/// between the number and the unit is optional.
pub fn parse_distance(s: &str) -> Result<f64> {
    let trimmed = s.trim();
    let lower = trimmed.to_ascii_lowercase();

    let (number, factor) = if let Some(n) = lower.strip_suffix("km") {
        (n, 1.0)
    } else if let Some(n) = lower.strip_suffix("mi") {
        (n, KM_PER_MILE)
    } else {
        (lower.as_str(), 1.0)
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| CatalogError::invalid("distance", trimmed))?;

    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::invalid("distance", trimmed));
    }
    Ok(value * factor)
}
