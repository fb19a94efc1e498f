//! Building and validating a `CafeCatalog`.
//!
//! A catalog is built in one step from a list of records, either the
//! built-in sample or a JSON file. Every record is validated before the
//! catalog is handed out; after that the data never changes.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

impl CafeCatalog {
    /// Build a catalog from records, keeping their order.
    ///
    /// Fails on the first record that breaks an invariant:
    /// - ids are unique
    /// - rating is finite and within [0, 5]
    /// - study-friendliness is within [0, 5]
    /// - distance is finite and non-negative
    pub fn from_cafes(cafes: Vec<Cafe>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(cafes.len());
        for (position, cafe) in cafes.iter().enumerate() {
            validate_cafe(cafe)?;
            if by_id.insert(cafe.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(cafe.id.to_string()));
            }
        }
        Ok(Self { cafes, by_id })
    }

    /// Load a catalog from a JSON array of café records.
    ///
    /// Enum fields use their display labels ("Open Tables", "Gluten-Free");
    /// unknown labels fail deserialization.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let cafes: Vec<Cafe> = serde_json::from_str(&raw)?;
        let catalog = Self::from_cafes(cafes)?;

        tracing::info!(
            path = %path.display(),
            cafes = catalog.len(),
            "Loaded café catalog"
        );
        Ok(catalog)
    }
}

fn validate_cafe(cafe: &Cafe) -> Result<()> {
    if cafe.id.as_str().trim().is_empty() {
        return Err(CatalogError::Validation(format!(
            "café '{}' has an empty id",
            cafe.name
        )));
    }
    if !cafe.rating.is_finite() || !(0.0..=5.0).contains(&cafe.rating) {
        return Err(CatalogError::invalid("rating", cafe.rating));
    }
    if cafe.study_friendly > 5 {
        return Err(CatalogError::invalid("studyFriendly", cafe.study_friendly));
    }
    if !cafe.distance_km.is_finite() || cafe.distance_km < 0.0 {
        return Err(CatalogError::invalid("distanceKm", cafe.distance_km));
    }
    Ok(())
}
