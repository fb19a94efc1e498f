//! Core domain types for café listings.
//!
//! A `Cafe` is an immutable record. The enumerations (`Seating`,
//! `NoiseLevel`, `DietaryTag`) are closed sets: a value outside them cannot be
//! represented, so an unknown category is rejected as soon as it is parsed
//! or deserialized.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque, stable identifier of a café.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CafeId(String);

impl CafeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CafeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CafeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// Enumerated attributes
// =============================================================================

/// Seating style a café offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seating {
    Booths,
    #[serde(rename = "Open Tables")]
    OpenTables,
    Couches,
    #[serde(rename = "Bar Seating")]
    BarSeating,
}

impl Seating {
    pub const ALL: [Seating; 4] = [
        Seating::Booths,
        Seating::OpenTables,
        Seating::Couches,
        Seating::BarSeating,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Seating::Booths => "Booths",
            Seating::OpenTables => "Open Tables",
            Seating::Couches => "Couches",
            Seating::BarSeating => "Bar Seating",
        }
    }
}

/// Ambient noise, ordered from quietest to loudest.
///
/// The derived `Ord` follows declaration order, which is the ordering used
/// when sorting by noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoiseLevel {
    Quiet,
    Moderate,
    Lively,
}

impl NoiseLevel {
    pub const ALL: [NoiseLevel; 3] = [NoiseLevel::Quiet, NoiseLevel::Moderate, NoiseLevel::Lively];

    /// Position in the fixed ordering (Quiet=0, Moderate=1, Lively=2).
    pub fn ordinal(self) -> u8 {
        match self {
            NoiseLevel::Quiet => 0,
            NoiseLevel::Moderate => 1,
            NoiseLevel::Lively => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NoiseLevel::Quiet => "Quiet",
            NoiseLevel::Moderate => "Moderate",
            NoiseLevel::Lively => "Lively",
        }
    }
}

/// Dietary accommodation a café advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DietaryTag {
    Halal,
    Kosher,
    Vegetarian,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
}

impl DietaryTag {
    pub const ALL: [DietaryTag; 4] = [
        DietaryTag::Halal,
        DietaryTag::Kosher,
        DietaryTag::Vegetarian,
        DietaryTag::GlutenFree,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DietaryTag::Halal => "Halal",
            DietaryTag::Kosher => "Kosher",
            DietaryTag::Vegetarian => "Vegetarian",
            DietaryTag::GlutenFree => "Gluten-Free",
        }
    }
}

impl fmt::Display for Seating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for NoiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Cafe
// =============================================================================

/// A single café listing.
///
/// Fields are public for reading and for building fixtures; once a record
/// is placed in a `CafeCatalog` it is only ever handed out by shared
/// reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cafe {
    pub id: CafeId,
    pub name: String,
    pub tagline: String,
    /// Distance from the user, in kilometres
    pub distance_km: f64,
    /// Average rating in [0, 5]
    pub rating: f32,
    pub outlets: bool,
    pub food: bool,
    pub seating: Seating,
    pub noise_level: NoiseLevel,
    /// Study-friendliness score in [0, 5]
    pub study_friendly: u8,
    #[serde(default)]
    pub dietary_options: BTreeSet<DietaryTag>,
}

impl Cafe {
    /// True when the café advertises at least one of `tags`.
    pub fn offers_any(&self, tags: &BTreeSet<DietaryTag>) -> bool {
        !self.dietary_options.is_disjoint(tags)
    }
}

// =============================================================================
// CafeCatalog - the fixed dataset
// =============================================================================

/// The immutable set of cafés a process works with.
///
/// Records keep the order they were loaded in; lookups by id go through a
/// side index. There are no public mutators: a catalog is built once (see
/// `index.rs`) and only read afterwards.
#[derive(Debug, Clone)]
pub struct CafeCatalog {
    pub(crate) cafes: Vec<Cafe>,
    pub(crate) by_id: HashMap<CafeId, usize>,
}

impl CafeCatalog {
    /// All cafés, in catalog order.
    pub fn cafes(&self) -> &[Cafe] {
        &self.cafes
    }

    /// Look up a café by id.
    pub fn get(&self, id: &CafeId) -> Option<&Cafe> {
        self.by_id.get(id).map(|&i| &self.cafes[i])
    }

    pub fn contains(&self, id: &CafeId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.cafes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cafes.is_empty()
    }
}
