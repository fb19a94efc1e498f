//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets independent predicate
//! groups (dietary, seating, outlets, radius) be composed into one pass.

use catalog::Cafe;

/// A single predicate group applied to café listings.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` so a built pipeline can be shared across threads
/// - Filters only ever see shared references; they never touch the catalog
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `cafe` passes this filter.
    fn matches(&self, cafe: &Cafe) -> bool;
}
