//! Filter implementations for the café pipeline.
//!
//! Each filter covers one predicate group. Groups are AND-ed together by
//! the FilterPipeline; any OR semantics live inside a single filter.

pub mod dietary;
pub mod outlets;
pub mod radius;
pub mod seating;

// Re-export for convenience
pub use dietary::DietaryFilter;
pub use outlets::OutletsFilter;
pub use radius::RadiusFilter;
pub use seating::SeatingFilter;
