//! Filtering and ordering of café listings.
//!
//! This crate provides:
//! - Filter trait and implementations for each predicate group
//! - FilterPipeline for composing filters
//! - SortKey for stable ordering of results
//! - FilterConfig and `query`, the pure entry point used by callers
//!
//! ## Architecture
//! A query runs in two stages:
//! 1. Filters remove cafés that fail any active constraint (dietary,
//!    seating, outlets, radius). Groups are AND-ed; dietary is any-match.
//! 2. The survivors are stable-sorted by the chosen key.
//!
//! Nothing here mutates the catalog, so `query` can be called from many
//! threads at once without locking.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{CafeCatalog, DietaryTag};
//! use finder::{query, FilterConfig, SortKey};
//!
//! let catalog = CafeCatalog::sample();
//! let config = FilterConfig::new()
//!     .toggle_dietary(DietaryTag::Halal)
//!     .with_sort(SortKey::Rating);
//!
//! for cafe in query(catalog.cafes(), &config) {
//!     println!("{} ({})", cafe.name, cafe.rating);
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;
pub mod config;
pub mod query;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use sort::{SortKey, UnknownSortKey};
pub use config::FilterConfig;
pub use query::query;
