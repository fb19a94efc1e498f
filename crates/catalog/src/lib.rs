//! # Catalog Crate
//!
//! Café listings and the fixed dataset they live in.
//!
//! ## Main Components
//!
//! - **types**: Domain types (`Cafe`, `CafeId`, `Seating`, `NoiseLevel`, `DietaryTag`, `CafeCatalog`)
//! - **parser**: Label parsing (`FromStr`) and distance parsing
//! - **index**: Building and validating a catalog, JSON loading
//! - **sample**: The built-in six-café dataset
//! - **error**: Error types for catalog construction
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CafeCatalog, CafeId};
//!
//! let catalog = CafeCatalog::sample();
//! let cozy = catalog.get(&CafeId::new("1")).unwrap();
//! println!("{} is {} km away", cozy.name, cozy.distance_km);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod sample;

pub use error::{CatalogError, Result};
pub use parser::parse_distance;
pub use sample::sample_cafes;
pub use types::{
    // Identifiers
    CafeId,
    // Core types
    Cafe,
    CafeCatalog,
    // Enums
    DietaryTag,
    NoiseLevel,
    Seating,
};
