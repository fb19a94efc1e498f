//! Error types for the catalog crate.
//!
//! Everything that can go wrong while building a `CafeCatalog` ends up here:
//! reading a dataset file, decoding it, or rejecting a record that breaks
//! one of the catalog invariants.

use thiserror::Error;

/// Errors that can occur while parsing labels or building a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a dataset file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file is not a valid JSON array of cafés
    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// A label or field value is outside its closed set or range
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two records share the same identifier
    #[error("Duplicate café id: {0}")]
    DuplicateId(String),

    /// Record-level validation failed
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CatalogError {
    pub(crate) fn invalid(field: &str, value: impl ToString) -> Self {
        CatalogError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
