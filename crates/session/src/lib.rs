//! # Session Crate
//!
//! State that belongs to one user rather than to the catalog:
//!
//! - **favorites**: `FavoritesSet`, the saved café ids
//! - **user_session**: `UserSession`, the profile that owns the favorites
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CafeCatalog, CafeId};
//! use session::{AddOutcome, Profile, UserSession};
//!
//! let catalog = CafeCatalog::sample();
//! let mut session = UserSession::new();
//! session.sign_in(Profile::new("Alex", "New York, NY"));
//!
//! if session.favorites_mut().add(CafeId::new("1")) == AddOutcome::AlreadyPresent {
//!     println!("Already in favorites!");
//! }
//! let saved = session.favorites().resolve(&catalog);
//! ```

pub mod favorites;
pub mod user_session;

pub use favorites::{AddOutcome, FavoritesSet};
pub use user_session::{Profile, UserSession};
