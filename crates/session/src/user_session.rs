//! Per-user state: who is browsing and what they saved.
//!
//! Signing in only records a display profile. There are no credentials;
//! the flag exists so the favorites can be dropped on sign-out.

use crate::favorites::FavoritesSet;
use serde::{Deserialize, Serialize};

/// Display details entered at sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub location: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Owns the favorites for whoever is currently signed in.
#[derive(Debug, Clone, Default)]
pub struct UserSession {
    profile: Option<Profile>,
    favorites: FavoritesSet,
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, profile: Profile) {
        tracing::debug!(name = %profile.name, "Session started");
        self.profile = Some(profile);
    }

    /// Forget the profile and everything saved during the session.
    pub fn sign_out(&mut self) {
        if let Some(profile) = self.profile.take() {
            tracing::debug!(
                name = %profile.name,
                favorites = self.favorites.len(),
                "Session ended"
            );
        }
        self.favorites.clear();
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesSet {
        &mut self.favorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::AddOutcome;
    use catalog::CafeId;

    #[test]
    fn test_sign_in_and_out() {
        let mut session = UserSession::new();
        assert!(!session.is_signed_in());

        session.sign_in(Profile::new("Alex", "New York, NY"));
        assert!(session.is_signed_in());
        assert_eq!(session.profile().unwrap().location, "New York, NY");

        session.sign_out();
        assert!(!session.is_signed_in());
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_sign_out_clears_favorites() {
        let mut session = UserSession::new();
        session.sign_in(Profile::new("Sam", "Boston, MA"));

        assert_eq!(session.favorites_mut().add(CafeId::new("1")), AddOutcome::Added);
        assert_eq!(session.favorites().len(), 1);

        session.sign_out();
        assert!(session.favorites().is_empty());
    }
}
