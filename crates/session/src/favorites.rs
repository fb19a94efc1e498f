//! The set of cafés a user has saved.

use catalog::{Cafe, CafeCatalog, CafeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of `FavoritesSet::add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The id was not saved before and now is
    Added,
    /// The id was already saved; nothing changed
    AlreadyPresent,
}

/// Café ids a user has saved. Adding an id twice is a no-op.
///
/// No ordering is kept; `resolve` returns cafés in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesSet {
    ids: HashSet<CafeId>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: CafeId) -> AddOutcome {
        if self.ids.insert(id) {
            AddOutcome::Added
        } else {
            AddOutcome::AlreadyPresent
        }
    }

    /// Remove `id`. Returns false if it was not saved.
    pub fn remove(&mut self, id: &CafeId) -> bool {
        self.ids.remove(id)
    }

    pub fn contains(&self, id: &CafeId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CafeId> {
        self.ids.iter()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Saved cafés that exist in `catalog`, in catalog order.
    ///
    /// Ids with no matching café are skipped.
    pub fn resolve<'a>(&self, catalog: &'a CafeCatalog) -> Vec<&'a Cafe> {
        catalog
            .cafes()
            .iter()
            .filter(|cafe| self.ids.contains(&cafe.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_twice_is_noop() {
        let mut favorites = FavoritesSet::new();

        assert_eq!(favorites.add(CafeId::new("1")), AddOutcome::Added);
        assert_eq!(favorites.add(CafeId::new("1")), AddOutcome::AlreadyPresent);

        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.iter().filter(|id| id.as_str() == "1").count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut favorites = FavoritesSet::new();
        favorites.add(CafeId::new("3"));

        assert!(favorites.remove(&CafeId::new("3")));
        assert!(!favorites.contains(&CafeId::new("3")));

        // Removing again is a no-op
        assert!(!favorites.remove(&CafeId::new("3")));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_resolve_uses_catalog_order() {
        let catalog = CafeCatalog::sample();
        let mut favorites = FavoritesSet::new();
        favorites.add(CafeId::new("5"));
        favorites.add(CafeId::new("2"));
        favorites.add(CafeId::new("missing"));

        let names: Vec<&str> = favorites
            .resolve(&catalog)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Urban Brew House", "Artisan Coffee Co."]);
    }
}
