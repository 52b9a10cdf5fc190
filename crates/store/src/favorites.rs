//! Favorites.

use driftwood_core::{ItemId, UserId};
use tracing::debug;

use crate::blob::BlobStore;
use crate::error::StoreError;
use crate::key::CollectionKind;
use crate::models::{FavoriteEntry, Item};
use crate::repository::CollectionRepository;

/// Favorite toggling for one owner at a time.
///
/// Presence/absence semantics only: favoriting an already-favorited item is
/// a no-op, as is unfavoriting something never favorited.
#[derive(Debug)]
pub struct FavoritesService<'a, S> {
    repo: &'a mut CollectionRepository<S>,
}

impl<'a, S: BlobStore> FavoritesService<'a, S> {
    /// Borrow a repository for favorites operations.
    #[must_use]
    pub fn new(repo: &'a mut CollectionRepository<S>) -> Self {
        Self { repo }
    }

    /// Favorite `item` for `owner`. Returns `true` when a new entry was
    /// written, `false` when the item was already a favorite (no write).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when persisting fails.
    pub fn add(&mut self, owner: &UserId, item: &Item) -> Result<bool, StoreError> {
        let mut favorites = self.list(owner);
        if favorites.iter().any(|entry| entry.item_id == item.id) {
            return Ok(false);
        }
        favorites.push(FavoriteEntry::snapshot(item));
        self.repo
            .save(CollectionKind::Favorites, owner.as_str(), &favorites)?;
        debug!(owner = %owner, item = %item.id, "favorited");
        Ok(true)
    }

    /// Unfavorite `item_id` for `owner`. Returns `true` when an entry was
    /// removed, `false` when it was not a favorite (no write).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when persisting fails.
    pub fn remove(&mut self, owner: &UserId, item_id: &ItemId) -> Result<bool, StoreError> {
        let mut favorites = self.list(owner);
        let before = favorites.len();
        favorites.retain(|entry| &entry.item_id != item_id);
        if favorites.len() == before {
            return Ok(false);
        }
        self.repo
            .save(CollectionKind::Favorites, owner.as_str(), &favorites)?;
        Ok(true)
    }

    /// The owner's favorites, in the order they were added.
    #[must_use]
    pub fn list(&self, owner: &UserId) -> Vec<FavoriteEntry> {
        self.repo.load(CollectionKind::Favorites, owner.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::blob::MemoryStore;
    use rust_decimal::Decimal;

    fn item(id: &str) -> Item {
        Item {
            id: ItemId::new(id),
            name: format!("item {id}"),
            price: Decimal::new(4999, 2),
            quantity: 2,
            image: String::new(),
        }
    }

    #[test]
    fn test_add_then_list() {
        let mut repo = CollectionRepository::new(MemoryStore::new());
        let mut favorites = FavoritesService::new(&mut repo);
        let owner = UserId::new("u1");

        assert!(favorites.add(&owner, &item("a")).unwrap());
        let listed = favorites.list(&owner);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed.first().unwrap().item_id.as_str(), "a");
    }

    #[test]
    fn test_add_twice_is_presence_only() {
        let mut repo = CollectionRepository::new(MemoryStore::new());
        let mut favorites = FavoritesService::new(&mut repo);
        let owner = UserId::new("u1");

        assert!(favorites.add(&owner, &item("a")).unwrap());
        assert!(!favorites.add(&owner, &item("a")).unwrap());
        assert_eq!(favorites.list(&owner).len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut repo = CollectionRepository::new(MemoryStore::new());
        let mut favorites = FavoritesService::new(&mut repo);
        let owner = UserId::new("u1");
        favorites.add(&owner, &item("a")).unwrap();

        assert!(favorites.remove(&owner, &ItemId::new("a")).unwrap());
        assert!(!favorites.remove(&owner, &ItemId::new("a")).unwrap());
        assert!(favorites.list(&owner).is_empty());
    }
}
