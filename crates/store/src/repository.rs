//! Generic CRUD over one logical collection.
//!
//! A collection is an ordered sequence of same-kind entities, scoped to one
//! owner (or one product, for reviews), stored as a single serialized JSON
//! array under one key. The repository exclusively owns that serialized
//! representation: services load, mutate the in-memory sequence, and save
//! the whole thing back. There is no partial update primitive - keeping the
//! whole-blob overwrite behind [`CollectionRepository::save`] means a future
//! move to incremental storage touches this one component.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::blob::BlobStore;
use crate::error::StoreWriteError;
use crate::key::CollectionKind;

/// Typed collection access over a [`BlobStore`].
#[derive(Debug)]
pub struct CollectionRepository<S> {
    store: S,
}

impl<S: BlobStore> CollectionRepository<S> {
    /// Wrap a blob store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the repository, returning the underlying store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Load the collection under `(kind, scope)`.
    ///
    /// Returns the empty sequence when no blob exists yet AND when a stored
    /// blob fails to deserialize: corrupt data never crashes the caller, it
    /// reads as empty. For reviews, the legacy `product_reviews_` spelling
    /// is consulted when the normalized key is absent.
    pub fn load<T: DeserializeOwned>(&self, kind: CollectionKind, scope: &str) -> Vec<T> {
        for key in kind.read_candidates(scope) {
            if let Some(raw) = self.store.get(&key) {
                return decode_blob(&key, &raw);
            }
        }
        Vec::new()
    }

    /// Replace the collection under `(kind, scope)` with `items`.
    ///
    /// Whole-collection replacement - callers must load, mutate, then save.
    /// Always writes the normalized key, so saving a collection first read
    /// through a legacy key migrates it forward.
    ///
    /// # Errors
    ///
    /// Returns [`StoreWriteError`] when serialization fails or the store
    /// rejects the write.
    pub fn save<T: Serialize>(
        &mut self,
        kind: CollectionKind,
        scope: &str,
        items: &[T],
    ) -> Result<(), StoreWriteError> {
        let key = kind.encode(scope);
        let raw = serde_json::to_string(items).map_err(|source| StoreWriteError::Serialize {
            key: key.clone(),
            source,
        })?;
        self.store.set(&key, raw)?;
        debug!(collection = %kind, scope, count = items.len(), "saved collection");
        Ok(())
    }

    /// Load every collection of `kind` across all scopes.
    ///
    /// Walks the whole namespace, decodes each key, and keeps the ones that
    /// belong to `kind`; unrecognized keys are skipped. There is no
    /// isolation against concurrent writers - a scan interleaved with
    /// writes may observe a partially-updated world.
    pub fn scan_all<T: DeserializeOwned>(&self, kind: CollectionKind) -> BTreeMap<String, Vec<T>> {
        let mut collections: BTreeMap<String, Vec<T>> = BTreeMap::new();
        for key in self.store.keys() {
            let Some((found, scope)) = CollectionKind::decode(&key) else {
                continue;
            };
            if found != kind {
                continue;
            }
            let Some(raw) = self.store.get(&key) else {
                continue;
            };
            // A normalized and a legacy key can name the same scope; the
            // normalized contents win, matching the single-scope read path.
            let entities = decode_blob(&key, &raw);
            if key == kind.encode(&scope) {
                collections.insert(scope, entities);
            } else {
                collections.entry(scope).or_insert(entities);
            }
        }
        collections
    }
}

fn decode_blob<T: DeserializeOwned>(key: &str, raw: &str) -> Vec<T> {
    match serde_json::from_str(raw) {
        Ok(entities) => entities,
        Err(error) => {
            warn!(key, %error, "stored blob failed to deserialize, treating as empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::blob::MemoryStore;
    use crate::models::FavoriteEntry;
    use driftwood_core::ItemId;
    use rust_decimal::Decimal;

    fn entry(id: &str) -> FavoriteEntry {
        FavoriteEntry {
            item_id: ItemId::new(id),
            name: format!("item {id}"),
            price: Decimal::new(999, 2),
            quantity: 3,
        }
    }

    fn repo() -> CollectionRepository<MemoryStore> {
        CollectionRepository::new(MemoryStore::new())
    }

    #[test]
    fn test_load_missing_collection_is_empty() {
        let repo = repo();
        let loaded: Vec<FavoriteEntry> = repo.load(CollectionKind::Favorites, "u1");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut repo = repo();
        let entries = vec![entry("a"), entry("b")];
        repo.save(CollectionKind::Favorites, "u1", &entries).unwrap();

        let loaded: Vec<FavoriteEntry> = repo.load(CollectionKind::Favorites, "u1");
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_corrupt_blob_reads_as_empty() {
        let mut store = MemoryStore::new();
        store
            .set("u1_favorites", "{definitely not an array".to_owned())
            .unwrap();
        let repo = CollectionRepository::new(store);

        let loaded: Vec<FavoriteEntry> = repo.load(CollectionKind::Favorites, "u1");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_noop_read_then_write_is_byte_identical() {
        let mut repo = repo();
        repo.save(CollectionKind::Favorites, "u1", &[entry("a")])
            .unwrap();
        let before = repo.into_store();
        let original = before.get("u1_favorites").unwrap();

        let mut repo = CollectionRepository::new(before);
        let loaded: Vec<FavoriteEntry> = repo.load(CollectionKind::Favorites, "u1");
        repo.save(CollectionKind::Favorites, "u1", &loaded).unwrap();

        assert_eq!(repo.into_store().get("u1_favorites").unwrap(), original);
    }

    #[test]
    fn test_scan_all_filters_by_kind_and_skips_foreign_keys() {
        let mut store = MemoryStore::new();
        store
            .set(
                "u1_favorites",
                serde_json::to_string(&[entry("a")]).unwrap(),
            )
            .unwrap();
        store
            .set(
                "u2_favorites",
                serde_json::to_string(&[entry("b"), entry("c")]).unwrap(),
            )
            .unwrap();
        store.set("u1_cart", "[]".to_owned()).unwrap();
        store.set("theme", "\"dark\"".to_owned()).unwrap();

        let repo = CollectionRepository::new(store);
        let scanned: BTreeMap<String, Vec<FavoriteEntry>> =
            repo.scan_all(CollectionKind::Favorites);

        assert_eq!(scanned.len(), 2);
        assert_eq!(scanned.get("u1").map(Vec::len), Some(1));
        assert_eq!(scanned.get("u2").map(Vec::len), Some(2));
    }

    #[test]
    fn test_legacy_review_key_readable_until_rewritten() {
        use crate::models::Review;
        use chrono::Utc;
        use driftwood_core::{Rating, UserId};

        let review = Review {
            rating: Rating::new(4).unwrap(),
            comment: "solid".to_owned(),
            created_at: Utc::now(),
            author_id: UserId::new("u1"),
            author_name: "Ada".to_owned(),
            author_email: "ada@example.com".to_owned(),
        };

        let mut store = MemoryStore::new();
        store
            .set(
                "product_reviews_p1",
                serde_json::to_string(&[review.clone()]).unwrap(),
            )
            .unwrap();

        let mut repo = CollectionRepository::new(store);
        let loaded: Vec<Review> = repo.load(CollectionKind::Reviews, "p1");
        assert_eq!(loaded, vec![review]);

        // Saving writes the normalized key; subsequent loads prefer it.
        repo.save(CollectionKind::Reviews, "p1", &loaded).unwrap();
        let scanned: BTreeMap<String, Vec<Review>> = repo.scan_all(CollectionKind::Reviews);
        assert_eq!(scanned.len(), 1);
        assert_eq!(scanned.get("p1").map(Vec::len), Some(1));
    }
}
