//! Integration tests for Driftwood.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p driftwood-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - cart mutations and subtotals end to end
//! - `review_flow` - submission, ownership-checked deletes, orderings
//! - `analytics_report` - cross-owner aggregation
//! - `legacy_keys` - reading data written under the old key conventions
//!
//! Every scenario runs against a [`FileStore`] in a fresh temp directory, so
//! the on-disk format is exercised along with the domain logic.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use tempfile::TempDir;

use driftwood_core::{ItemId, UserId};
use driftwood_store::models::{Item, ReviewAuthor};
use driftwood_store::{CollectionRepository, FileStore};

/// A repository over a file store in a throwaway directory.
///
/// Keep the fixture alive for the duration of the test; dropping it deletes
/// the directory.
pub struct StoreFixture {
    dir: TempDir,
    /// Repository under test.
    pub repo: CollectionRepository<FileStore>,
}

impl StoreFixture {
    /// Create a fresh fixture.
    ///
    /// # Panics
    ///
    /// Panics when the temp directory or store file cannot be created -
    /// there is no point continuing a test without storage.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp directory");
        let store =
            FileStore::open(dir.path().join("driftwood.json")).expect("open store file");
        Self {
            dir,
            repo: CollectionRepository::new(store),
        }
    }

    /// Reopen the store file, as a fresh process would.
    ///
    /// # Panics
    ///
    /// Panics when the store file cannot be reopened.
    #[must_use]
    pub fn reopen(self) -> Self {
        let store =
            FileStore::open(self.dir.path().join("driftwood.json")).expect("reopen store file");
        Self {
            dir: self.dir,
            repo: CollectionRepository::new(store),
        }
    }
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A catalog item with sensible defaults for tests.
#[must_use]
pub fn sample_item(id: &str, price_cents: i64) -> Item {
    Item {
        id: ItemId::new(id),
        name: format!("Sample {id}"),
        price: Decimal::new(price_cents, 2),
        quantity: 10,
        image: format!("https://img.example/{id}.jpg"),
    }
}

/// A signed-in shopper with display attributes derived from `id`.
#[must_use]
pub fn sample_shopper(id: &str) -> ReviewAuthor {
    ReviewAuthor {
        id: UserId::new(id),
        name: format!("Shopper {id}"),
        email: format!("{id}@example.com"),
    }
}
