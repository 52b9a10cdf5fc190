//! Driftwood Store - the local-first persistence core.
//!
//! The storefront keeps all data-bearing state (shopping carts, product
//! reviews, order history, favorites) in a single flat key-value namespace
//! on the shopper's own device. This crate is that namespace made explicit:
//! a typed key codec, a minimal blob-store seam, a generic collection
//! repository with read-modify-write semantics, and the domain services and
//! aggregate views built on top.
//!
//! # Architecture
//!
//! ```text
//! CartService / ReviewService / OrderLog / FavoritesService   (mutate)
//!                        |
//!              CollectionRepository          AnalyticsAggregator (read-only)
//!                        |                          |
//!                  CollectionKind  <--- key codec --+
//!                        |
//!                    BlobStore  (MemoryStore | FileStore)
//! ```
//!
//! Services never touch the [`blob::BlobStore`] directly; the repository
//! exclusively owns the serialized representation. Every mutation is a
//! whole-collection load-mutate-save - there is no partial update, no
//! locking, and no atomicity if a sequence is interrupted. Two uncoordinated
//! writers racing on the same collection lose the earlier write; that is an
//! accepted property of the single-device design, not a bug this crate tries
//! to fix.
//!
//! # Modules
//!
//! - [`key`] - encodes logical `(collection, scope)` pairs to storage keys
//! - [`blob`] - the storage seam and its in-memory / on-disk implementations
//! - [`repository`] - generic load/save/scan over one collection kind
//! - [`models`] - canonical persisted entity shapes
//! - [`cart`], [`reviews`], [`orders`], [`favorites`] - domain services
//! - [`analytics`] - cross-collection aggregate views
//! - [`error`] - the error taxonomy shared by all services

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod blob;
pub mod cart;
pub mod error;
pub mod favorites;
pub mod key;
pub mod models;
pub mod orders;
pub mod repository;
pub mod reviews;

pub use analytics::{AnalyticsAggregator, ItemMetrics, StoreMetrics};
pub use blob::{BlobStore, FileStore, MemoryStore};
pub use cart::CartService;
pub use error::{StoreError, StoreWriteError};
pub use favorites::FavoritesService;
pub use key::CollectionKind;
pub use orders::OrderLog;
pub use repository::CollectionRepository;
pub use reviews::{ReviewOrder, ReviewService};
