//! Canonical persisted entity shapes.
//!
//! One shape per entity, period. The legacy pages grew several overlapping
//! spellings of "the same" review and order records; those are unified here
//! and the drifted field names are not read back - a blob in an old shape
//! fails to decode and falls under the repository's corrupt-data policy.

pub mod cart;
pub mod favorite;
pub mod item;
pub mod order;
pub mod review;

pub use cart::CartLine;
pub use favorite::FavoriteEntry;
pub use item::Item;
pub use order::Order;
pub use review::{Review, ReviewAuthor};
