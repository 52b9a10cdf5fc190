//! Error taxonomy for the store core.
//!
//! All services return [`StoreError`]. Nothing here is retried: the backing
//! storage is local and synchronous, so there is no transient-failure model.
//! Deserialization failures are deliberately NOT part of this taxonomy -
//! the repository swallows them to an empty collection (availability over
//! strict correctness; the store has no integrity-repair mechanism).

use driftwood_core::{RatingError, UserId};
use thiserror::Error;

/// Unified error type for cart, review, order, and favorites operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation requires a signed-in caller and none was supplied.
    #[error("sign in required")]
    Unauthenticated,

    /// The caller is not the owning identity for the targeted entity.
    #[error("caller {caller} is not the author of the review at index {index}")]
    Forbidden {
        /// Identity that attempted the mutation.
        caller: UserId,
        /// Index of the review the caller tried to delete.
        index: usize,
    },

    /// A rating outside the allowed 1-5 range was submitted.
    #[error(transparent)]
    InvalidRating(#[from] RatingError),

    /// A cart or order quantity below 1 was supplied.
    #[error("quantity must be at least 1, got {quantity}")]
    InvalidQuantity {
        /// The rejected quantity.
        quantity: u32,
    },

    /// An index-based delete targeted a position outside the collection.
    #[error("index {index} is out of range for a collection of {len} entries")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Current collection length.
        len: usize,
    },

    /// The underlying storage rejected a write.
    #[error(transparent)]
    Write(#[from] StoreWriteError),
}

/// Errors raised when persisting a serialized collection.
#[derive(Debug, Error)]
pub enum StoreWriteError {
    /// The host storage quota would be exceeded by this write.
    #[error("storage quota exceeded writing key `{key}`")]
    QuotaExceeded {
        /// Storage key of the rejected write.
        key: String,
    },

    /// The backing file could not be written.
    #[error("failed to persist key `{key}`")]
    Io {
        /// Storage key of the failed write.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be serialized.
    #[error("failed to serialize collection for key `{key}`")]
    Serialize {
        /// Storage key of the failed write.
        key: String,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
