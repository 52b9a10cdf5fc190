//! Product review entities.

use chrono::{DateTime, Utc};
use driftwood_core::{Rating, UserId};
use serde::{Deserialize, Serialize};

/// A single product review.
///
/// The product a review belongs to is structural - it is whichever review
/// collection the entity lives in - not a field on the record. Ownership for
/// delete is by `author_id`; everyone can read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Star rating, 1-5.
    pub rating: Rating,
    /// Free-form review text.
    pub comment: String,
    /// Submission time.
    pub created_at: DateTime<Utc>,
    /// Identity of the author; only this identity may delete the review.
    pub author_id: UserId,
    /// Author display name at submission time.
    pub author_name: String,
    /// Author email at submission time.
    pub author_email: String,
}

/// Display attributes of the signed-in shopper, as supplied by the external
/// auth collaborator. Not persisted on its own - its fields are copied into
/// each [`Review`] at submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewAuthor {
    /// Opaque identity.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email, verbatim from the auth provider.
    pub email: String,
}
