//! Star rating type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside the allowed 1-5 range.
    #[error("rating must be between 1 and 5, got {value}")]
    OutOfRange {
        /// The rejected value.
        value: u8,
    },
}

/// A star rating between 1 and 5 inclusive.
///
/// Serializes as a plain JSON number, matching the persisted review format.
/// Deserialization goes through [`Rating::new`], so an out-of-range value in
/// a stored blob fails the whole decode (and the repository's corrupt-data
/// policy turns that into an empty collection).
///
/// ## Examples
///
/// ```
/// use driftwood_core::Rating;
///
/// assert!(Rating::new(5).is_ok());
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest allowed rating.
    pub const MIN: u8 = 1;
    /// Highest allowed rating.
    pub const MAX: u8 = 5;

    /// Construct a `Rating`, rejecting values outside 1..=5.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] for 0 or anything above 5.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange { value })
        }
    }

    /// The rating as a plain integer.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
