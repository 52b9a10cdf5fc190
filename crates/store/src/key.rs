//! Storage key codec.
//!
//! The underlying store is one flat string namespace shared by every
//! collection. Logical identity lives in the key shape:
//!
//! | Collection | Key pattern            | Scope   |
//! |------------|------------------------|---------|
//! | Cart       | `<ownerId>_cart`       | owner   |
//! | Reviews    | `reviews_<productId>`  | product |
//! | Orders     | `<ownerId>_orders`     | owner   |
//! | Favorites  | `<ownerId>_favorites`  | owner   |
//!
//! Encoding is deterministic; `decode(encode(kind, scope))` returns the
//! original pair for every key `encode` produces. Keys that match no known
//! convention decode to `None` and are skipped by scanning consumers.
//!
//! Earlier releases wrote reviews under `product_reviews_<productId>`; the
//! decoder still recognizes that form so old data stays visible, but the
//! encoder only ever emits the normalized `reviews_` prefix.

use core::fmt;

/// Prefix for normalized review collections.
const REVIEWS_PREFIX: &str = "reviews_";
/// Prefix written by the legacy review pages. Read-only compatibility.
const LEGACY_REVIEWS_PREFIX: &str = "product_reviews_";

const CART_SUFFIX: &str = "_cart";
const ORDERS_SUFFIX: &str = "_orders";
const FAVORITES_SUFFIX: &str = "_favorites";

/// The logical collections multiplexed onto the flat key namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Per-owner shopping cart lines.
    Cart,
    /// Per-product review threads.
    Reviews,
    /// Per-owner purchase history.
    Orders,
    /// Per-owner favorite snapshots.
    Favorites,
}

impl CollectionKind {
    /// Encode a `(collection, scope)` pair into its storage key.
    ///
    /// Scope ids come from the external identity and catalog collaborators
    /// and never start with `reviews_` or end in one of the reserved
    /// suffixes, which keeps the mapping collision-free.
    #[must_use]
    pub fn encode(self, scope: &str) -> String {
        match self {
            Self::Cart => format!("{scope}{CART_SUFFIX}"),
            Self::Reviews => format!("{REVIEWS_PREFIX}{scope}"),
            Self::Orders => format!("{scope}{ORDERS_SUFFIX}"),
            Self::Favorites => format!("{scope}{FAVORITES_SUFFIX}"),
        }
    }

    /// Parse a storage key back into its logical `(collection, scope)` pair.
    ///
    /// Returns `None` for keys that match no known convention; scanning
    /// consumers must skip those rather than fail, since the namespace is
    /// shared with whatever else the host application stores.
    #[must_use]
    pub fn decode(key: &str) -> Option<(Self, String)> {
        let non_empty = |scope: &str, kind: Self| {
            (!scope.is_empty()).then(|| (kind, scope.to_owned()))
        };

        if let Some(scope) = key.strip_prefix(LEGACY_REVIEWS_PREFIX) {
            return non_empty(scope, Self::Reviews);
        }
        if let Some(scope) = key.strip_prefix(REVIEWS_PREFIX) {
            return non_empty(scope, Self::Reviews);
        }
        if let Some(scope) = key.strip_suffix(CART_SUFFIX) {
            return non_empty(scope, Self::Cart);
        }
        if let Some(scope) = key.strip_suffix(ORDERS_SUFFIX) {
            return non_empty(scope, Self::Orders);
        }
        if let Some(scope) = key.strip_suffix(FAVORITES_SUFFIX) {
            return non_empty(scope, Self::Favorites);
        }
        None
    }

    /// Keys to try when reading this collection, in precedence order.
    ///
    /// Only reviews carry a second, legacy spelling; a normalized blob wins
    /// over a legacy one when both exist.
    #[must_use]
    pub(crate) fn read_candidates(self, scope: &str) -> Vec<String> {
        match self {
            Self::Reviews => vec![
                self.encode(scope),
                format!("{LEGACY_REVIEWS_PREFIX}{scope}"),
            ],
            Self::Cart | Self::Orders | Self::Favorites => vec![self.encode(scope)],
        }
    }

    /// Short lowercase name, used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Reviews => "reviews",
            Self::Orders => "orders",
            Self::Favorites => "favorites",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
