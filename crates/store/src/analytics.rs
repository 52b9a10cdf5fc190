//! Cross-collection aggregate views.
//!
//! Pure reads over the repository: scan the review, order, and favorite
//! collections of every owner, join them by item id, and fold the result
//! into per-item and store-wide metrics. Nothing here writes and nothing
//! here is persisted - the view can be recomputed at any time, and a scan
//! that interleaves with writers may observe a partially-updated world.

use std::collections::BTreeMap;

use driftwood_core::ItemId;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::blob::BlobStore;
use crate::key::CollectionKind;
use crate::models::{FavoriteEntry, Order, Review};
use crate::repository::CollectionRepository;

/// Aggregate figures for one item.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ItemMetrics {
    /// Number of reviews for the item.
    pub review_count: usize,
    /// Mean review rating; `0.0` when unreviewed.
    pub avg_rating: f64,
    /// Number of sale records for the item.
    pub order_count: usize,
    /// Sum of `price * quantity` over the item's sale records.
    pub revenue: Decimal,
    /// Number of owners holding the item as a favorite.
    pub favorite_count: usize,
}

/// Aggregate figures for the whole store.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StoreMetrics {
    /// Review count across every product.
    pub total_reviews: usize,
    /// Mean rating across every review; `0.0` when there are none.
    pub avg_score: f64,
    /// Sale record count across every owner.
    pub total_orders: usize,
    /// Revenue across every sale record.
    pub total_revenue: Decimal,
    /// Favorite entry count across every owner.
    pub total_favorites: usize,
}

/// Read-only aggregation over every owner's collections.
#[derive(Debug)]
pub struct AnalyticsAggregator<'a, S> {
    repo: &'a CollectionRepository<S>,
}

impl<'a, S: BlobStore> AnalyticsAggregator<'a, S> {
    /// Borrow a repository for aggregation. Only the read path is needed.
    #[must_use]
    pub const fn new(repo: &'a CollectionRepository<S>) -> Self {
        Self { repo }
    }

    /// Per-item metrics for the union of item ids appearing in reviews,
    /// sale records, or favorites.
    ///
    /// Reviews are keyed by product directly; orders and favorites are
    /// keyed by owner and get flattened and regrouped by item id.
    #[must_use]
    pub fn per_item_metrics(&self) -> BTreeMap<ItemId, ItemMetrics> {
        let mut metrics: BTreeMap<ItemId, ItemMetrics> = BTreeMap::new();

        let reviews: BTreeMap<String, Vec<Review>> = self.repo.scan_all(CollectionKind::Reviews);
        for (product, product_reviews) in reviews {
            let entry = metrics.entry(ItemId::new(product)).or_default();
            entry.review_count = product_reviews.len();
            entry.avg_rating = mean_rating(&product_reviews);
        }

        let orders: BTreeMap<String, Vec<Order>> = self.repo.scan_all(CollectionKind::Orders);
        for order in orders.values().flatten() {
            let entry = metrics.entry(order.item_id.clone()).or_default();
            entry.order_count += 1;
            entry.revenue += order.price * Decimal::from(order.quantity);
        }

        let favorites: BTreeMap<String, Vec<FavoriteEntry>> =
            self.repo.scan_all(CollectionKind::Favorites);
        for favorite in favorites.values().flatten() {
            metrics
                .entry(favorite.item_id.clone())
                .or_default()
                .favorite_count += 1;
        }

        metrics
    }

    /// Store-wide totals over the flattened collections.
    #[must_use]
    pub fn store_wide_metrics(&self) -> StoreMetrics {
        let reviews: BTreeMap<String, Vec<Review>> = self.repo.scan_all(CollectionKind::Reviews);
        let all_reviews: Vec<Review> = reviews.into_values().flatten().collect();

        let orders: BTreeMap<String, Vec<Order>> = self.repo.scan_all(CollectionKind::Orders);
        let all_orders: Vec<Order> = orders.into_values().flatten().collect();

        let favorites: BTreeMap<String, Vec<FavoriteEntry>> =
            self.repo.scan_all(CollectionKind::Favorites);

        StoreMetrics {
            total_reviews: all_reviews.len(),
            avg_score: mean_rating(&all_reviews),
            total_orders: all_orders.len(),
            total_revenue: all_orders
                .iter()
                .map(|order| order.price * Decimal::from(order.quantity))
                .sum(),
            total_favorites: favorites.values().map(Vec::len).sum(),
        }
    }
}

/// Mean rating with the store-wide zero-default policy: no reviews is `0.0`,
/// never NaN.
#[allow(clippy::cast_precision_loss)]
fn mean_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews
        .iter()
        .map(|review| u32::from(review.rating.value()))
        .sum();
    f64::from(sum) / reviews.len() as f64
}
