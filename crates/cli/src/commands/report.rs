//! Analytics report command.

use tracing::info;

use driftwood_core::ItemId;
use driftwood_store::{AnalyticsAggregator, BlobStore, CollectionRepository};

/// Print per-item metrics and store-wide totals.
///
/// With `item` set, the report covers just that item; items with no
/// recorded activity report as such rather than erroring.
pub fn run<S: BlobStore>(repo: &CollectionRepository<S>, item: Option<&str>) {
    let analytics = AnalyticsAggregator::new(repo);
    let per_item = analytics.per_item_metrics();

    if let Some(id) = item {
        match per_item.get(&ItemId::new(id)) {
            Some(metrics) => {
                info!(
                    item = id,
                    reviews = metrics.review_count,
                    avg_rating = metrics.avg_rating,
                    orders = metrics.order_count,
                    revenue = %metrics.revenue,
                    favorites = metrics.favorite_count,
                    "item performance"
                );
            }
            None => info!(item = id, "no recorded activity"),
        }
        return;
    }

    for (id, metrics) in &per_item {
        info!(
            item = %id,
            reviews = metrics.review_count,
            avg_rating = metrics.avg_rating,
            orders = metrics.order_count,
            revenue = %metrics.revenue,
            favorites = metrics.favorite_count,
            "item performance"
        );
    }

    let totals = analytics.store_wide_metrics();
    info!(
        reviews = totals.total_reviews,
        avg_score = totals.avg_score,
        orders = totals.total_orders,
        revenue = %totals.total_revenue,
        favorites = totals.total_favorites,
        "store-wide totals"
    );
}
