//! Favorite entries.

use driftwood_core::ItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Item;

/// A favorited item: presence/absence plus the snapshot copied when the
/// shopper hit the heart. No quantity semantics beyond the stock snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    /// Item that was favorited.
    pub item_id: ItemId,
    /// Item name at favorite time.
    pub name: String,
    /// Unit price at favorite time.
    pub price: Decimal,
    /// Stock at favorite time.
    pub quantity: u32,
}

impl FavoriteEntry {
    /// Snapshot the relevant fields of a catalog item.
    #[must_use]
    pub fn snapshot(item: &Item) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
        }
    }
}
