//! Sale records.

use chrono::{DateTime, Utc};
use driftwood_core::ItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One completed sale of one item.
///
/// Append-only: nothing in the store updates or deletes an order once
/// recorded. Name and price are snapshots taken at purchase time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Item that was purchased.
    pub item_id: ItemId,
    /// Item name at purchase time.
    pub name: String,
    /// Unit price at purchase time.
    pub price: Decimal,
    /// Units purchased.
    pub quantity: u32,
    /// Purchase time.
    pub purchased_at: DateTime<Utc>,
}
