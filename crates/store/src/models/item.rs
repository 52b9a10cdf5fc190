//! Catalog item snapshot.

use driftwood_core::ItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog item as handed over by the external catalog service.
///
/// The store never fetches items itself; it persists whatever snapshot the
/// caller passed in at the moment of the interaction (add-to-cart, favorite,
/// purchase). Prices in particular are NOT reconciled against later catalog
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Catalog identity.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price at snapshot time.
    pub price: Decimal,
    /// Units in stock at snapshot time.
    pub quantity: u32,
    /// Image URL.
    pub image: String,
}
