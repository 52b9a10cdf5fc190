//! Shopping cart line.

use serde::{Deserialize, Serialize};

use super::Item;

/// One line of an owner's cart: an item snapshot plus the count in the cart.
///
/// The cart holds at most one line per item id; repeat adds increment
/// `quantity` instead of appending. Line quantity is always at least 1 - a
/// line that would drop below that is removed outright.
///
/// `item.quantity` is the catalog stock snapshot and is unrelated to the
/// line quantity; the legacy cart overloaded a single field for both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Item snapshot captured at add-to-cart time.
    pub item: Item,
    /// Number of units in the cart.
    pub quantity: u32,
}
