//! Order commands.

use driftwood_core::{ItemId, UserId};
use rust_decimal::Decimal;
use tracing::info;

use driftwood_store::models::Item;
use driftwood_store::{BlobStore, CollectionRepository, OrderLog};

/// Record a sale to an owner.
///
/// # Errors
///
/// Returns an error for a quantity below 1 or a failed write.
pub fn record<S: BlobStore>(
    repo: &mut CollectionRepository<S>,
    owner: &str,
    item_id: &str,
    name: &str,
    price: Decimal,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let owner = UserId::new(owner);
    let item = Item {
        id: ItemId::new(item_id),
        name: name.to_owned(),
        price,
        quantity: 0,
        image: String::new(),
    };

    let order = OrderLog::new(repo).record(&owner, &item, quantity)?;
    info!(
        owner = %owner,
        item = %order.item_id,
        quantity = order.quantity,
        at = %order.purchased_at,
        "sale recorded"
    );
    Ok(())
}

/// Print an owner's purchase history.
pub fn history<S: BlobStore>(repo: &mut CollectionRepository<S>, owner: &str) {
    let owner = UserId::new(owner);
    let orders = OrderLog::new(repo).history(&owner);

    if orders.is_empty() {
        info!(owner = %owner, "no orders yet");
        return;
    }
    for order in &orders {
        info!(
            item = %order.item_id,
            name = %order.name,
            price = %order.price,
            quantity = order.quantity,
            at = %order.purchased_at,
            "order"
        );
    }
}
