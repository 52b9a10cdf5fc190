//! Cart commands.

use driftwood_core::{ItemId, UserId};
use rust_decimal::Decimal;
use tracing::info;

use driftwood_store::models::Item;
use driftwood_store::{BlobStore, CartService, CollectionRepository};

/// Add an item to the owner's cart, or bump its quantity.
///
/// # Errors
///
/// Returns an error when persisting the cart fails.
pub fn add<S: BlobStore>(
    repo: &mut CollectionRepository<S>,
    owner: &str,
    item_id: &str,
    name: &str,
    price: Decimal,
    stock: u32,
    image: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let owner = UserId::new(owner);
    let item = Item {
        id: ItemId::new(item_id),
        name: name.to_owned(),
        price,
        quantity: stock,
        image: image.to_owned(),
    };

    let line = CartService::new(repo).add_or_increment(&owner, &item)?;
    info!(owner = %owner, item = item_id, quantity = line.quantity, "cart updated");
    Ok(())
}

/// Overwrite the quantity of a cart line.
///
/// # Errors
///
/// Returns an error for a quantity below 1 or a failed write.
pub fn set_quantity<S: BlobStore>(
    repo: &mut CollectionRepository<S>,
    owner: &str,
    item_id: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let owner = UserId::new(owner);
    CartService::new(repo).set_quantity(&owner, &ItemId::new(item_id), quantity)?;
    info!(owner = %owner, item = item_id, quantity, "quantity set");
    Ok(())
}

/// Remove a cart line.
///
/// # Errors
///
/// Returns an error when persisting the cart fails.
pub fn remove<S: BlobStore>(
    repo: &mut CollectionRepository<S>,
    owner: &str,
    item_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let owner = UserId::new(owner);
    CartService::new(repo).remove(&owner, &ItemId::new(item_id))?;
    info!(owner = %owner, item = item_id, "removed from cart");
    Ok(())
}

/// Print the owner's cart lines and subtotal.
pub fn show<S: BlobStore>(repo: &mut CollectionRepository<S>, owner: &str) {
    let owner = UserId::new(owner);
    let cart = CartService::new(repo);

    let lines = cart.lines(&owner);
    if lines.is_empty() {
        info!(owner = %owner, "cart is empty");
        return;
    }
    for line in &lines {
        info!(
            item = %line.item.id,
            name = %line.item.name,
            price = %line.item.price,
            quantity = line.quantity,
            "cart line"
        );
    }
    info!(owner = %owner, subtotal = %cart.subtotal(&owner), "cart subtotal");
}
