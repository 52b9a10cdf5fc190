//! Favorite commands.

use driftwood_core::{ItemId, UserId};
use rust_decimal::Decimal;
use tracing::info;

use driftwood_store::models::Item;
use driftwood_store::{BlobStore, CollectionRepository, FavoritesService};

/// Favorite an item for an owner.
///
/// # Errors
///
/// Returns an error when persisting fails.
pub fn add<S: BlobStore>(
    repo: &mut CollectionRepository<S>,
    owner: &str,
    item_id: &str,
    name: &str,
    price: Decimal,
    stock: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let owner = UserId::new(owner);
    let item = Item {
        id: ItemId::new(item_id),
        name: name.to_owned(),
        price,
        quantity: stock,
        image: String::new(),
    };

    if FavoritesService::new(repo).add(&owner, &item)? {
        info!(owner = %owner, item = item_id, "favorited");
    } else {
        info!(owner = %owner, item = item_id, "already a favorite");
    }
    Ok(())
}

/// Unfavorite an item for an owner.
///
/// # Errors
///
/// Returns an error when persisting fails.
pub fn remove<S: BlobStore>(
    repo: &mut CollectionRepository<S>,
    owner: &str,
    item_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let owner = UserId::new(owner);
    if FavoritesService::new(repo).remove(&owner, &ItemId::new(item_id))? {
        info!(owner = %owner, item = item_id, "unfavorited");
    } else {
        info!(owner = %owner, item = item_id, "was not a favorite");
    }
    Ok(())
}

/// Print an owner's favorites.
pub fn list<S: BlobStore>(repo: &mut CollectionRepository<S>, owner: &str) {
    let owner = UserId::new(owner);
    let favorites = FavoritesService::new(repo).list(&owner);

    if favorites.is_empty() {
        info!(owner = %owner, "no favorites");
        return;
    }
    for entry in &favorites {
        info!(item = %entry.item_id, name = %entry.name, price = %entry.price, "favorite");
    }
}
