//! Seed the store with sample data.
//!
//! Creates two shoppers with fresh random ids and runs them through the
//! full surface: carts, reviews, favorites, and a few sales. Handy for
//! eyeballing `driftwood report` output on a non-empty store.

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use driftwood_core::{ItemId, UserId};
use driftwood_store::models::{Item, ReviewAuthor};
use driftwood_store::{
    BlobStore, CartService, CollectionRepository, FavoritesService, OrderLog, ReviewService,
};

/// Sample catalog used by the seeder.
fn catalog() -> Vec<Item> {
    vec![
        Item {
            id: ItemId::new("oak-dining-table"),
            name: "Oak Dining Table".to_owned(),
            price: Decimal::new(28500, 2),
            quantity: 4,
            image: "https://img.driftwood.shop/oak-dining-table.jpg".to_owned(),
        },
        Item {
            id: ItemId::new("rattan-armchair"),
            name: "Rattan Armchair".to_owned(),
            price: Decimal::new(12900, 2),
            quantity: 9,
            image: "https://img.driftwood.shop/rattan-armchair.jpg".to_owned(),
        },
        Item {
            id: ItemId::new("ceramic-vase"),
            name: "Ceramic Vase".to_owned(),
            price: Decimal::new(3450, 2),
            quantity: 30,
            image: "https://img.driftwood.shop/ceramic-vase.jpg".to_owned(),
        },
    ]
}

fn shopper(name: &str) -> ReviewAuthor {
    ReviewAuthor {
        id: UserId::new(Uuid::new_v4().to_string()),
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

/// Populate the store with sample shoppers, carts, reviews, and sales.
///
/// # Errors
///
/// Returns an error when any of the seed writes fails.
pub fn run<S: BlobStore>(repo: &mut CollectionRepository<S>) -> Result<(), Box<dyn std::error::Error>> {
    let items = catalog();
    let ada = shopper("Ada");
    let grace = shopper("Grace");
    info!(ada = %ada.id, grace = %grace.id, "seeding sample shoppers");

    let [table, chair, vase] = items.as_slice() else {
        return Err("sample catalog changed size".into());
    };

    // Carts: Ada is furnishing a dining room, Grace wants two vases.
    let mut cart = CartService::new(repo);
    cart.add_or_increment(&ada.id, table)?;
    cart.add_or_increment(&ada.id, chair)?;
    cart.add_or_increment(&ada.id, chair)?;
    cart.add_or_increment(&grace.id, vase)?;
    cart.add_or_increment(&grace.id, vase)?;

    // Reviews on both big pieces.
    let mut reviews = ReviewService::new(repo);
    reviews.submit(&table.id, Some(&ada), 5, "Heavy, solid, worth it.")?;
    reviews.submit(&table.id, Some(&grace), 4, "Lovely grain, slow delivery.")?;
    reviews.submit(&chair.id, Some(&grace), 3, "Comfier than it looks.")?;

    // A few completed sales.
    let mut orders = OrderLog::new(repo);
    orders.record(&ada.id, table, 1)?;
    orders.record(&grace.id, vase, 2)?;

    // Favorites.
    let mut favorites = FavoritesService::new(repo);
    favorites.add(&ada.id, chair)?;
    favorites.add(&grace.id, table)?;

    info!(
        items = items.len(),
        shoppers = 2,
        "seed complete; try `driftwood report`"
    );
    Ok(())
}
