//! Purchase history.

use chrono::Utc;
use driftwood_core::UserId;
use tracing::debug;

use crate::blob::BlobStore;
use crate::error::StoreError;
use crate::key::CollectionKind;
use crate::models::{Item, Order};
use crate::repository::CollectionRepository;

/// Append-only sale log for one owner at a time.
///
/// Checkout records sales here; the profile page and the analytics view
/// read them back. Nothing ever updates or deletes a recorded sale.
#[derive(Debug)]
pub struct OrderLog<'a, S> {
    repo: &'a mut CollectionRepository<S>,
}

impl<'a, S: BlobStore> OrderLog<'a, S> {
    /// Borrow a repository for order operations.
    #[must_use]
    pub fn new(repo: &'a mut CollectionRepository<S>) -> Self {
        Self { repo }
    }

    /// Record the sale of `quantity` units of `item` to `owner`, stamped
    /// with the current time. Returns the recorded order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidQuantity`] when `quantity < 1`, or
    /// [`StoreError::Write`] when persisting fails.
    pub fn record(
        &mut self,
        owner: &UserId,
        item: &Item,
        quantity: u32,
    ) -> Result<Order, StoreError> {
        if quantity < 1 {
            return Err(StoreError::InvalidQuantity { quantity });
        }
        let order = Order {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity,
            purchased_at: Utc::now(),
        };

        let mut orders = self.history(owner);
        orders.push(order.clone());
        self.repo
            .save(CollectionKind::Orders, owner.as_str(), &orders)?;
        debug!(owner = %owner, item = %item.id, quantity, "sale recorded");
        Ok(order)
    }

    /// The owner's purchase history, oldest first.
    #[must_use]
    pub fn history(&self, owner: &UserId) -> Vec<Order> {
        self.repo.load(CollectionKind::Orders, owner.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::blob::MemoryStore;
    use driftwood_core::ItemId;
    use rust_decimal::Decimal;

    fn item(id: &str) -> Item {
        Item {
            id: ItemId::new(id),
            name: format!("item {id}"),
            price: Decimal::new(2500, 2),
            quantity: 5,
            image: String::new(),
        }
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut repo = CollectionRepository::new(MemoryStore::new());
        let mut orders = OrderLog::new(&mut repo);
        let owner = UserId::new("u1");

        orders.record(&owner, &item("a"), 1).unwrap();
        orders.record(&owner, &item("b"), 2).unwrap();

        let history = orders.history(&owner);
        assert_eq!(history.len(), 2);
        assert_eq!(history.first().unwrap().item_id.as_str(), "a");
        assert_eq!(history.last().unwrap().quantity, 2);
    }

    #[test]
    fn test_record_rejects_zero_quantity() {
        let mut repo = CollectionRepository::new(MemoryStore::new());
        let mut orders = OrderLog::new(&mut repo);

        let err = orders
            .record(&UserId::new("u1"), &item("a"), 0)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidQuantity { quantity: 0 }));
    }

    #[test]
    fn test_history_is_scoped_per_owner() {
        let mut repo = CollectionRepository::new(MemoryStore::new());
        let mut orders = OrderLog::new(&mut repo);

        orders.record(&UserId::new("u1"), &item("a"), 1).unwrap();
        assert!(orders.history(&UserId::new("u2")).is_empty());
    }
}
