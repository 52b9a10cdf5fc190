//! Shopping cart domain logic.

use driftwood_core::{ItemId, UserId};
use rust_decimal::Decimal;
use tracing::debug;

use crate::blob::BlobStore;
use crate::error::StoreError;
use crate::key::CollectionKind;
use crate::models::{CartLine, Item};
use crate::repository::CollectionRepository;

/// Cart operations for one owner at a time.
///
/// Construct transiently around a repository borrow, do the operation, let
/// it go - the pattern every service in this crate follows. The one-line-
/// per-item-id invariant lives here, not in the repository.
#[derive(Debug)]
pub struct CartService<'a, S> {
    repo: &'a mut CollectionRepository<S>,
}

impl<'a, S: BlobStore> CartService<'a, S> {
    /// Borrow a repository for cart operations.
    #[must_use]
    pub fn new(repo: &'a mut CollectionRepository<S>) -> Self {
        Self { repo }
    }

    /// Add `item` to the owner's cart, or bump its quantity by one if a
    /// line for the same item id already exists. Returns the resulting
    /// line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when persisting the cart fails.
    pub fn add_or_increment(
        &mut self,
        owner: &UserId,
        item: &Item,
    ) -> Result<CartLine, StoreError> {
        let mut lines = self.lines(owner);
        let affected = if let Some(line) = lines.iter_mut().find(|line| line.item.id == item.id) {
            line.quantity += 1;
            line.clone()
        } else {
            let line = CartLine {
                item: item.clone(),
                quantity: 1,
            };
            lines.push(line.clone());
            line
        };
        self.repo
            .save(CollectionKind::Cart, owner.as_str(), &lines)?;
        debug!(owner = %owner, item = %item.id, quantity = affected.quantity, "cart add");
        Ok(affected)
    }

    /// Overwrite the quantity of the line holding `item_id`.
    ///
    /// A no-op when the item is not in the cart. Use [`Self::remove`] to
    /// delete a line; a quantity below 1 is rejected rather than treated as
    /// removal.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidQuantity`] when `quantity < 1`, or
    /// [`StoreError::Write`] when persisting fails.
    pub fn set_quantity(
        &mut self,
        owner: &UserId,
        item_id: &ItemId,
        quantity: u32,
    ) -> Result<(), StoreError> {
        if quantity < 1 {
            return Err(StoreError::InvalidQuantity { quantity });
        }
        let mut lines = self.lines(owner);
        let Some(line) = lines.iter_mut().find(|line| &line.item.id == item_id) else {
            return Ok(());
        };
        line.quantity = quantity;
        self.repo
            .save(CollectionKind::Cart, owner.as_str(), &lines)?;
        Ok(())
    }

    /// Remove the line holding `item_id`, if present. Idempotent: removing
    /// an absent item succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when persisting fails.
    pub fn remove(&mut self, owner: &UserId, item_id: &ItemId) -> Result<(), StoreError> {
        let mut lines = self.lines(owner);
        let before = lines.len();
        lines.retain(|line| &line.item.id != item_id);
        if lines.len() == before {
            return Ok(());
        }
        self.repo
            .save(CollectionKind::Cart, owner.as_str(), &lines)?;
        Ok(())
    }

    /// The owner's cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self, owner: &UserId) -> Vec<CartLine> {
        self.repo.load(CollectionKind::Cart, owner.as_str())
    }

    /// Sum of `price * quantity` over the owner's lines, using the snapshot
    /// price captured at add-to-cart time - never a live catalog price.
    #[must_use]
    pub fn subtotal(&self, owner: &UserId) -> Decimal {
        self.lines(owner)
            .iter()
            .map(|line| line.item.price * Decimal::from(line.quantity))
            .sum()
    }
}
