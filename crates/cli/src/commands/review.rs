//! Review commands.

use driftwood_core::{ItemId, UserId};
use tracing::info;

use driftwood_store::models::ReviewAuthor;
use driftwood_store::{BlobStore, CollectionRepository, ReviewOrder, ReviewService};

/// Submit a review for a product.
///
/// # Errors
///
/// Returns an error for a rating outside 1-5 or a failed write.
pub fn add<S: BlobStore>(
    repo: &mut CollectionRepository<S>,
    product: &str,
    author_id: &str,
    name: &str,
    email: &str,
    rating: u8,
    comment: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = ItemId::new(product);
    let author = ReviewAuthor {
        id: UserId::new(author_id),
        name: name.to_owned(),
        email: email.to_owned(),
    };

    let review = ReviewService::new(repo).submit(&product, Some(&author), rating, comment)?;
    info!(product = %product, author = %review.author_id, rating = %review.rating, "review submitted");
    Ok(())
}

/// Delete a review by index; only its author may do so.
///
/// # Errors
///
/// Returns an error when the index is out of range, the caller is not the
/// author, or the write fails.
pub fn delete<S: BlobStore>(
    repo: &mut CollectionRepository<S>,
    product: &str,
    caller: &str,
    index: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = ItemId::new(product);
    ReviewService::new(repo).delete(&product, &UserId::new(caller), index)?;
    info!(product = %product, index, "review deleted");
    Ok(())
}

/// Print a product's reviews in the requested order, plus the average
/// rating.
///
/// The printed `index` is the review's position in submission order - the
/// index `review delete` expects - so reviews are enumerated before the
/// presentation sort is applied.
pub fn list<S: BlobStore>(repo: &mut CollectionRepository<S>, product: &str, order: ReviewOrder) {
    let product = ItemId::new(product);
    let reviews = ReviewService::new(repo);

    let mut indexed: Vec<_> = reviews.list(&product).into_iter().enumerate().collect();
    if indexed.is_empty() {
        info!(product = %product, "no reviews yet");
        return;
    }
    match order {
        ReviewOrder::Newest => indexed.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at)),
        ReviewOrder::HighestRated => indexed.sort_by(|a, b| b.1.rating.cmp(&a.1.rating)),
        ReviewOrder::LowestRated => indexed.sort_by(|a, b| a.1.rating.cmp(&b.1.rating)),
    }

    for (index, review) in &indexed {
        info!(
            index,
            rating = %review.rating,
            author = %review.author_name,
            at = %review.created_at,
            comment = %review.comment,
            "review"
        );
    }
    info!(product = %product, average = reviews.average_rating(&product), "average rating");
}
