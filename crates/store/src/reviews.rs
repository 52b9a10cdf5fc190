//! Product review domain logic.

use chrono::Utc;
use driftwood_core::{ItemId, Rating, UserId};
use tracing::debug;

use crate::blob::BlobStore;
use crate::error::StoreError;
use crate::key::CollectionKind;
use crate::models::{Review, ReviewAuthor};
use crate::repository::CollectionRepository;

/// Presentation orderings for a product's reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewOrder {
    /// Most recent first.
    #[default]
    Newest,
    /// Best rating first.
    HighestRated,
    /// Worst rating first.
    LowestRated,
}

/// Review operations for one product at a time.
///
/// Reviews are readable by everyone; writing requires a signed-in author
/// and deleting requires the caller to BE that author. Both checks happen
/// here - the repository below has no notion of identity.
#[derive(Debug)]
pub struct ReviewService<'a, S> {
    repo: &'a mut CollectionRepository<S>,
}

impl<'a, S: BlobStore> ReviewService<'a, S> {
    /// Borrow a repository for review operations.
    #[must_use]
    pub fn new(repo: &'a mut CollectionRepository<S>) -> Self {
        Self { repo }
    }

    /// Append a review to the product's collection and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthenticated`] when `author` is `None`,
    /// [`StoreError::InvalidRating`] when `rating` is outside 1..=5, and
    /// [`StoreError::Write`] when persisting fails.
    pub fn submit(
        &mut self,
        product: &ItemId,
        author: Option<&ReviewAuthor>,
        rating: u8,
        comment: &str,
    ) -> Result<Review, StoreError> {
        let author = author.ok_or(StoreError::Unauthenticated)?;
        let rating = Rating::new(rating)?;

        let review = Review {
            rating,
            comment: comment.to_owned(),
            created_at: Utc::now(),
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            author_email: author.email.clone(),
        };

        let mut reviews = self.list(product);
        reviews.push(review.clone());
        self.repo
            .save(CollectionKind::Reviews, product.as_str(), &reviews)?;
        debug!(product = %product, author = %author.id, %rating, "review submitted");
        Ok(review)
    }

    /// Delete the review at `index` in the product's collection.
    ///
    /// Only the review's author may delete it; all other reviews keep their
    /// relative order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] when `index` is past the end of
    /// the collection, [`StoreError::Forbidden`] when `caller` is not the
    /// author of the targeted review, and [`StoreError::Write`] when
    /// persisting fails.
    pub fn delete(
        &mut self,
        product: &ItemId,
        caller: &UserId,
        index: usize,
    ) -> Result<(), StoreError> {
        let mut reviews = self.list(product);
        let Some(target) = reviews.get(index) else {
            return Err(StoreError::OutOfRange {
                index,
                len: reviews.len(),
            });
        };
        if &target.author_id != caller {
            return Err(StoreError::Forbidden {
                caller: caller.clone(),
                index,
            });
        }
        reviews.remove(index);
        self.repo
            .save(CollectionKind::Reviews, product.as_str(), &reviews)?;
        Ok(())
    }

    /// The product's reviews in insertion order.
    #[must_use]
    pub fn list(&self, product: &ItemId) -> Vec<Review> {
        self.repo.load(CollectionKind::Reviews, product.as_str())
    }

    /// Mean rating over the product's reviews; `0.0` for no reviews (the
    /// UI renders that directly, so it must never be NaN or an error).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_rating(&self, product: &ItemId) -> f64 {
        let reviews = self.list(product);
        if reviews.is_empty() {
            return 0.0;
        }
        let sum: u32 = reviews
            .iter()
            .map(|review| u32::from(review.rating.value()))
            .sum();
        f64::from(sum) / reviews.len() as f64
    }

    /// The product's reviews in the requested presentation order.
    ///
    /// Sorting is stable: reviews that compare equal keep their insertion
    /// order, so repeated calls are deterministic.
    #[must_use]
    pub fn sorted(&self, product: &ItemId, order: ReviewOrder) -> Vec<Review> {
        let mut reviews = self.list(product);
        match order {
            ReviewOrder::Newest => {
                reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            }
            ReviewOrder::HighestRated => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
            ReviewOrder::LowestRated => reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
        }
        reviews
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::blob::MemoryStore;
    use chrono::{DateTime, TimeZone, Utc};

    fn author(id: &str) -> ReviewAuthor {
        ReviewAuthor {
            id: UserId::new(id),
            name: format!("user {id}"),
            email: format!("{id}@example.com"),
        }
    }

    fn review(rating: u8, author_id: &str, created_at: DateTime<Utc>) -> Review {
        Review {
            rating: Rating::new(rating).unwrap(),
            comment: format!("{rating} stars"),
            created_at,
            author_id: UserId::new(author_id),
            author_name: format!("user {author_id}"),
            author_email: format!("{author_id}@example.com"),
        }
    }

    fn ts(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).single().unwrap()
    }

    fn repo_with(product: &str, reviews: &[Review]) -> CollectionRepository<MemoryStore> {
        let mut repo = CollectionRepository::new(MemoryStore::new());
        repo.save(CollectionKind::Reviews, product, reviews).unwrap();
        repo
    }

    #[test]
    fn test_submit_requires_author() {
        let mut repo = CollectionRepository::new(MemoryStore::new());
        let mut reviews = ReviewService::new(&mut repo);

        let err = reviews
            .submit(&ItemId::new("p1"), None, 5, "great")
            .unwrap_err();
        assert!(matches!(err, StoreError::Unauthenticated));
    }

    #[test]
    fn test_submit_rejects_out_of_range_rating() {
        let mut repo = CollectionRepository::new(MemoryStore::new());
        let mut reviews = ReviewService::new(&mut repo);
        let ada = author("ada");

        for bad in [0, 6] {
            let err = reviews
                .submit(&ItemId::new("p1"), Some(&ada), bad, "?")
                .unwrap_err();
            assert!(matches!(err, StoreError::InvalidRating(_)));
        }
        assert!(reviews.list(&ItemId::new("p1")).is_empty());
    }

    #[test]
    fn test_submit_appends_in_order() {
        let mut repo = CollectionRepository::new(MemoryStore::new());
        let mut reviews = ReviewService::new(&mut repo);
        let product = ItemId::new("p1");

        reviews.submit(&product, Some(&author("a")), 4, "first").unwrap();
        reviews.submit(&product, Some(&author("b")), 2, "second").unwrap();

        let listed = reviews.list(&product);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed.first().unwrap().comment, "first");
        assert_eq!(listed.last().unwrap().comment, "second");
    }

    #[test]
    fn test_delete_by_non_author_is_forbidden() {
        let product = "p1";
        let mut repo = repo_with(product, &[review(4, "ada", ts(100))]);
        let mut reviews = ReviewService::new(&mut repo);

        let err = reviews
            .delete(&ItemId::new(product), &UserId::new("mallory"), 0)
            .unwrap_err();
        assert!(matches!(err, StoreError::Forbidden { .. }));
        assert_eq!(reviews.list(&ItemId::new(product)).len(), 1);
    }

    #[test]
    fn test_delete_out_of_range() {
        let product = "p1";
        let mut repo = repo_with(product, &[review(4, "ada", ts(100))]);
        let mut reviews = ReviewService::new(&mut repo);

        let err = reviews
            .delete(&ItemId::new(product), &UserId::new("ada"), 5)
            .unwrap_err();
        assert!(matches!(err, StoreError::OutOfRange { index: 5, len: 1 }));
    }

    #[test]
    fn test_delete_removes_exactly_the_target() {
        let product = "p1";
        let mut repo = repo_with(
            product,
            &[
                review(5, "ada", ts(100)),
                review(3, "bob", ts(200)),
                review(1, "ada", ts(300)),
            ],
        );
        let mut reviews = ReviewService::new(&mut repo);

        reviews
            .delete(&ItemId::new(product), &UserId::new("bob"), 1)
            .unwrap();

        let remaining = reviews.list(&ItemId::new(product));
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining.first().unwrap().rating.value(), 5);
        assert_eq!(remaining.last().unwrap().rating.value(), 1);
    }

    #[test]
    fn test_average_rating_empty_is_zero() {
        let mut repo = CollectionRepository::new(MemoryStore::new());
        let reviews = ReviewService::new(&mut repo);
        let avg = reviews.average_rating(&ItemId::new("unreviewed"));
        assert!((avg - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_rating_is_mean() {
        let product = "p1";
        let mut repo = repo_with(
            product,
            &[
                review(5, "a", ts(1)),
                review(3, "b", ts(2)),
                review(4, "c", ts(3)),
            ],
        );
        let reviews = ReviewService::new(&mut repo);
        let avg = reviews.average_rating(&ItemId::new(product));
        assert!((avg - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sorted_newest_is_descending_by_created_at() {
        let product = "p1";
        let mut repo = repo_with(
            product,
            &[
                review(1, "a", ts(100)),
                review(2, "b", ts(300)),
                review(3, "c", ts(200)),
            ],
        );
        let reviews = ReviewService::new(&mut repo);

        let sorted = reviews.sorted(&ItemId::new(product), ReviewOrder::Newest);
        let times: Vec<_> = sorted.iter().map(|r| r.created_at).collect();
        assert_eq!(times, vec![ts(300), ts(200), ts(100)]);
    }

    #[test]
    fn test_sorted_highest_rated_keeps_insertion_order_on_ties() {
        let product = "p1";
        let mut repo = repo_with(
            product,
            &[
                review(3, "a", ts(100)),
                review(5, "b", ts(200)),
                review(5, "c", ts(300)),
            ],
        );
        let reviews = ReviewService::new(&mut repo);

        let sorted = reviews.sorted(&ItemId::new(product), ReviewOrder::HighestRated);
        let pairs: Vec<_> = sorted
            .iter()
            .map(|r| (r.rating.value(), r.author_id.as_str().to_owned()))
            .collect();
        // Both fives first, in their original insertion order, then the three.
        assert_eq!(
            pairs,
            vec![
                (5, "b".to_owned()),
                (5, "c".to_owned()),
                (3, "a".to_owned())
            ]
        );
    }

    #[test]
    fn test_sorted_lowest_rated_is_ascending() {
        let product = "p1";
        let mut repo = repo_with(
            product,
            &[review(4, "a", ts(1)), review(2, "b", ts(2))],
        );
        let reviews = ReviewService::new(&mut repo);

        let sorted = reviews.sorted(&ItemId::new(product), ReviewOrder::LowestRated);
        let ratings: Vec<_> = sorted.iter().map(|r| r.rating.value()).collect();
        assert_eq!(ratings, vec![2, 4]);
    }
}
