//! Reviews service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        products::records::ProductUuid,
        reviews::{
            data::{NewReview, ReviewFilter, ReviewStats, ReviewUpdate, is_valid_rating},
            errors::ReviewsServiceError,
            records::{ReviewRecord, ReviewUuid},
            repository::PgReviewsRepository,
        },
        users::records::UserUuid,
    },
    revalidation::{TracingRevalidator, ViewRevalidator, revalidate_product_views},
};

#[derive(Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
    revalidator: Arc<dyn ViewRevalidator>,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self::with_revalidator(db, Arc::new(TracingRevalidator))
    }

    #[must_use]
    pub fn with_revalidator(db: Db, revalidator: Arc<dyn ViewRevalidator>) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
            revalidator,
        }
    }
}

impl fmt::Debug for PgReviewsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgReviewsService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn create_review(&self, review: NewReview) -> Result<ReviewRecord, ReviewsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let existing = self
            .repository
            .find_review_by_user_and_product(&mut tx, review.user_uuid, review.product_uuid)
            .await?;

        if existing.is_some() {
            return Err(ReviewsServiceError::AlreadyReviewed);
        }

        if !is_valid_rating(review.rating) {
            return Err(ReviewsServiceError::InvalidRating);
        }

        let created = self.repository.create_review(&mut tx, &review).await?;

        self.repository
            .refresh_product_rating(&mut tx, review.product_uuid)
            .await?;

        tx.commit().await?;

        info!(
            review_uuid = %created.uuid,
            product_uuid = %created.product_uuid,
            rating = created.rating,
            "created review"
        );

        revalidate_product_views(self.revalidator.as_ref(), created.product_uuid);

        Ok(created)
    }

    async fn get_review(&self, review: ReviewUuid) -> Result<ReviewRecord, ReviewsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let review = self.repository.get_review(&mut tx, review).await?;

        tx.commit().await?;

        Ok(review)
    }

    async fn list_reviews(
        &self,
        filter: ReviewFilter,
    ) -> Result<Vec<ReviewRecord>, ReviewsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let reviews = self.repository.list_reviews(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(reviews)
    }

    async fn update_review(
        &self,
        user: UserUuid,
        review: ReviewUuid,
        update: ReviewUpdate,
    ) -> Result<ReviewRecord, ReviewsServiceError> {
        if update.rating.is_some_and(|rating| !is_valid_rating(rating)) {
            return Err(ReviewsServiceError::InvalidRating);
        }

        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_review(&mut tx, user, review, &update)
            .await?;

        if update.rating.is_some() {
            self.repository
                .refresh_product_rating(&mut tx, updated.product_uuid)
                .await?;
        }

        tx.commit().await?;

        revalidate_product_views(self.revalidator.as_ref(), updated.product_uuid);

        Ok(updated)
    }

    async fn delete_review(
        &self,
        user: UserUuid,
        review: ReviewUuid,
    ) -> Result<(), ReviewsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self
            .repository
            .delete_review(&mut tx, user, review)
            .await?
            .ok_or(ReviewsServiceError::NotFound)?;

        self.repository
            .refresh_product_rating(&mut tx, product)
            .await?;

        tx.commit().await?;

        info!(review_uuid = %review, product_uuid = %product, "deleted review");

        revalidate_product_views(self.revalidator.as_ref(), product);

        Ok(())
    }

    async fn product_review_stats(
        &self,
        product: ProductUuid,
    ) -> Result<ReviewStats, ReviewsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let counts = self.repository.count_by_rating(&mut tx, product).await?;

        tx.commit().await?;

        Ok(ReviewStats::from_counts(&counts))
    }

    async fn user_review_for_product(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<Option<ReviewRecord>, ReviewsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let review = self
            .repository
            .find_review_by_user_and_product(&mut tx, user, product)
            .await?;

        tx.commit().await?;

        Ok(review)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Records a user's review of a product and refreshes the product's rating.
    async fn create_review(&self, review: NewReview) -> Result<ReviewRecord, ReviewsServiceError>;

    /// Retrieve a single review.
    async fn get_review(&self, review: ReviewUuid) -> Result<ReviewRecord, ReviewsServiceError>;

    /// Retrieves reviews matching the filter, newest first.
    async fn list_reviews(
        &self,
        filter: ReviewFilter,
    ) -> Result<Vec<ReviewRecord>, ReviewsServiceError>;

    /// Applies a partial update to the user's own review.
    async fn update_review(
        &self,
        user: UserUuid,
        review: ReviewUuid,
        update: ReviewUpdate,
    ) -> Result<ReviewRecord, ReviewsServiceError>;

    /// Deletes the user's own review and refreshes the product's rating.
    async fn delete_review(
        &self,
        user: UserUuid,
        review: ReviewUuid,
    ) -> Result<(), ReviewsServiceError>;

    /// Review count, average and per-star distribution for a product.
    async fn product_review_stats(
        &self,
        product: ProductUuid,
    ) -> Result<ReviewStats, ReviewsServiceError>;

    /// The user's review of the product, if they wrote one.
    async fn user_review_for_product(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<Option<ReviewRecord>, ReviewsServiceError>;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::products::ProductsService,
        revalidation::MockViewRevalidator,
        test::{
            TestContext,
            helpers::{create_product, create_user},
        },
    };

    use super::*;

    fn new_review(user: UserUuid, product: ProductUuid, rating: u8) -> NewReview {
        NewReview {
            uuid: ReviewUuid::new(),
            user_uuid: user,
            product_uuid: product,
            rating,
            comment: None,
        }
    }

    #[tokio::test]
    async fn review_updates_product_rating_and_count() -> TestResult {
        let ctx = TestContext::new().await;
        let ada = create_user(&ctx, "Ada", "ada@example.com").await?;
        let bob = create_user(&ctx, "Bob", "bob@example.com").await?;
        let product = create_product(&ctx, "Ramen", "11.00", 5).await?;

        let created = ctx
            .reviews
            .create_review(NewReview {
                comment: Some("Rich broth".to_string()),
                ..new_review(ada.uuid, product.uuid, 5)
            })
            .await?;

        assert_eq!(created.user_name, "Ada");
        assert_eq!(created.product_name, "Ramen");
        assert_eq!(created.comment.as_deref(), Some("Rich broth"));

        ctx.reviews
            .create_review(new_review(bob.uuid, product.uuid, 4))
            .await?;

        let rated = ctx.products.get_product(product.uuid).await?;

        assert_eq!(rated.rating, Decimal::from_str("4.50")?);
        assert_eq!(rated.reviews_count, 2);

        Ok(())
    }

    #[tokio::test]
    async fn second_review_of_a_product_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada", "ada@example.com").await?;
        let product = create_product(&ctx, "Ramen", "11.00", 5).await?;

        ctx.reviews
            .create_review(new_review(user.uuid, product.uuid, 3))
            .await?;

        let result = ctx
            .reviews
            .create_review(new_review(user.uuid, product.uuid, 9))
            .await;

        assert!(
            matches!(result, Err(ReviewsServiceError::AlreadyReviewed)),
            "expected AlreadyReviewed, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_rating_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada", "ada@example.com").await?;
        let product = create_product(&ctx, "Ramen", "11.00", 5).await?;

        for rating in [0, 6] {
            let result = ctx
                .reviews
                .create_review(new_review(user.uuid, product.uuid, rating))
                .await;

            assert!(
                matches!(result, Err(ReviewsServiceError::InvalidRating)),
                "expected InvalidRating, got {result:?}"
            );
        }

        let unrated = ctx.products.get_product(product.uuid).await?;

        assert_eq!(unrated.reviews_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn review_of_unknown_product_is_product_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada", "ada@example.com").await?;

        let result = ctx
            .reviews
            .create_review(new_review(user.uuid, ProductUuid::new(), 4))
            .await;

        assert!(
            matches!(result, Err(ReviewsServiceError::ProductNotFound)),
            "expected ProductNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_recalculates_rating() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada", "ada@example.com").await?;
        let product = create_product(&ctx, "Ramen", "11.00", 5).await?;

        let review = ctx
            .reviews
            .create_review(new_review(user.uuid, product.uuid, 2))
            .await?;

        let updated = ctx
            .reviews
            .update_review(
                user.uuid,
                review.uuid,
                ReviewUpdate {
                    rating: Some(5),
                    comment: Some("Better second time".to_string()),
                },
            )
            .await?;

        assert_eq!(updated.rating, 5);
        assert_eq!(updated.comment.as_deref(), Some("Better second time"));

        let rated = ctx.products.get_product(product.uuid).await?;

        assert_eq!(rated.rating, Decimal::from(5));

        Ok(())
    }

    #[tokio::test]
    async fn other_users_cannot_edit_or_delete_a_review() -> TestResult {
        let ctx = TestContext::new().await;
        let author = create_user(&ctx, "Ada", "ada@example.com").await?;
        let stranger = create_user(&ctx, "Eve", "eve@example.com").await?;
        let product = create_product(&ctx, "Ramen", "11.00", 5).await?;

        let review = ctx
            .reviews
            .create_review(new_review(author.uuid, product.uuid, 4))
            .await?;

        let edit = ctx
            .reviews
            .update_review(
                stranger.uuid,
                review.uuid,
                ReviewUpdate {
                    rating: Some(1),
                    ..ReviewUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(edit, Err(ReviewsServiceError::NotFound)),
            "expected NotFound, got {edit:?}"
        );

        let delete = ctx.reviews.delete_review(stranger.uuid, review.uuid).await;

        assert!(
            matches!(delete, Err(ReviewsServiceError::NotFound)),
            "expected NotFound, got {delete:?}"
        );

        assert_eq!(ctx.reviews.get_review(review.uuid).await?.rating, 4);

        Ok(())
    }

    #[tokio::test]
    async fn deleting_the_last_review_resets_rating() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada", "ada@example.com").await?;
        let product = create_product(&ctx, "Ramen", "11.00", 5).await?;

        let review = ctx
            .reviews
            .create_review(new_review(user.uuid, product.uuid, 3))
            .await?;

        ctx.reviews.delete_review(user.uuid, review.uuid).await?;

        let unrated = ctx.products.get_product(product.uuid).await?;

        assert_eq!(unrated.rating, Decimal::ZERO);
        assert_eq!(unrated.reviews_count, 0);

        let gone = ctx.reviews.get_review(review.uuid).await;

        assert!(
            matches!(gone, Err(ReviewsServiceError::NotFound)),
            "expected NotFound, got {gone:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_rating_range() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Ramen", "11.00", 5).await?;

        for (name, rating) in [("Ada", 1), ("Bob", 3), ("Cy", 5)] {
            let user = create_user(&ctx, name, &format!("{name}@example.com")).await?;
            ctx.reviews
                .create_review(new_review(user.uuid, product.uuid, rating))
                .await?;
        }

        let middle = ctx
            .reviews
            .list_reviews(ReviewFilter {
                product_uuid: Some(product.uuid),
                min_rating: Some(2),
                max_rating: Some(4),
                ..ReviewFilter::default()
            })
            .await?;

        assert_eq!(middle.len(), 1);
        assert_eq!(middle[0].user_name, "Bob");

        let all = ctx.reviews.list_reviews(ReviewFilter::default()).await?;

        let names: Vec<&str> = all.iter().map(|review| review.user_name.as_str()).collect();

        assert_eq!(names, vec!["Cy", "Bob", "Ada"]);

        Ok(())
    }

    #[tokio::test]
    async fn stats_report_distribution_and_average() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Ramen", "11.00", 5).await?;

        for (name, rating) in [("Ada", 5), ("Bob", 4), ("Cy", 4)] {
            let user = create_user(&ctx, name, &format!("{name}@example.com")).await?;
            ctx.reviews
                .create_review(new_review(user.uuid, product.uuid, rating))
                .await?;
        }

        let stats = ctx.reviews.product_review_stats(product.uuid).await?;

        assert_eq!(stats.total_reviews, 3);
        assert_eq!(stats.average_rating, Decimal::from_str("4.33")?);

        let counts: Vec<(u8, u64)> = stats
            .distribution
            .iter()
            .map(|entry| (entry.rating, entry.count))
            .collect();

        assert_eq!(counts, vec![(5, 1), (4, 2), (3, 0), (2, 0), (1, 0)]);

        let stored = ctx.products.get_product(product.uuid).await?;

        assert_eq!(stored.rating, stats.average_rating);

        Ok(())
    }

    #[tokio::test]
    async fn user_review_for_product_is_optional() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada", "ada@example.com").await?;
        let product = create_product(&ctx, "Ramen", "11.00", 5).await?;

        assert!(
            ctx.reviews
                .user_review_for_product(user.uuid, product.uuid)
                .await?
                .is_none()
        );

        let review = ctx
            .reviews
            .create_review(new_review(user.uuid, product.uuid, 4))
            .await?;

        let found = ctx
            .reviews
            .user_review_for_product(user.uuid, product.uuid)
            .await?;

        assert_eq!(found.map(|found| found.uuid), Some(review.uuid));

        Ok(())
    }

    #[tokio::test]
    async fn review_mutations_revalidate_product_views() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada", "ada@example.com").await?;
        let product = create_product(&ctx, "Ramen", "11.00", 5).await?;
        let product_view = format!("/products/{}", product.uuid);

        let mut revalidator = MockViewRevalidator::new();

        revalidator
            .expect_revalidate()
            .withf(|path| path == "/products")
            .times(2)
            .return_const(());

        revalidator
            .expect_revalidate()
            .withf(move |path| path == product_view)
            .times(2)
            .return_const(());

        let reviews = PgReviewsService::with_revalidator(ctx.db.clone(), Arc::new(revalidator));

        let review = reviews
            .create_review(new_review(user.uuid, product.uuid, 4))
            .await?;

        reviews.delete_review(user.uuid, review.uuid).await?;

        Ok(())
    }
}
