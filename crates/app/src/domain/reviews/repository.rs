//! Reviews Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    products::records::ProductUuid,
    reviews::{
        data::{NewReview, RatingCount, ReviewFilter, ReviewUpdate},
        records::{ReviewRecord, ReviewUuid},
    },
    users::records::UserUuid,
};

const CREATE_REVIEW_SQL: &str = include_str!("sql/create_review.sql");
const GET_REVIEW_SQL: &str = include_str!("sql/get_review.sql");
const FIND_REVIEW_BY_USER_AND_PRODUCT_SQL: &str =
    include_str!("sql/find_review_by_user_and_product.sql");
const LIST_REVIEWS_SQL: &str = include_str!("sql/list_reviews.sql");
const UPDATE_REVIEW_SQL: &str = include_str!("sql/update_review.sql");
const DELETE_REVIEW_SQL: &str = include_str!("sql/delete_review.sql");
const COUNT_REVIEWS_BY_RATING_SQL: &str = include_str!("sql/count_reviews_by_rating.sql");
const REFRESH_PRODUCT_RATING_SQL: &str = include_str!("sql/refresh_product_rating.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReviewsRepository;

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        review: &NewReview,
    ) -> Result<ReviewRecord, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(CREATE_REVIEW_SQL)
            .bind(review.uuid.into_uuid())
            .bind(review.user_uuid.into_uuid())
            .bind(review.product_uuid.into_uuid())
            .bind(i16::from(review.rating))
            .bind(review.comment.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        review: ReviewUuid,
    ) -> Result<ReviewRecord, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(GET_REVIEW_SQL)
            .bind(review.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_review_by_user_and_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<Option<ReviewRecord>, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(FIND_REVIEW_BY_USER_AND_PRODUCT_SQL)
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ReviewFilter,
    ) -> Result<Vec<ReviewRecord>, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(LIST_REVIEWS_SQL)
            .bind(filter.product_uuid.map(ProductUuid::into_uuid))
            .bind(filter.user_uuid.map(UserUuid::into_uuid))
            .bind(filter.min_rating.map(i16::from))
            .bind(filter.max_rating.map(i16::from))
            .fetch_all(&mut **tx)
            .await
    }

    /// Update a review written by `user`. Other users' reviews are not found.
    pub(crate) async fn update_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        review: ReviewUuid,
        update: &ReviewUpdate,
    ) -> Result<ReviewRecord, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(UPDATE_REVIEW_SQL)
            .bind(review.into_uuid())
            .bind(user.into_uuid())
            .bind(update.rating.map(i16::from))
            .bind(update.comment.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    /// Delete a review written by `user`, returning the reviewed product.
    pub(crate) async fn delete_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        review: ReviewUuid,
    ) -> Result<Option<ProductUuid>, sqlx::Error> {
        let product: Option<Uuid> = query_scalar(DELETE_REVIEW_SQL)
            .bind(review.into_uuid())
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(product.map(ProductUuid::from_uuid))
    }

    pub(crate) async fn count_by_rating(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<RatingCount>, sqlx::Error> {
        let rows = query(COUNT_REVIEWS_BY_RATING_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        rows.iter()
            .map(|row| -> Result<RatingCount, sqlx::Error> {
                let count: i64 = row.try_get("count")?;

                Ok(RatingCount {
                    rating: try_get_rating(row)?,
                    count: count.unsigned_abs(),
                })
            })
            .collect()
    }

    /// Recompute the product's average rating and review count from its reviews.
    pub(crate) async fn refresh_product_rating(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<(), sqlx::Error> {
        query(REFRESH_PRODUCT_RATING_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

fn try_get_rating(row: &PgRow) -> Result<u8, sqlx::Error> {
    let rating: i16 = row.try_get("rating")?;

    u8::try_from(rating).map_err(|e| sqlx::Error::ColumnDecode {
        index: "rating".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for ReviewRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ReviewUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            user_name: row.try_get("user_name")?,
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            product_name: row.try_get("product_name")?,
            rating: try_get_rating(row)?,
            comment: row.try_get("comment")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
