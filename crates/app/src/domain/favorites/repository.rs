//! Favorites Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    categories::records::CategoryUuid,
    favorites::{
        data::FavoriteFilter,
        records::{FavoriteRecord, FavoriteUuid},
    },
    products::records::{ProductRecord, ProductUuid},
    restaurants::records::RestaurantUuid,
    users::records::UserUuid,
};

const CREATE_FAVORITE_SQL: &str = include_str!("sql/create_favorite.sql");
const LIST_FAVORITES_SQL: &str = include_str!("sql/list_favorites.sql");
const DELETE_FAVORITE_SQL: &str = include_str!("sql/delete_favorite.sql");
const IS_FAVORITE_SQL: &str = include_str!("sql/is_favorite.sql");
const COUNT_FAVORITES_SQL: &str = include_str!("sql/count_favorites.sql");
const CLEAR_FAVORITES_SQL: &str = include_str!("sql/clear_favorites.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFavoritesRepository;

impl PgFavoritesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_favorite(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<FavoriteRecord, sqlx::Error> {
        query_as::<Postgres, FavoriteRecord>(CREATE_FAVORITE_SQL)
            .bind(FavoriteUuid::new().into_uuid())
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_favorites(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        filter: FavoriteFilter,
    ) -> Result<Vec<FavoriteRecord>, sqlx::Error> {
        query_as::<Postgres, FavoriteRecord>(LIST_FAVORITES_SQL)
            .bind(user.into_uuid())
            .bind(filter.category_uuid.map(CategoryUuid::into_uuid))
            .bind(filter.restaurant_uuid.map(RestaurantUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_favorite(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_FAVORITE_SQL)
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn is_favorite(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(IS_FAVORITE_SQL)
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_favorites(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_FAVORITES_SQL)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(count.unsigned_abs())
    }

    pub(crate) async fn clear_favorites(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_FAVORITES_SQL)
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for FavoriteRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: FavoriteUuid::from_uuid(row.try_get("favorite_uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("favorite_user_uuid")?),
            product: ProductRecord::from_row(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("favorited_at")?.to_jiff(),
        })
    }
}
