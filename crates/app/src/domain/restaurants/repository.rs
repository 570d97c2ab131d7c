//! Restaurants Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    products::repository::escape_like,
    restaurants::{
        data::{NewRestaurant, RestaurantFilter},
        records::{RestaurantRecord, RestaurantUuid},
    },
};

const CREATE_RESTAURANT_SQL: &str = include_str!("sql/create_restaurant.sql");
const GET_RESTAURANT_SQL: &str = include_str!("sql/get_restaurant.sql");
const GET_RESTAURANT_BY_SLUG_SQL: &str = include_str!("sql/get_restaurant_by_slug.sql");
const LIST_RESTAURANTS_SQL: &str = include_str!("sql/list_restaurants.sql");
const LIST_FEATURED_RESTAURANTS_SQL: &str = include_str!("sql/list_featured_restaurants.sql");
const TOGGLE_RESTAURANT_STATUS_SQL: &str = include_str!("sql/toggle_restaurant_status.sql");
const TOGGLE_RESTAURANT_OPEN_SQL: &str = include_str!("sql/toggle_restaurant_open.sql");
const TOGGLE_RESTAURANT_FEATURED_SQL: &str = include_str!("sql/toggle_restaurant_featured.sql");
const COUNT_RESTAURANT_PRODUCTS_SQL: &str = include_str!("sql/count_restaurant_products.sql");
const DELETE_RESTAURANT_SQL: &str = include_str!("sql/delete_restaurant.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRestaurantsRepository;

impl PgRestaurantsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_restaurant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: &NewRestaurant,
    ) -> Result<RestaurantRecord, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(CREATE_RESTAURANT_SQL)
            .bind(restaurant.uuid.into_uuid())
            .bind(&restaurant.name)
            .bind(&restaurant.slug)
            .bind(restaurant.description.as_deref())
            .bind(&restaurant.city)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_restaurant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(GET_RESTAURANT_SQL)
            .bind(restaurant.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_restaurant_by_slug(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<RestaurantRecord, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(GET_RESTAURANT_BY_SLUG_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_restaurants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &RestaurantFilter,
    ) -> Result<Vec<RestaurantRecord>, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(LIST_RESTAURANTS_SQL)
            .bind(filter.city.as_deref().map(escape_like))
            .bind(filter.is_active)
            .bind(filter.is_featured)
            .bind(filter.is_open)
            .bind(filter.search.as_deref().map(escape_like))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_featured_restaurants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: u32,
    ) -> Result<Vec<RestaurantRecord>, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(LIST_FEATURED_RESTAURANTS_SQL)
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn toggle_restaurant_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(TOGGLE_RESTAURANT_STATUS_SQL)
            .bind(restaurant.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn toggle_restaurant_open(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(TOGGLE_RESTAURANT_OPEN_SQL)
            .bind(restaurant.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn toggle_restaurant_featured(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(TOGGLE_RESTAURANT_FEATURED_SQL)
            .bind(restaurant.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_RESTAURANT_PRODUCTS_SQL)
            .bind(restaurant.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(count.unsigned_abs())
    }

    pub(crate) async fn delete_restaurant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_RESTAURANT_SQL)
            .bind(restaurant.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for RestaurantRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: RestaurantUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            description: row.try_get("description")?,
            city: row.try_get("city")?,
            is_active: row.try_get("is_active")?,
            is_open: row.try_get("is_open")?,
            is_featured: row.try_get("is_featured")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
