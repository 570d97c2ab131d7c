//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    categories::records::CategoryUuid,
    products::{
        data::{NewProduct, ProductFilter, ProductUpdate},
        records::{ProductRecord, ProductUuid},
    },
    restaurants::records::RestaurantUuid,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const TOGGLE_PRODUCT_STATUS_SQL: &str = include_str!("sql/toggle_product_status.sql");
const TOGGLE_PRODUCT_FEATURED_SQL: &str = include_str!("sql/toggle_product_featured.sql");
const UPDATE_PRODUCT_STOCK_SQL: &str = include_str!("sql/update_product_stock.sql");
const COUNT_BASKET_ITEMS_SQL: &str = include_str!("sql/count_basket_items_for_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.restaurant_uuid.map(RestaurantUuid::into_uuid))
            .bind(filter.category_uuid.map(CategoryUuid::into_uuid))
            .bind(filter.is_active)
            .bind(filter.is_featured)
            .bind(filter.search.as_deref().map(escape_like))
            .bind(filter.min_price)
            .bind(filter.max_price)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Current catalog snapshot for a product, if it exists.
    pub(crate) async fn find_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.restaurant_uuid.map(RestaurantUuid::into_uuid))
            .bind(product.category_uuid.map(CategoryUuid::into_uuid))
            .bind(&product.name)
            .bind(product.description.as_deref())
            .bind(product.price)
            .bind(product.discount)
            .bind(stock_to_column(product.stock)?)
            .bind(product.is_active)
            .bind(product.is_featured)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        update: &ProductUpdate,
    ) -> Result<ProductRecord, sqlx::Error> {
        let stock = update.stock.map(stock_to_column).transpose()?;

        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.restaurant_uuid.map(RestaurantUuid::into_uuid))
            .bind(update.category_uuid.map(CategoryUuid::into_uuid))
            .bind(update.name.as_deref())
            .bind(update.description.as_deref())
            .bind(update.price)
            .bind(update.discount)
            .bind(stock)
            .bind(update.is_active)
            .bind(update.is_featured)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn toggle_product_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(TOGGLE_PRODUCT_STATUS_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn toggle_product_featured(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(TOGGLE_PRODUCT_FEATURED_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        stock: u32,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(stock_to_column(stock)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_basket_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_BASKET_ITEMS_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(count.unsigned_abs())
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            restaurant_uuid: row
                .try_get::<Option<Uuid>, _>("restaurant_uuid")?
                .map(RestaurantUuid::from_uuid),
            category_uuid: row
                .try_get::<Option<Uuid>, _>("category_uuid")?
                .map(CategoryUuid::from_uuid),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            discount: row.try_get("discount")?,
            stock: try_get_u32(row, "stock")?,
            is_active: row.try_get("is_active")?,
            is_featured: row.try_get("is_featured")?,
            rating: row.try_get("rating")?,
            reviews_count: try_get_u32(row, "reviews_count")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

pub(crate) fn try_get_u32(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let stock_i32: i32 = row.try_get(col)?;

    u32::try_from(stock_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

fn stock_to_column(stock: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(stock).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

/// Escape `LIKE` wildcards so user search text matches literally.
pub(crate) fn escape_like(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len());

    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }

        escaped.push(c);
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("ramen"), "ramen");
    }

    #[test]
    fn stock_beyond_column_range_is_rejected() {
        assert!(stock_to_column(u32::MAX).is_err());
        assert!(matches!(stock_to_column(12), Ok(12)));
    }
}
