//! Basket Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use platter::quantity::Quantity;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    baskets::{
        data::NewBasketItem,
        records::{
            BasketItemRecord, BasketItemUuid, BasketProduct, BasketUuid, CategoryRef,
            RestaurantRef,
        },
    },
    categories::records::CategoryUuid,
    products::{records::ProductUuid, repository::try_get_u32},
    restaurants::records::RestaurantUuid,
    users::records::UserUuid,
};

const LIST_BASKET_ITEMS_SQL: &str = include_str!("../sql/list_basket_items.sql");
const FIND_BASKET_ITEM_FOR_USER_SQL: &str = include_str!("../sql/find_basket_item_for_user.sql");
const FIND_BASKET_ITEM_BY_PRODUCT_SQL: &str =
    include_str!("../sql/find_basket_item_by_product.sql");
const CREATE_BASKET_ITEM_SQL: &str = include_str!("../sql/create_basket_item.sql");
const UPDATE_BASKET_ITEM_QUANTITY_SQL: &str =
    include_str!("../sql/update_basket_item_quantity.sql");
const DELETE_BASKET_ITEM_SQL: &str = include_str!("../sql/delete_basket_item.sql");
const DELETE_BASKET_ITEM_FOR_USER_SQL: &str =
    include_str!("../sql/delete_basket_item_for_user.sql");
const DELETE_BASKET_ITEM_BY_PRODUCT_SQL: &str =
    include_str!("../sql/delete_basket_item_by_product.sql");
const CLEAR_BASKET_ITEMS_SQL: &str = include_str!("../sql/clear_basket_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBasketItemsRepository;

impl PgBasketItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
    ) -> Result<Vec<BasketItemRecord>, sqlx::Error> {
        query_as::<Postgres, BasketItemRecord>(LIST_BASKET_ITEMS_SQL)
            .bind(basket.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// An item, only if it sits in the given user's basket.
    pub(crate) async fn find_item_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<Option<BasketItemRecord>, sqlx::Error> {
        query_as::<Postgres, BasketItemRecord>(FIND_BASKET_ITEM_FOR_USER_SQL)
            .bind(item.into_uuid())
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_item_by_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
        product: ProductUuid,
    ) -> Result<Option<BasketItemRecord>, sqlx::Error> {
        query_as::<Postgres, BasketItemRecord>(FIND_BASKET_ITEM_BY_PRODUCT_SQL)
            .bind(basket.into_uuid())
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
        item: NewBasketItem,
    ) -> Result<BasketItemRecord, sqlx::Error> {
        query_as::<Postgres, BasketItemRecord>(CREATE_BASKET_ITEM_SQL)
            .bind(item.uuid.into_uuid())
            .bind(basket.into_uuid())
            .bind(item.product_uuid.into_uuid())
            .bind(item.quantity)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: BasketItemUuid,
        quantity: Quantity,
    ) -> Result<BasketItemRecord, sqlx::Error> {
        query_as::<Postgres, BasketItemRecord>(UPDATE_BASKET_ITEM_QUANTITY_SQL)
            .bind(item.into_uuid())
            .bind(i32::from(quantity))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: BasketItemUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BASKET_ITEM_SQL)
            .bind(item.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_item_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BASKET_ITEM_FOR_USER_SQL)
            .bind(item.into_uuid())
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_item_by_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BASKET_ITEM_BY_PRODUCT_SQL)
            .bind(basket.into_uuid())
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn clear_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_BASKET_ITEMS_SQL)
            .bind(basket.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BasketItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity_i32: i32 = row.try_get("quantity")?;

        let quantity = Quantity::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        let restaurant = row
            .try_get::<Option<Uuid>, _>("restaurant_uuid")?
            .map(|uuid| -> sqlx::Result<RestaurantRef> {
                Ok(RestaurantRef {
                    uuid: RestaurantUuid::from_uuid(uuid),
                    name: row.try_get("restaurant_name")?,
                })
            })
            .transpose()?;

        let category = row
            .try_get::<Option<Uuid>, _>("category_uuid")?
            .map(|uuid| -> sqlx::Result<CategoryRef> {
                Ok(CategoryRef {
                    uuid: CategoryUuid::from_uuid(uuid),
                    name: row.try_get("category_name")?,
                })
            })
            .transpose()?;

        Ok(Self {
            uuid: BasketItemUuid::from_uuid(row.try_get("uuid")?),
            basket_uuid: BasketUuid::from_uuid(row.try_get("basket_uuid")?),
            quantity,
            product: BasketProduct {
                uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
                name: row.try_get("product_name")?,
                price: row.try_get("product_price")?,
                discount: row.try_get("product_discount")?,
                stock: try_get_u32(row, "product_stock")?,
                is_active: row.try_get("product_is_active")?,
                restaurant,
                category,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
