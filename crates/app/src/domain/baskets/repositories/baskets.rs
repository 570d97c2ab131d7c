//! Baskets Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    baskets::records::{BasketRecord, BasketUuid},
    users::records::UserUuid,
};

const FIND_BASKET_BY_USER_SQL: &str = include_str!("../sql/find_basket_by_user.sql");
const CREATE_BASKET_SQL: &str = include_str!("../sql/create_basket.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBasketsRepository;

impl PgBasketsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// The user's basket without its items.
    pub(crate) async fn find_basket_by_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<BasketRecord>, sqlx::Error> {
        query_as::<Postgres, BasketRecord>(FIND_BASKET_BY_USER_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Create the user's basket, or return the one a concurrent request created first.
    pub(crate) async fn create_basket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
        user: UserUuid,
    ) -> Result<BasketRecord, sqlx::Error> {
        let created = query_as::<Postgres, BasketRecord>(CREATE_BASKET_SQL)
            .bind(basket.into_uuid())
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        match created {
            Some(created) => Ok(created),
            None => self
                .find_basket_by_user(tx, user)
                .await?
                .ok_or(sqlx::Error::RowNotFound),
        }
    }
}

impl<'r> FromRow<'r, PgRow> for BasketRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BasketUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
