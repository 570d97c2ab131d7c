//! Auth repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    auth::models::{NewSession, SessionMetadata, SessionUuid},
    domain::users::records::UserUuid,
};

const FIND_USER_BY_TOKEN_HASH_SQL: &str = include_str!("sql/find_user_by_token_hash.sql");
const CREATE_SESSION_SQL: &str = include_str!("sql/create_session.sql");
const REVOKE_SESSION_SQL: &str = include_str!("sql/revoke_session.sql");
const TOUCH_SESSION_SQL: &str = include_str!("sql/touch_session.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_user_by_token_hash(
        &self,
        hash: &str,
    ) -> Result<Option<UserUuid>, sqlx::Error> {
        query_scalar::<Postgres, Uuid>(FIND_USER_BY_TOKEN_HASH_SQL)
            .bind(hash)
            .fetch_optional(&self.pool)
            .await
            .map(|user| user.map(UserUuid::from_uuid))
    }

    pub(crate) async fn create_session(
        &self,
        session: &NewSession,
    ) -> Result<SessionMetadata, sqlx::Error> {
        query_as::<Postgres, SessionMetadata>(CREATE_SESSION_SQL)
            .bind(session.uuid.into_uuid())
            .bind(session.user_uuid.into_uuid())
            .bind(&session.token_hash)
            .bind(session.expires_at.map(SqlxTimestamp::from))
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn revoke_session(
        &self,
        session: SessionUuid,
    ) -> Result<Option<SessionMetadata>, sqlx::Error> {
        query_as::<Postgres, SessionMetadata>(REVOKE_SESSION_SQL)
            .bind(session.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn touch_session(&self, hash: &str) -> Result<u64, sqlx::Error> {
        let rows_affected = query(TOUCH_SESSION_SQL)
            .bind(hash)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for SessionMetadata {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SessionUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            last_used_at: row
                .try_get::<Option<SqlxTimestamp>, _>("last_used_at")?
                .map(SqlxTimestamp::to_jiff),
            expires_at: row
                .try_get::<Option<SqlxTimestamp>, _>("expires_at")?
                .map(SqlxTimestamp::to_jiff),
            revoked_at: row
                .try_get::<Option<SqlxTimestamp>, _>("revoked_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
