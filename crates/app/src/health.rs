//! Service health.

use async_trait::async_trait;
use mockall::automock;

use crate::database::Db;

#[derive(Debug, Clone)]
pub struct PgHealthService {
    db: Db,
}

impl PgHealthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthService for PgHealthService {
    async fn check_database(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(self.db.pool()).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Round-trips a trivial query through the connection pool.
    async fn check_database(&self) -> Result<(), sqlx::Error>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn reachable_database_is_healthy() -> TestResult {
        let ctx = TestContext::new().await;

        PgHealthService::new(ctx.db.clone()).check_database().await?;

        Ok(())
    }

    #[tokio::test]
    async fn closed_pool_is_unhealthy() {
        let ctx = TestContext::new().await;
        let health = PgHealthService::new(ctx.db.clone());

        ctx.db.pool().close().await;

        assert!(health.check_database().await.is_err());
    }
}
