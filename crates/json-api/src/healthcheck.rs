//! Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{extensions::*, state::State};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Health {
    Ok,
    Unavailable,
}

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Overall status, `ok` only when every dependency is
    pub status: Health,

    /// Database reachability
    pub database: Health,
}

/// Healthcheck handler
///
/// Reports 503 when the database cannot be reached, so load balancers stop
/// routing baskets to an instance that cannot persist them.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Healthy"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Database unreachable"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let database = match state.app.health.check_database().await {
        Ok(()) => Health::Ok,
        Err(source) => {
            warn!(error = %source, "healthcheck could not reach the database");

            res.status_code(StatusCode::SERVICE_UNAVAILABLE);

            Health::Unavailable
        }
    };

    Ok(Json(HealthResponse {
        status: database,
        database,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use platter_app::health::MockHealthService;

    use crate::test_helpers::Mocks;

    use super::*;

    fn make_service(health: MockHealthService) -> Service {
        let state = Mocks {
            health,
            ..Mocks::new()
        }
        .into_state();

        Service::new(
            Router::new()
                .hoop(inject(state))
                .push(Router::with_path("healthcheck").get(handler)),
        )
    }

    #[tokio::test]
    async fn test_healthy_database() -> TestResult {
        let mut health = MockHealthService::new();

        health
            .expect_check_database()
            .once()
            .return_once(|| Ok(()));

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(health))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: HealthResponse = res.take_json().await?;

        assert_eq!(body.status, Health::Ok);
        assert_eq!(body.database, Health::Ok);

        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_database_is_503() -> TestResult {
        let mut health = MockHealthService::new();

        health
            .expect_check_database()
            .once()
            .return_once(|| Err(sqlx::Error::PoolTimedOut));

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(health))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["status"], "unavailable");
        assert_eq!(body["database"], "unavailable");

        Ok(())
    }
}
