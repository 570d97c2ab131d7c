//! Clear Basket Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    baskets::{errors::into_failure, models::ClearedResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Clear Basket Handler
#[endpoint(
    tags("baskets"),
    summary = "Clear Basket",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Basket cleared"),
        (status_code = StatusCode::NOT_FOUND, description = "Basket not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "baskets.clear", skip(depot, res), fields(user_uuid = tracing::field::Empty))]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<ClearedResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    match state.app.baskets.clear_basket(user).await {
        Ok(cleared) => Ok(Json(
            ActionResponse::ok(ClearedResponse { cleared })
                .with_message(format!("Cleared {cleared} items from basket")),
        )),
        Err(error) => Ok(into_failure(error, "clear basket", res)),
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use platter_app::domain::baskets::{BasketsServiceError, MockBasketsService};

    use crate::test_helpers::{TEST_USER_UUID, baskets_service};

    use super::*;

    fn make_service(baskets: MockBasketsService) -> Service {
        baskets_service(baskets, Router::with_path("basket").delete(handler))
    }

    #[tokio::test]
    async fn test_reports_cleared_count() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_clear_basket()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| Ok(3));

        let mut res = TestClient::delete("http://example.com/basket")
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ActionResponse<ClearedResponse> = res.take_json().await?;

        assert_eq!(body.data.map(|data| data.cleared), Some(3));
        assert_eq!(body.message.as_deref(), Some("Cleared 3 items from basket"));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_basket_returns_404() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_clear_basket()
            .once()
            .return_once(|_| Err(BasketsServiceError::BasketNotFound));

        let res = TestClient::delete("http://example.com/basket")
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
