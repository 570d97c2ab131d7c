//! Get Basket Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    baskets::{errors::into_failure, models::BasketResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Get Basket Handler
///
/// Returns the user's basket, its items and totals.
#[endpoint(
    tags("baskets"),
    summary = "Get Basket",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Basket"),
        (status_code = StatusCode::NOT_FOUND, description = "Basket not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<BasketResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    match state.app.baskets.get_user_basket(user).await {
        Ok(view) => Ok(Json(ActionResponse::ok(view.into()))),
        Err(error) => Ok(into_failure(error, "fetch basket", res)),
    }
}

#[cfg(test)]
mod tests {
    use platter::pricing::BasketSummary;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use platter_app::domain::baskets::{
        BasketsServiceError, MockBasketsService, data::BasketView, records::BasketItemUuid,
    };

    use crate::{
        baskets::handlers::{make_basket, make_item},
        test_helpers::{TEST_USER_UUID, baskets_service},
    };

    use super::*;

    fn make_service(baskets: MockBasketsService) -> Service {
        baskets_service(baskets, Router::with_path("basket").get(handler))
    }

    #[tokio::test]
    async fn test_returns_items_in_order() -> TestResult {
        let first = BasketItemUuid::new();
        let second = BasketItemUuid::new();
        let basket = make_basket(vec![make_item(first, 300, 1)?, make_item(second, 450, 2)?]);
        let summary = BasketSummary::calculate(&basket.items);

        let mut baskets = MockBasketsService::new();

        baskets
            .expect_get_user_basket()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(BasketView { basket, summary }));

        let mut res = TestClient::get("http://example.com/basket")
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ActionResponse<BasketResponse> = res.take_json().await?;
        let data = body.data.ok_or("missing data")?;
        let items: Vec<_> = data.items.iter().map(|item| item.uuid).collect();

        assert_eq!(items, vec![first.into_uuid(), second.into_uuid()]);
        assert_eq!(data.summary.total, "12.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_basket_returns_404() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_get_user_basket()
            .once()
            .return_once(|_| Err(BasketsServiceError::BasketNotFound));

        let mut res = TestClient::get("http://example.com/basket")
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ActionResponse<BasketResponse> = res.take_json().await?;

        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Basket not found"));

        Ok(())
    }
}
