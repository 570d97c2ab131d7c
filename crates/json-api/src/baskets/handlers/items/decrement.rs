//! Decrement Basket Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use platter_app::domain::baskets::data::DecrementOutcome;

use crate::{
    baskets::{
        errors::into_failure,
        models::{DecrementAction, DecrementResponse},
    },
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Decrement Basket Item Handler
///
/// Takes one unit off an item. An item at one unit is removed.
#[endpoint(
    tags("baskets"),
    summary = "Decrement Basket Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item decremented or removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Basket item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<DecrementResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let outcome = match state
        .app
        .baskets
        .decrement_basket_item(user, item.into_inner().into())
        .await
    {
        Ok(outcome) => outcome,
        Err(error) => return Ok(into_failure(error, "decrement basket item", res)),
    };

    let response = match outcome {
        DecrementOutcome::Removed(_) => {
            ActionResponse::ok(DecrementResponse::from(outcome))
                .with_message("Item removed from basket")
        }
        DecrementOutcome::Updated(_) => ActionResponse::ok(DecrementResponse::from(outcome)),
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use platter_app::domain::baskets::{
        BasketsServiceError, MockBasketsService, records::BasketItemUuid,
    };

    use crate::{baskets::handlers::make_item, test_helpers::baskets_service};

    use super::*;

    fn make_service(baskets: MockBasketsService) -> Service {
        baskets_service(
            baskets,
            Router::with_path("basket/items/{item}/decrement").post(handler),
        )
    }

    #[tokio::test]
    async fn test_returns_remaining_item() -> TestResult {
        let uuid = BasketItemUuid::new();
        let item = make_item(uuid, 250, 1)?;

        let mut baskets = MockBasketsService::new();

        baskets
            .expect_decrement_basket_item()
            .once()
            .withf(move |_, i| *i == uuid)
            .return_once(move |_, _| Ok(DecrementOutcome::Updated(item)));

        let mut res = TestClient::post(format!("http://example.com/basket/items/{uuid}/decrement"))
            .send(&make_service(baskets))
            .await;

        let body: ActionResponse<DecrementResponse> = res.take_json().await?;
        let data = body.data.ok_or("missing data")?;

        assert_eq!(data.action, DecrementAction::Updated);
        assert_eq!(data.item.map(|item| item.quantity), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn test_last_unit_removes_item() -> TestResult {
        let uuid = BasketItemUuid::new();

        let mut baskets = MockBasketsService::new();

        baskets
            .expect_decrement_basket_item()
            .once()
            .return_once(move |_, _| Ok(DecrementOutcome::Removed(uuid)));

        let mut res = TestClient::post(format!("http://example.com/basket/items/{uuid}/decrement"))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(
            body,
            serde_json::json!({
                "success": true,
                "data": { "action": "removed", "item": null },
                "message": "Item removed from basket",
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_item_returns_404() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_decrement_basket_item()
            .once()
            .return_once(|_, _| Err(BasketsServiceError::ItemNotFound));

        let res = TestClient::post(format!(
            "http://example.com/basket/items/{}/decrement",
            Uuid::now_v7()
        ))
        .send(&make_service(baskets))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
