//! Update Basket Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    baskets::{errors::into_failure, models::BasketItemResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Update Basket Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateBasketItemRequest {
    /// New absolute quantity
    pub quantity: i64,
}

/// Update Basket Item Handler
///
/// Sets an item's quantity. Zero is rejected; use the delete endpoint.
#[endpoint(
    tags("baskets"),
    summary = "Update Basket Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Basket item not found"),
        (status_code = StatusCode::CONFLICT, description = "Not enough stock"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    json: JsonBody<UpdateBasketItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<BasketItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let quantity = json.into_inner().quantity;

    match state
        .app
        .baskets
        .update_basket_item_quantity(user, item.into_inner().into(), quantity)
        .await
    {
        Ok(item) => Ok(Json(ActionResponse::ok(item.into()))),
        Err(error) => Ok(into_failure(error, "update basket item", res)),
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use platter::quantity::QuantityError;
    use platter_app::domain::baskets::{
        BasketsServiceError, MockBasketsService, records::BasketItemUuid,
    };

    use crate::{
        baskets::handlers::make_item,
        test_helpers::{TEST_USER_UUID, baskets_service},
    };

    use super::*;

    fn make_service(baskets: MockBasketsService) -> Service {
        baskets_service(baskets, Router::with_path("basket/items/{item}").put(handler))
    }

    #[tokio::test]
    async fn test_sets_quantity() -> TestResult {
        let uuid = BasketItemUuid::new();
        let item = make_item(uuid, 500, 4)?;

        let mut baskets = MockBasketsService::new();

        baskets
            .expect_update_basket_item_quantity()
            .once()
            .withf(move |user, i, quantity| *user == TEST_USER_UUID && *i == uuid && *quantity == 4)
            .return_once(move |_, _, _| Ok(item));

        let mut res = TestClient::put(format!("http://example.com/basket/items/{uuid}"))
            .json(&json!({ "quantity": 4 }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ActionResponse<BasketItemResponse> = res.take_json().await?;

        assert_eq!(body.data.map(|data| data.quantity), Some(4));

        Ok(())
    }

    #[tokio::test]
    async fn test_zero_quantity_returns_422() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_update_basket_item_quantity()
            .once()
            .return_once(|_, _, _| Err(QuantityError::NotPositive.into()));

        let mut res = TestClient::put(format!("http://example.com/basket/items/{}", Uuid::now_v7()))
            .json(&json!({ "quantity": 0 }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        let body: ActionResponse<BasketItemResponse> = res.take_json().await?;

        assert_eq!(body.error.as_deref(), Some("Quantity must be greater than 0"));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_item_returns_404() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_update_basket_item_quantity()
            .once()
            .return_once(|_, _, _| Err(BasketsServiceError::ItemNotFound));

        let res = TestClient::put(format!("http://example.com/basket/items/{}", Uuid::now_v7()))
            .json(&json!({ "quantity": 2 }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_uuid_returns_400() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets.expect_update_basket_item_quantity().never();

        let res = TestClient::put("http://example.com/basket/items/123")
            .json(&json!({ "quantity": 2 }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
