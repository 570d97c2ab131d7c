//! Add To Basket Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
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

/// Add To Basket Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToBasketRequest {
    pub product_uuid: Uuid,

    /// Units to add. Defaults to one.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

const fn default_quantity() -> i64 {
    1
}

/// Add To Basket Handler
///
/// Adds units of a product, merging into the existing item for that product.
#[endpoint(
    tags("baskets"),
    summary = "Add To Basket",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Product unavailable or out of stock"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "baskets.items.add",
    skip(json, depot, res),
    fields(
        user_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    )
)]
pub(crate) async fn handler(
    json: JsonBody<AddToBasketRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<BasketItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("product_uuid", tracing::field::display(request.product_uuid));
    span.record("quantity", request.quantity);

    match state
        .app
        .baskets
        .add_to_basket(user, request.product_uuid.into(), request.quantity)
        .await
    {
        Ok(item) => Ok(Json(ActionResponse::ok(item.into()))),
        Err(error) => Ok(into_failure(error, "add to basket", res)),
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use platter::quantity::QuantityError;
    use platter_app::domain::{
        baskets::{BasketsServiceError, MockBasketsService, records::BasketItemUuid},
        products::records::ProductUuid,
    };

    use crate::{
        baskets::handlers::make_item,
        test_helpers::{TEST_USER_UUID, baskets_service},
    };

    use super::*;

    fn make_service(baskets: MockBasketsService) -> Service {
        baskets_service(baskets, Router::with_path("basket/items").post(handler))
    }

    #[tokio::test]
    async fn test_quantity_defaults_to_one() -> TestResult {
        let product = ProductUuid::new();
        let item = make_item(BasketItemUuid::new(), 899, 1)?;

        let mut baskets = MockBasketsService::new();

        baskets
            .expect_add_to_basket()
            .once()
            .withf(move |user, p, quantity| {
                *user == TEST_USER_UUID && *p == product && *quantity == 1
            })
            .return_once(move |_, _, _| Ok(item));

        let mut res = TestClient::post("http://example.com/basket/items")
            .json(&json!({ "product_uuid": product }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ActionResponse<BasketItemResponse> = res.take_json().await?;
        let data = body.data.ok_or("missing data")?;

        assert_eq!(data.quantity, 1);
        assert_eq!(data.line_total, "8.99");

        Ok(())
    }

    #[tokio::test]
    async fn test_insufficient_stock_returns_409_with_message() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_add_to_basket()
            .once()
            .withf(|_, _, quantity| *quantity == 5)
            .return_once(|_, _, _| Err(BasketsServiceError::InsufficientStock { available: 2 }));

        let mut res = TestClient::post("http://example.com/basket/items")
            .json(&json!({ "product_uuid": Uuid::now_v7(), "quantity": 5 }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        let body: ActionResponse<BasketItemResponse> = res.take_json().await?;

        assert_eq!(body.error.as_deref(), Some("Only 2 items available in stock"));

        Ok(())
    }

    #[tokio::test]
    async fn test_inactive_product_returns_409() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_add_to_basket()
            .once()
            .return_once(|_, _, _| Err(BasketsServiceError::ProductInactive));

        let mut res = TestClient::post("http://example.com/basket/items")
            .json(&json!({ "product_uuid": Uuid::now_v7() }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        let body: ActionResponse<BasketItemResponse> = res.take_json().await?;

        assert_eq!(body.error.as_deref(), Some("Product is not available"));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_positive_quantity_returns_422() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_add_to_basket()
            .once()
            .withf(|_, _, quantity| *quantity == 0)
            .return_once(|_, _, _| Err(QuantityError::NotPositive.into()));

        let res = TestClient::post("http://example.com/basket/items")
            .json(&json!({ "product_uuid": Uuid::now_v7(), "quantity": 0 }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_product_uuid_returns_400() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets.expect_add_to_basket().never();

        let res = TestClient::post("http://example.com/basket/items")
            .json(&json!({ "quantity": 2 }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
