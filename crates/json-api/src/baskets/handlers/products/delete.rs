//! Remove Product From Basket Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    baskets::{errors::into_failure, models::RemovedResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Remove Product From Basket Handler
#[endpoint(
    tags("baskets"),
    summary = "Remove Product From Basket",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Basket or item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<RemovedResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let product = product.into_inner();

    match state
        .app
        .baskets
        .remove_product_from_basket(user, product.into())
        .await
    {
        Ok(()) => Ok(Json(
            ActionResponse::ok(RemovedResponse { uuid: product })
                .with_message("Item removed from basket"),
        )),
        Err(error) => Ok(into_failure(error, "remove product from basket", res)),
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use platter_app::domain::{
        baskets::{BasketsServiceError, MockBasketsService},
        products::records::ProductUuid,
    };

    use crate::test_helpers::baskets_service;

    use super::*;

    fn make_service(baskets: MockBasketsService) -> Service {
        baskets_service(
            baskets,
            Router::with_path("basket/products/{product}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_removes_product() -> TestResult {
        let product = ProductUuid::new();

        let mut baskets = MockBasketsService::new();

        baskets
            .expect_remove_product_from_basket()
            .once()
            .withf(move |_, p| *p == product)
            .return_once(|_, _| Ok(()));

        let res = TestClient::delete(format!("http://example.com/basket/products/{product}"))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_basket_returns_404() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_remove_product_from_basket()
            .once()
            .return_once(|_, _| Err(BasketsServiceError::BasketNotFound));

        let mut res = TestClient::delete(format!(
            "http://example.com/basket/products/{}",
            Uuid::now_v7()
        ))
        .send(&make_service(baskets))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ActionResponse<RemovedResponse> = res.take_json().await?;

        assert_eq!(body.error.as_deref(), Some("Basket not found"));

        Ok(())
    }
}
