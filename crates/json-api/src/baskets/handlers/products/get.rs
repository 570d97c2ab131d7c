//! Product In Basket Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    baskets::{errors::into_failure, models::ProductInBasketResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Product In Basket Handler
///
/// Whether the product is in the basket, and how many units.
#[endpoint(
    tags("baskets"),
    summary = "Product In Basket",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<ProductInBasketResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    match state
        .app
        .baskets
        .is_product_in_basket(user, product.into_inner().into())
        .await
    {
        Ok(found) => Ok(Json(ActionResponse::ok(found.into()))),
        Err(error) => Ok(into_failure(error, "check basket", res)),
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use platter_app::domain::{
        baskets::{MockBasketsService, data::ProductInBasket, records::BasketItemUuid},
        products::records::ProductUuid,
    };

    use crate::test_helpers::baskets_service;

    use super::*;

    fn make_service(baskets: MockBasketsService) -> Service {
        baskets_service(baskets, Router::with_path("basket/products/{product}").get(handler))
    }

    #[tokio::test]
    async fn test_reports_quantity_in_basket() -> TestResult {
        let product = ProductUuid::new();
        let item = BasketItemUuid::new();

        let mut baskets = MockBasketsService::new();

        baskets
            .expect_is_product_in_basket()
            .once()
            .withf(move |_, p| *p == product)
            .return_once(move |_, _| {
                Ok(ProductInBasket {
                    in_basket: true,
                    quantity: 2,
                    item_uuid: Some(item),
                })
            });

        let mut res = TestClient::get(format!("http://example.com/basket/products/{product}"))
            .send(&make_service(baskets))
            .await;

        let body: ActionResponse<ProductInBasketResponse> = res.take_json().await?;
        let data = body.data.ok_or("missing data")?;

        assert!(data.in_basket);
        assert_eq!(data.quantity, 2);
        assert_eq!(data.item_uuid, Some(item.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_absent_product_is_zero() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_is_product_in_basket()
            .once()
            .return_once(|_, _| Ok(ProductInBasket::default()));

        let mut res = TestClient::get(format!(
            "http://example.com/basket/products/{}",
            Uuid::now_v7()
        ))
        .send(&make_service(baskets))
        .await;

        let body: ActionResponse<ProductInBasketResponse> = res.take_json().await?;
        let data = body.data.ok_or("missing data")?;

        assert!(!data.in_basket);
        assert_eq!(data.quantity, 0);

        Ok(())
    }
}
