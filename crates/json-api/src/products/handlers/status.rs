//! Toggle Product Status Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Toggle Product Status Handler
///
/// Flips whether the product can be ordered.
#[endpoint(
    tags("products"),
    summary = "Toggle Product Status",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .toggle_product_status(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use platter_app::domain::products::{MockProductsService, records::ProductUuid};

    use crate::{products::handlers::make_product, test_helpers::products_service};

    use super::*;

    #[tokio::test]
    async fn test_returns_toggled_product() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_toggle_product_status()
            .once()
            .withf(move |p| *p == uuid)
            .return_once(move |_| {
                let mut product = make_product(uuid);
                product.is_active = false;
                Ok(product)
            });

        let service = products_service(
            products,
            Router::with_path("products/{product}/status").post(handler),
        );

        let mut res = TestClient::post(format!("http://example.com/products/{uuid}/status"))
            .send(&service)
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert!(!body.is_active);

        Ok(())
    }
}
