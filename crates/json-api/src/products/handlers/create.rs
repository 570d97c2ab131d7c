//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::products::{data::NewProduct, records::ProductUuid};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductResponse, parse_decimal, parse_optional_decimal},
    },
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub restaurant_uuid: Option<Uuid>,
    pub category_uuid: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,

    /// Unit price as a decimal string, e.g. `"12.50"`
    pub price: String,

    /// Percentage off as a decimal string, `0` to `100`
    pub discount: Option<String>,

    #[serde(default)]
    pub stock: u32,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub is_featured: bool,
}

const fn default_true() -> bool {
    true
}

impl CreateProductRequest {
    fn into_new_product(self) -> Result<NewProduct, StatusError> {
        Ok(NewProduct {
            uuid: ProductUuid::new(),
            restaurant_uuid: self.restaurant_uuid.map(Into::into),
            category_uuid: self.category_uuid.map(Into::into),
            price: parse_decimal("price", &self.price)?,
            discount: parse_optional_decimal("discount", self.discount.as_deref())?,
            name: self.name,
            description: self.description,
            stock: self.stock,
            is_active: self.is_active,
            is_featured: self.is_featured,
        })
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = json.into_inner().into_new_product()?;

    let product = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use platter_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{products::handlers::make_product, test_helpers::products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|new| {
                new.name == "Pad Thai"
                    && new.price == Decimal::new(1150, 2)
                    && new.stock == 8
                    && new.is_active
                    && !new.is_featured
            })
            .return_once(|new| Ok(make_product(new.uuid)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Pad Thai", "price": "11.50", "stock": 8 }))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/products/{}", body.uuid).as_str()));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_price_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Pad Thai", "price": "cheap" }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_restaurant_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "name": "Pad Thai",
                "price": "11.50",
                "restaurant_uuid": Uuid::now_v7()
            }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
