//! Update Product Handler

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

use platter_app::domain::products::data::ProductUpdate;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductResponse, parse_optional_decimal},
    },
    state::State,
};

/// Update Product Request
///
/// Omitted fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateProductRequest {
    pub restaurant_uuid: Option<Uuid>,
    pub category_uuid: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub discount: Option<String>,
    pub stock: Option<u32>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

impl UpdateProductRequest {
    fn into_update(self) -> Result<ProductUpdate, StatusError> {
        Ok(ProductUpdate {
            restaurant_uuid: self.restaurant_uuid.map(Into::into),
            category_uuid: self.category_uuid.map(Into::into),
            price: parse_optional_decimal("price", self.price.as_deref())?,
            discount: parse_optional_decimal("discount", self.discount.as_deref())?,
            name: self.name,
            description: self.description,
            stock: self.stock,
            is_active: self.is_active,
            is_featured: self.is_featured,
        })
    }
}

/// Update Product Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner();
    let update = json.into_inner().into_update()?;

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    let product = state
        .app
        .products
        .update_product(product.into(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
