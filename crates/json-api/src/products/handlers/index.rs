//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::products::data::ProductFilter;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductResponse, parse_optional_decimal},
    },
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns products matching the filters, newest first.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    restaurant: QueryParam<Uuid, false>,
    category: QueryParam<Uuid, false>,
    active: QueryParam<bool, false>,
    featured: QueryParam<bool, false>,
    search: QueryParam<String, false>,
    min_price: QueryParam<String, false>,
    max_price: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ProductFilter {
        restaurant_uuid: restaurant.into_inner().map(Into::into),
        category_uuid: category.into_inner().map(Into::into),
        is_active: active.into_inner(),
        is_featured: featured.into_inner(),
        search: search.into_inner().filter(|search| !search.trim().is_empty()),
        min_price: parse_optional_decimal("min_price", min_price.into_inner().as_deref())?,
        max_price: parse_optional_decimal("max_price", max_price.into_inner().as_deref())?,
    };

    let products = state
        .app
        .products
        .list_products(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
