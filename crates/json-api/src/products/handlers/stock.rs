//! Update Product Stock Handler

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
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Update Stock Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStockRequest {
    /// Units in stock
    pub stock: u32,
}

/// Update Product Stock Handler
///
/// Basket items above the new stock level stay as they are until the basket
/// is synced.
#[endpoint(
    tags("products"),
    summary = "Update Product Stock",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateStockRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .update_product_stock(product.into_inner().into(), json.into_inner().stock)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
