//! Product Review Stats Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, models::ReviewStatsResponse},
    state::State,
};

/// Product Review Stats Handler
///
/// Review count, average rating and per-star distribution.
#[endpoint(
    tags("reviews"),
    summary = "Product Review Stats",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ReviewStatsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stats = state
        .app
        .reviews
        .product_review_stats(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(stats.into()))
}
