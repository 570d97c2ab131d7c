//! Review Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::reviews::data::ReviewFilter;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, models::ReviewResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewsResponse {
    pub reviews: Vec<ReviewResponse>,
}

/// Review Index Handler
///
/// Returns reviews matching the filters, newest first.
#[endpoint(
    tags("reviews"),
    summary = "List Reviews",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: QueryParam<Uuid, false>,
    user: QueryParam<Uuid, false>,
    min_rating: QueryParam<u8, false>,
    max_rating: QueryParam<u8, false>,
    depot: &mut Depot,
) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ReviewFilter {
        product_uuid: product.into_inner().map(Into::into),
        user_uuid: user.into_inner().map(Into::into),
        min_rating: min_rating.into_inner(),
        max_rating: max_rating.into_inner(),
    };

    let reviews = state
        .app
        .reviews
        .list_reviews(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}
