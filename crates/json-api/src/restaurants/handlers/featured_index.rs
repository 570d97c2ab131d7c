//! Featured Restaurants Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use platter_app::domain::restaurants::DEFAULT_FEATURED_LIMIT;

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, handlers::RestaurantResponse},
    state::State,
};

/// Featured Restaurants Handler
///
/// Active featured restaurants, newest first.
#[endpoint(
    tags("restaurants"),
    summary = "Featured Restaurants",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<RestaurantResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurants = state
        .app
        .restaurants
        .featured_restaurants(limit.into_inner().unwrap_or(DEFAULT_FEATURED_LIMIT))
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}
