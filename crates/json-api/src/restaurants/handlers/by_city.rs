//! Restaurants By City Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, handlers::RestaurantResponse},
    state::State,
};

/// Restaurants By City Handler
///
/// Active restaurants whose city contains the path segment, ignoring case.
#[endpoint(
    tags("restaurants"),
    summary = "Restaurants By City",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    city: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<RestaurantResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurants = state
        .app
        .restaurants
        .restaurants_by_city(&city.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}
