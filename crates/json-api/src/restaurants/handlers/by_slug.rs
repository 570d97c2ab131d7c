//! Restaurant By Slug Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, handlers::RestaurantResponse},
    state::State,
};

/// Restaurant By Slug Handler
#[endpoint(
    tags("restaurants"),
    summary = "Get Restaurant By Slug",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<RestaurantResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurant = state
        .app
        .restaurants
        .get_restaurant_by_slug(&slug.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurant.into()))
}
