//! Toggle Restaurant Status Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, handlers::RestaurantResponse},
    state::State,
};

/// Toggle Restaurant Status Handler
///
/// Flips whether the restaurant is listed at all.
#[endpoint(
    tags("restaurants"),
    summary = "Toggle Restaurant Status",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    restaurant: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RestaurantResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurant = state
        .app
        .restaurants
        .toggle_restaurant_status(restaurant.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurant.into()))
}
