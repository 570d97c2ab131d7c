//! Toggle Restaurant Open Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, handlers::RestaurantResponse},
    state::State,
};

/// Toggle Restaurant Open Handler
///
/// Flips whether the restaurant is accepting orders.
#[endpoint(
    tags("restaurants"),
    summary = "Toggle Restaurant Open",
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
        .toggle_restaurant_open(restaurant.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurant.into()))
}
