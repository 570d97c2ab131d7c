//! Delete Restaurant Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, restaurants::errors::into_status_error, state::State};

/// Delete Restaurant Handler
///
/// Restaurants that still have products cannot be deleted.
#[endpoint(
    tags("restaurants"),
    summary = "Delete Restaurant",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Restaurant deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Restaurant not found"),
        (status_code = StatusCode::CONFLICT, description = "Restaurant has products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    restaurant: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .restaurants
        .delete_restaurant(restaurant.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
