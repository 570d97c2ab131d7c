//! Add Favorite Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    favorites::{errors::into_status_error, models::FavoriteResponse},
    state::State,
};

/// Add Favorite Handler
#[endpoint(
    tags("favorites"),
    summary = "Add Favorite",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Favorite added"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Already a favorite"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<FavoriteResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let product = product.into_inner();

    let favorite = state
        .app
        .favorites
        .add_favorite(user, product.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/favorites/{product}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(favorite.into()))
}
