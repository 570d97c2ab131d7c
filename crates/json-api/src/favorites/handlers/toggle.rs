//! Toggle Favorite Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    favorites::{errors::into_status_error, models::ToggleFavoriteResponse},
    state::State,
};

/// Toggle Favorite Handler
///
/// Adds the product when it is not a favorite, removes it otherwise.
#[endpoint(
    tags("favorites"),
    summary = "Toggle Favorite",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ToggleFavoriteResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let toggle = state
        .app
        .favorites
        .toggle_favorite(user, product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(toggle.into()))
}
