//! Remove Favorite Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, favorites::errors::into_status_error, state::State};

/// Remove Favorite Handler
#[endpoint(
    tags("favorites"),
    summary = "Remove Favorite",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Favorite removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Favorite not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    state
        .app
        .favorites
        .remove_favorite(user, product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
