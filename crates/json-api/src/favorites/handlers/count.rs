//! Favorite Count Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, favorites::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FavoriteCountResponse {
    pub count: u64,
}

/// Favorite Count Handler
#[endpoint(
    tags("favorites"),
    summary = "Count Favorites",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<FavoriteCountResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let count = state
        .app
        .favorites
        .count_favorites(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(FavoriteCountResponse { count }))
}
