//! Clear Favorites Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, favorites::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClearedResponse {
    /// How many favorites were removed
    pub cleared: u64,
}

/// Clear Favorites Handler
#[endpoint(
    tags("favorites"),
    summary = "Clear Favorites",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ClearedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let cleared = state
        .app
        .favorites
        .clear_favorites(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ClearedResponse { cleared }))
}
