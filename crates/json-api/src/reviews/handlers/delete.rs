//! Delete Review Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, reviews::errors::into_status_error, state::State};

/// Delete Review Handler
///
/// Only the author can delete a review; anyone else gets a 404.
#[endpoint(
    tags("reviews"),
    summary = "Delete Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Review deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Review not found"),
    ),
)]
pub(crate) async fn handler(
    review: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    state
        .app
        .reviews
        .delete_review(user, review.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
