//! Update Review Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::reviews::data::ReviewUpdate;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, models::ReviewResponse},
    state::State,
};

/// Update Review Request
///
/// Omitted fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateReviewRequest {
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

impl From<UpdateReviewRequest> for ReviewUpdate {
    fn from(request: UpdateReviewRequest) -> Self {
        ReviewUpdate {
            rating: request.rating,
            comment: request.comment,
        }
    }
}

/// Update Review Handler
///
/// Only the author can edit a review; anyone else gets a 404.
#[endpoint(
    tags("reviews"),
    summary = "Update Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Review updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Review not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    review: PathParam<Uuid>,
    json: JsonBody<UpdateReviewRequest>,
    depot: &mut Depot,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let review = state
        .app
        .reviews
        .update_review(user, review.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(review.into()))
}
