//! My Product Review Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, models::ReviewResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MyReviewResponse {
    /// Absent when the user has not reviewed the product
    pub review: Option<ReviewResponse>,
}

/// My Product Review Handler
///
/// The signed-in user's review of the product, if any.
#[endpoint(
    tags("reviews"),
    summary = "My Product Review",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MyReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let review = state
        .app
        .reviews
        .user_review_for_product(user, product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(MyReviewResponse {
        review: review.map(Into::into),
    }))
}
