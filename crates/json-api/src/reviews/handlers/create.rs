//! Create Review Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::{
    reviews::{data::NewReview, records::ReviewUuid},
    users::records::UserUuid,
};

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, models::ReviewResponse},
    state::State,
};

/// Create Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    pub product_uuid: Uuid,

    /// Stars, 1 to 5
    pub rating: u8,

    pub comment: Option<String>,
}

impl CreateReviewRequest {
    fn into_new_review(self, user: UserUuid) -> NewReview {
        NewReview {
            uuid: ReviewUuid::new(),
            user_uuid: user,
            product_uuid: self.product_uuid.into(),
            rating: self.rating,
            comment: self.comment,
        }
    }
}

/// Create Review Handler
///
/// Reviews the product as the signed-in user.
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::CONFLICT, description = "Product already reviewed"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let review = state
        .app
        .reviews
        .create_review(json.into_inner().into_new_review(user))
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/reviews/{}", review.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(review.into()))
}
