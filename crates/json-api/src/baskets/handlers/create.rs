//! Get Or Create Basket Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    baskets::{errors::into_failure, models::BasketResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Get Or Create Basket Handler
///
/// Returns the user's basket, creating an empty one on first use.
#[endpoint(
    tags("baskets"),
    summary = "Get Or Create Basket",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Basket"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<BasketResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    match state.app.baskets.get_or_create_basket(user).await {
        Ok(basket) => Ok(Json(ActionResponse::ok(basket.into()))),
        Err(error) => Ok(into_failure(error, "get basket", res)),
    }
}
