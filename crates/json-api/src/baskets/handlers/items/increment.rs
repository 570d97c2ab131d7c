//! Increment Basket Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    baskets::{errors::into_failure, models::BasketItemResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Increment Basket Item Handler
#[endpoint(
    tags("baskets"),
    summary = "Increment Basket Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item incremented"),
        (status_code = StatusCode::NOT_FOUND, description = "Basket item not found"),
        (status_code = StatusCode::CONFLICT, description = "Not enough stock"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<BasketItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    match state
        .app
        .baskets
        .increment_basket_item(user, item.into_inner().into())
        .await
    {
        Ok(item) => Ok(Json(ActionResponse::ok(item.into()))),
        Err(error) => Ok(into_failure(error, "increment basket item", res)),
    }
}
