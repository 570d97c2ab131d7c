//! Remove Basket Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    baskets::{errors::into_failure, models::RemovedResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Remove Basket Item Handler
#[endpoint(
    tags("baskets"),
    summary = "Remove Basket Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Basket item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "baskets.items.remove",
    skip(item, depot, res),
    fields(user_uuid = tracing::field::Empty, item_uuid = tracing::field::Empty)
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<RemovedResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let item = item.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("item_uuid", tracing::field::display(item));

    match state.app.baskets.remove_from_basket(user, item.into()).await {
        Ok(()) => Ok(Json(
            ActionResponse::ok(RemovedResponse { uuid: item })
                .with_message("Item removed from basket"),
        )),
        Err(error) => Ok(into_failure(error, "remove from basket", res)),
    }
}
