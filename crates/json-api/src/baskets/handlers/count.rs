//! Basket Count Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    baskets::{errors::into_failure, models::CountResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Basket Count Handler
///
/// Distinct items and total units. Zero when the user has no basket yet.
#[endpoint(
    tags("baskets"),
    summary = "Basket Count",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<CountResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    match state.app.baskets.get_basket_items_count(user).await {
        Ok(count) => Ok(Json(ActionResponse::ok(count.into()))),
        Err(error) => Ok(into_failure(error, "get basket count", res)),
    }
}
