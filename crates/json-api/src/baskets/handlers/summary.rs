//! Basket Summary Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    baskets::{errors::into_failure, models::SummaryResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Basket Summary Handler
///
/// Zero totals when the user has no basket yet.
#[endpoint(
    tags("baskets"),
    summary = "Basket Summary",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<SummaryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    match state.app.baskets.get_basket_summary(user).await {
        Ok(summary) => Ok(Json(ActionResponse::ok(summary.into()))),
        Err(error) => Ok(into_failure(error, "calculate basket summary", res)),
    }
}
