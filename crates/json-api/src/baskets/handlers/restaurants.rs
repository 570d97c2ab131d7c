//! Basket By Restaurant Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    baskets::{errors::into_failure, models::RestaurantGroupResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Basket By Restaurant Handler
///
/// Groups basket items by restaurant, each group with its own totals.
#[endpoint(
    tags("baskets"),
    summary = "Basket Items By Restaurant",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<Vec<RestaurantGroupResponse>>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    match state.app.baskets.get_basket_items_by_restaurant(user).await {
        Ok(groups) => Ok(Json(ActionResponse::ok(
            groups.into_iter().map(Into::into).collect(),
        ))),
        Err(error) => Ok(into_failure(error, "group basket items", res)),
    }
}
