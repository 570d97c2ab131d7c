//! Sync Basket Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    baskets::{errors::into_failure, models::SyncResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Sync Basket Handler
///
/// Removes items whose product is disabled or sold out and lowers
/// quantities to the units in stock.
#[endpoint(
    tags("baskets"),
    summary = "Sync Basket",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(name = "baskets.sync", skip(depot, res), fields(user_uuid = tracing::field::Empty))]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<SyncResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    match state.app.baskets.sync_basket(user).await {
        Ok(report) => Ok(Json(
            ActionResponse::ok(SyncResponse::from(report))
                .with_message("Basket synced successfully"),
        )),
        Err(error) => Ok(into_failure(error, "sync basket", res)),
    }
}
