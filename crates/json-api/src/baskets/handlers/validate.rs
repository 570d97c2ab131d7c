//! Validate Basket Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    baskets::{errors::into_failure, models::ValidationResponse},
    extensions::*,
    responses::ActionResponse,
    state::State,
};

/// Validate Basket Handler
///
/// Lists items that could not be checked out as they stand. Nothing is
/// changed; see the sync endpoint for repairs.
#[endpoint(
    tags("baskets"),
    summary = "Validate Basket",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Validation result"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Basket is empty"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse<ValidationResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let issues = match state.app.baskets.validate_basket(user).await {
        Ok(issues) => issues,
        Err(error) => return Ok(into_failure(error, "validate basket", res)),
    };

    if issues.is_empty() {
        return Ok(Json(
            ActionResponse::ok(ValidationResponse::from(issues)).with_message("Basket is valid"),
        ));
    }

    Ok(Json(ActionResponse {
        success: false,
        data: Some(issues.into()),
        message: None,
        error: Some("Basket validation failed".to_string()),
    }))
}
