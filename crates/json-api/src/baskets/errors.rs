//! Errors

use salvo::{http::StatusCode, prelude::*};
use tracing::error;

use platter_app::domain::baskets::BasketsServiceError;

use crate::responses::ActionResponse;

/// Render a basket failure as an envelope, setting the matching status.
///
/// `action` completes "Failed to ..." and is the only text a caller sees for
/// storage failures.
pub(crate) fn into_failure<T>(
    error: BasketsServiceError,
    action: &str,
    res: &mut Response,
) -> Json<ActionResponse<T>> {
    let (status, message) = match error {
        BasketsServiceError::BasketNotFound
        | BasketsServiceError::ItemNotFound
        | BasketsServiceError::ProductNotFound => (StatusCode::NOT_FOUND, error.to_string()),
        BasketsServiceError::ProductInactive
        | BasketsServiceError::InsufficientStock { .. }
        | BasketsServiceError::Conflict => (StatusCode::CONFLICT, error.to_string()),
        BasketsServiceError::InvalidQuantity(_) | BasketsServiceError::EmptyBasket => {
            (StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        BasketsServiceError::InvalidData => {
            error!("failed to {action}: invalid basket data");

            (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to {action}"))
        }
        BasketsServiceError::Sql(source) => {
            error!("failed to {action}: {source}");

            (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to {action}"))
        }
    };

    res.status_code(status);

    Json(ActionResponse::failure(message))
}
