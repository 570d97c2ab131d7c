//! Errors

use salvo::http::StatusError;
use tracing::error;

use platter_app::domain::reviews::ReviewsServiceError;

pub(crate) fn into_status_error(error: ReviewsServiceError) -> StatusError {
    match error {
        ReviewsServiceError::AlreadyReviewed => StatusError::conflict().brief(error.to_string()),
        ReviewsServiceError::InvalidRating => StatusError::bad_request().brief(error.to_string()),
        ReviewsServiceError::NotFound | ReviewsServiceError::ProductNotFound => {
            StatusError::not_found().brief(error.to_string())
        }
        ReviewsServiceError::Sql(source) => {
            error!("review storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
