//! Errors

use salvo::http::StatusError;
use tracing::error;

use platter_app::domain::restaurants::RestaurantsServiceError;

pub(crate) fn into_status_error(error: RestaurantsServiceError) -> StatusError {
    match error {
        RestaurantsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Restaurant already exists")
        }
        RestaurantsServiceError::NotFound => {
            StatusError::not_found().brief("Restaurant not found")
        }
        RestaurantsServiceError::MissingRequiredData | RestaurantsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid restaurant payload")
        }
        RestaurantsServiceError::HasProducts { .. } => {
            StatusError::conflict().brief(error.to_string())
        }
        RestaurantsServiceError::Sql(source) => {
            error!("restaurant storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn restaurants_with_products_conflict() {
        let error = into_status_error(RestaurantsServiceError::HasProducts { count: 3 });

        assert_eq!(error.code, StatusCode::CONFLICT);
        assert_eq!(
            error.brief,
            "Cannot delete restaurant with 3 products. Please reassign or delete products first."
        );
    }
}
