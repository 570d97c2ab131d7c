//! Errors

use salvo::http::StatusError;
use tracing::error;

use platter_app::domain::categories::CategoriesServiceError;

pub(crate) fn into_status_error(error: CategoriesServiceError) -> StatusError {
    match error {
        CategoriesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Category already exists")
        }
        CategoriesServiceError::NotFound => StatusError::not_found().brief("Category not found"),
        CategoriesServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Invalid category payload")
        }
        CategoriesServiceError::HasProducts { .. } => {
            StatusError::conflict().brief(error.to_string())
        }
        CategoriesServiceError::Sql(source) => {
            error!("category storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
