//! Errors

use salvo::http::StatusError;
use tracing::error;

use platter_app::domain::favorites::FavoritesServiceError;

pub(crate) fn into_status_error(error: FavoritesServiceError) -> StatusError {
    match error {
        FavoritesServiceError::AlreadyFavorite => StatusError::conflict().brief(error.to_string()),
        FavoritesServiceError::NotFound | FavoritesServiceError::ProductNotFound => {
            StatusError::not_found().brief(error.to_string())
        }
        FavoritesServiceError::Sql(source) => {
            error!("favorite storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn duplicate_favorite_conflicts() {
        let error = into_status_error(FavoritesServiceError::AlreadyFavorite);

        assert_eq!(error.code, StatusCode::CONFLICT);
        assert_eq!(error.brief, "Product already in favorites");
    }

    #[test]
    fn missing_favorite_is_not_found() {
        let error = into_status_error(FavoritesServiceError::NotFound);

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert_eq!(error.brief, "Favorite not found");
    }
}
