//! Favorites service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FavoritesServiceError {
    #[error("Product already in favorites")]
    AlreadyFavorite,

    #[error("Favorite not found")]
    NotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for FavoritesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyFavorite,
            Some(ErrorKind::ForeignKeyViolation) => Self::ProductNotFound,
            Some(_) | None => Self::Sql(error),
        }
    }
}
