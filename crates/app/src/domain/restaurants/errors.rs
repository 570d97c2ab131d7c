//! Restaurants service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestaurantsServiceError {
    #[error("restaurant already exists")]
    AlreadyExists,

    #[error("restaurant not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("Cannot delete restaurant with {count} products. Please reassign or delete products first.")]
    HasProducts { count: u64 },

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for RestaurantsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(_) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_products_message_includes_count() {
        assert_eq!(
            RestaurantsServiceError::HasProducts { count: 2 }.to_string(),
            "Cannot delete restaurant with 2 products. Please reassign or delete products first."
        );
    }
}
