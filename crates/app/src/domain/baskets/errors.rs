//! Baskets service errors.

use platter::{availability::AvailabilityError, quantity::QuantityError};
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BasketsServiceError {
    #[error("Basket not found")]
    BasketNotFound,

    #[error("Basket item not found")]
    ItemNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Product is not available")]
    ProductInactive,

    #[error("Only {available} items available in stock")]
    InsufficientStock { available: u32 },

    #[error(transparent)]
    InvalidQuantity(#[from] QuantityError),

    #[error("Basket is empty")]
    EmptyBasket,

    #[error("basket item already exists")]
    Conflict,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<AvailabilityError> for BasketsServiceError {
    fn from(error: AvailabilityError) -> Self {
        match error {
            AvailabilityError::NotFound => Self::ProductNotFound,
            AvailabilityError::Inactive => Self::ProductInactive,
            AvailabilityError::InsufficientStock { available } => {
                Self::InsufficientStock { available }
            }
        }
    }
}

impl From<Error> for BasketsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::ItemNotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::Conflict,
            Some(ErrorKind::ForeignKeyViolation) => Self::ProductNotFound,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            Some(_) | None => Self::Sql(error),
        }
    }
}
