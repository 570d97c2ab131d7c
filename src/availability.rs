//! Stock & availability checks.
//!
//! Every quantity-increasing basket mutation runs [`check_availability`]
//! against a fresh product snapshot before writing.

use thiserror::Error;

use crate::quantity::Quantity;

/// Catalog state the basket rules depend on.
pub trait Stocked {
    /// Whether the product can currently be ordered.
    fn is_active(&self) -> bool;

    /// Units currently in stock.
    fn stock(&self) -> u32;
}

/// Outcome of an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// The requested quantity can be held.
    Ok,

    /// The product does not exist.
    NotFound,

    /// The product has been disabled.
    Inactive,

    /// Fewer units are in stock than requested.
    InsufficientStock {
        /// Units currently in stock.
        available: u32,
    },
}

/// Availability failures, for callers that prefer `?`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityError {
    /// The product does not exist.
    #[error("Product not found")]
    NotFound,

    /// The product has been disabled.
    #[error("Product is not available")]
    Inactive,

    /// Fewer units are in stock than requested.
    #[error("Only {available} items available in stock")]
    InsufficientStock {
        /// Units currently in stock.
        available: u32,
    },
}

impl Availability {
    /// Convert into a `Result`, keeping the failure reason.
    ///
    /// # Errors
    ///
    /// Returns the matching [`AvailabilityError`] for every outcome other than [`Availability::Ok`].
    pub fn into_result(self) -> Result<(), AvailabilityError> {
        match self {
            Self::Ok => Ok(()),
            Self::NotFound => Err(AvailabilityError::NotFound),
            Self::Inactive => Err(AvailabilityError::Inactive),
            Self::InsufficientStock { available } => {
                Err(AvailabilityError::InsufficientStock { available })
            }
        }
    }
}

/// Check whether `requested` units of `product` may be held in a basket.
///
/// Checks run in order: existence, active flag, stock.
pub fn check_availability<P: Stocked + ?Sized>(
    product: Option<&P>,
    requested: Quantity,
) -> Availability {
    let Some(product) = product else {
        return Availability::NotFound;
    };

    if !product.is_active() {
        return Availability::Inactive;
    }

    check_stock(product, requested)
}

/// Stock-only check, for lines whose product is already known to be orderable.
pub fn check_stock<P: Stocked + ?Sized>(product: &P, requested: Quantity) -> Availability {
    let available = product.stock();

    if available < requested.get() {
        Availability::InsufficientStock { available }
    } else {
        Availability::Ok
    }
}

/// Check that `delta` more units fit on a line already holding `held`.
///
/// Returns the new line quantity. A sum past the storable range can never be
/// in stock, so it fails the same way as any other shortfall.
///
/// # Errors
///
/// Returns [`AvailabilityError::InsufficientStock`] when the total exceeds the stock.
pub fn check_addition<P: Stocked + ?Sized>(
    product: &P,
    held: Quantity,
    delta: Quantity,
) -> Result<Quantity, AvailabilityError> {
    let total = held
        .checked_add(delta)
        .ok_or(AvailabilityError::InsufficientStock {
            available: product.stock(),
        })?;

    check_stock(product, total).into_result()?;

    Ok(total)
}
