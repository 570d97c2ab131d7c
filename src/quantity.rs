//! Quantities

use std::{fmt, num::NonZeroU32};

use thiserror::Error;

/// Errors raised when a requested quantity cannot be represented.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    /// Zero or negative quantities are never stored.
    #[error("Quantity must be greater than 0")]
    NotPositive,

    /// The quantity would not fit the storage column.
    #[error("quantity {0} is too large")]
    TooLarge(i64),
}

/// A basket line quantity. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

/// Result of taking one unit away from a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decrement {
    /// The line still holds at least one unit.
    Updated(Quantity),

    /// The line dropped to zero and must be deleted.
    Removed,
}

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Largest quantity storable in a signed 32-bit column.
    pub const MAX: u32 = i32::MAX.unsigned_abs();

    /// Create a quantity from a raw request value.
    ///
    /// # Errors
    ///
    /// - [`QuantityError::NotPositive`] when `value <= 0`.
    /// - [`QuantityError::TooLarge`] when `value` exceeds [`Quantity::MAX`].
    pub fn try_new(value: i64) -> Result<Self, QuantityError> {
        if value <= 0 {
            return Err(QuantityError::NotPositive);
        }

        u32::try_from(value)
            .ok()
            .filter(|value| *value <= Self::MAX)
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(QuantityError::TooLarge(value))
    }

    /// Raw value.
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Add `delta` units, or `None` when the sum would exceed [`Quantity::MAX`].
    #[must_use]
    pub fn checked_add(self, delta: Self) -> Option<Self> {
        self.get()
            .checked_add(delta.get())
            .filter(|sum| *sum <= Self::MAX)
            .and_then(NonZeroU32::new)
            .map(Self)
    }

    /// One more unit, or `None` at [`Quantity::MAX`].
    #[must_use]
    pub fn checked_increment(self) -> Option<Self> {
        self.checked_add(Self::ONE)
    }

    /// One unit fewer, collapsing to [`Decrement::Removed`] at zero.
    pub fn decrement(self) -> Decrement {
        NonZeroU32::new(self.get() - 1).map_or(Decrement::Removed, |value| {
            Decrement::Updated(Self(value))
        })
    }
}

impl TryFrom<i32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(i64::from(value))
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(i64::from(value))
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.get()
    }
}

impl From<Quantity> for i32 {
    fn from(value: Quantity) -> Self {
        // Bounded by `Quantity::MAX` on construction.
        i32::try_from(value.get()).unwrap_or(i32::MAX)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn zero_and_negative_are_rejected() {
        assert_eq!(Quantity::try_new(0), Err(QuantityError::NotPositive));
        assert_eq!(Quantity::try_new(-3), Err(QuantityError::NotPositive));
    }

    #[test]
    fn values_beyond_column_range_are_rejected() {
        let too_large = i64::from(i32::MAX) + 1;

        assert_eq!(
            Quantity::try_new(too_large),
            Err(QuantityError::TooLarge(too_large))
        );
    }

    #[test]
    fn add_is_a_delta() -> TestResult {
        let quantity = Quantity::try_new(2)?.checked_add(Quantity::try_new(3)?);

        assert_eq!(quantity.map(Quantity::get), Some(5));

        Ok(())
    }

    #[test]
    fn add_past_column_range_is_refused() -> TestResult {
        let max = Quantity::try_new(i64::from(Quantity::MAX))?;
        let near_max = Quantity::try_new(i64::from(Quantity::MAX) - 1)?;

        assert_eq!(max.checked_increment(), None);
        assert_eq!(near_max.checked_add(Quantity::try_new(2)?), None);
        assert_eq!(near_max.checked_increment(), Some(max));

        Ok(())
    }

    #[test]
    fn decrementing_one_removes_the_line() {
        assert_eq!(Quantity::ONE.decrement(), Decrement::Removed);
    }

    #[test]
    fn decrementing_more_than_one_updates() -> TestResult {
        let quantity = Quantity::try_new(4)?;

        assert_eq!(quantity.decrement(), Decrement::Updated(Quantity::try_new(3)?));

        Ok(())
    }

    #[test]
    fn converts_to_storage_integer() -> TestResult {
        let quantity = Quantity::try_new(7)?;

        assert_eq!(i32::from(quantity), 7);
        assert_eq!(Quantity::try_from(7_i32)?, quantity);

        Ok(())
    }
}
