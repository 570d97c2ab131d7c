//! Review Data

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{
    products::records::ProductUuid, reviews::records::ReviewUuid, users::records::UserUuid,
};

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// Whether `rating` is a whole number of stars within range.
#[must_use]
pub const fn is_valid_rating(rating: u8) -> bool {
    rating >= MIN_RATING && rating <= MAX_RATING
}

/// New Review Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub uuid: ReviewUuid,
    pub user_uuid: UserUuid,
    pub product_uuid: ProductUuid,
    pub rating: u8,
    pub comment: Option<String>,
}

/// Review Update Data
///
/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewUpdate {
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

/// Review listing filter. Unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub product_uuid: Option<ProductUuid>,
    pub user_uuid: Option<UserUuid>,
    pub min_rating: Option<u8>,
    pub max_rating: Option<u8>,
}

/// Reviews carrying a given star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingCount {
    pub rating: u8,
    pub count: u64,
}

/// Aggregate view of a product's reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStats {
    pub total_reviews: u64,
    /// Mean rating rounded to 2 places, zero without reviews.
    pub average_rating: Decimal,
    /// One entry per star, from 5 down to 1.
    pub distribution: Vec<RatingCount>,
}

impl ReviewStats {
    /// Build the stats from per-rating counts. Ratings outside `1..=5` are ignored.
    #[must_use]
    pub fn from_counts(counts: &[RatingCount]) -> Self {
        let distribution: Vec<RatingCount> = (MIN_RATING..=MAX_RATING)
            .rev()
            .map(|rating| RatingCount {
                rating,
                count: counts
                    .iter()
                    .filter(|entry| entry.rating == rating)
                    .map(|entry| entry.count)
                    .sum(),
            })
            .collect();

        let total_reviews: u64 = distribution.iter().map(|entry| entry.count).sum();

        let stars: Decimal = distribution
            .iter()
            .map(|entry| Decimal::from(entry.rating) * Decimal::from(entry.count))
            .sum();

        let average_rating = if total_reviews == 0 {
            Decimal::ZERO
        } else {
            (stars / Decimal::from(total_reviews))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        };

        Self {
            total_reviews,
            average_rating,
            distribution,
        }
    }
}
