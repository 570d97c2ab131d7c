//! Review request and response models.

use platter::pricing::Amount;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::reviews::{
    data::{RatingCount, ReviewStats},
    records::ReviewRecord,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    pub uuid: Uuid,
    pub user_uuid: Uuid,

    /// Author's display name
    pub user_name: String,

    pub product_uuid: Uuid,
    pub product_name: String,

    /// Stars, 1 to 5
    pub rating: u8,

    pub comment: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ReviewRecord> for ReviewResponse {
    fn from(review: ReviewRecord) -> Self {
        Self {
            uuid: review.uuid.into(),
            user_uuid: review.user_uuid.into(),
            user_name: review.user_name,
            product_uuid: review.product_uuid.into(),
            product_name: review.product_name,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at.to_string(),
            updated_at: review.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RatingCountResponse {
    pub rating: u8,
    pub count: u64,
}

impl From<RatingCount> for RatingCountResponse {
    fn from(entry: RatingCount) -> Self {
        Self {
            rating: entry.rating,
            count: entry.count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewStatsResponse {
    pub total_reviews: u64,

    /// Mean rating, two decimal places
    pub average_rating: String,

    /// Counts per star, from 5 down to 1
    pub distribution: Vec<RatingCountResponse>,
}

impl From<ReviewStats> for ReviewStatsResponse {
    fn from(stats: ReviewStats) -> Self {
        Self {
            total_reviews: stats.total_reviews,
            average_rating: Amount::round(stats.average_rating).to_string(),
            distribution: stats.distribution.into_iter().map(Into::into).collect(),
        }
    }
}
