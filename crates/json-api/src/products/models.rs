//! Product request and response models.

use std::str::FromStr;

use platter::pricing::Amount;
use rust_decimal::Decimal;
use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::products::records::ProductRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub uuid: Uuid,
    pub restaurant_uuid: Option<Uuid>,
    pub category_uuid: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,

    /// Unit price, two decimal places
    pub price: String,

    /// Percentage off
    pub discount: Option<String>,

    pub stock: u32,
    pub is_active: bool,
    pub is_featured: bool,

    /// Average review rating, two decimal places
    pub rating: String,

    pub reviews_count: u32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            uuid: product.uuid.into(),
            restaurant_uuid: product.restaurant_uuid.map(Into::into),
            category_uuid: product.category_uuid.map(Into::into),
            name: product.name,
            description: product.description,
            price: Amount::round(product.price).to_string(),
            discount: product.discount.map(|percent| percent.normalize().to_string()),
            stock: product.stock,
            is_active: product.is_active,
            is_featured: product.is_featured,
            rating: Amount::round(product.rating).to_string(),
            reviews_count: product.reviews_count,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Parse a decimal sent as a string, rejecting it with a 400.
pub(crate) fn parse_decimal(field: &str, value: &str) -> Result<Decimal, StatusError> {
    Decimal::from_str(value.trim())
        .map_err(|_invalid| StatusError::bad_request().brief(format!("Invalid {field}")))
}

pub(crate) fn parse_optional_decimal(
    field: &str,
    value: Option<&str>,
) -> Result<Option<Decimal>, StatusError> {
    value.map(|value| parse_decimal(field, value)).transpose()
}
