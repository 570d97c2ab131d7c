//! Product Records

use jiff::Timestamp;
use platter::availability::Stocked;
use rust_decimal::Decimal;

use crate::{
    domain::{categories::records::CategoryUuid, restaurants::records::RestaurantUuid},
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub restaurant_uuid: Option<RestaurantUuid>,
    pub category_uuid: Option<CategoryUuid>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    /// Percentage off, `0..=100`.
    pub discount: Option<Decimal>,
    pub stock: u32,
    pub is_active: bool,
    pub is_featured: bool,
    /// Average review rating, 0 when unreviewed.
    pub rating: Decimal,
    pub reviews_count: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Stocked for ProductRecord {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn stock(&self) -> u32 {
        self.stock
    }
}
