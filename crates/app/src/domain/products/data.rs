//! Products Data

use rust_decimal::Decimal;

use crate::domain::{
    categories::records::CategoryUuid, products::records::ProductUuid,
    restaurants::records::RestaurantUuid,
};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub restaurant_uuid: Option<RestaurantUuid>,
    pub category_uuid: Option<CategoryUuid>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub discount: Option<Decimal>,
    pub stock: u32,
    pub is_active: bool,
    pub is_featured: bool,
}

impl NewProduct {
    /// An active, unfeatured product with no stock and no discount.
    #[must_use]
    pub fn new(uuid: ProductUuid, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            uuid,
            restaurant_uuid: None,
            category_uuid: None,
            name: name.into(),
            description: None,
            price,
            discount: None,
            stock: 0,
            is_active: true,
            is_featured: false,
        }
    }
}

/// Product Update Data
///
/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub restaurant_uuid: Option<RestaurantUuid>,
    pub category_uuid: Option<CategoryUuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub stock: Option<u32>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

/// Product listing filter. Unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub restaurant_uuid: Option<RestaurantUuid>,
    pub category_uuid: Option<CategoryUuid>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    /// Case-insensitive substring of the name or description.
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}
