//! Restaurant Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Restaurant UUID
pub type RestaurantUuid = TypedUuid<RestaurantRecord>;

/// Restaurant Record
#[derive(Debug, Clone)]
pub struct RestaurantRecord {
    pub uuid: RestaurantUuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub city: String,
    pub is_active: bool,
    /// Currently accepting orders.
    pub is_open: bool,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
