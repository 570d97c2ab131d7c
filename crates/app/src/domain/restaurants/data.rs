//! Restaurant Data

use crate::domain::restaurants::records::RestaurantUuid;

/// New Restaurant Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub uuid: RestaurantUuid,
    pub name: String,
    /// Unique, URL-safe identifier.
    pub slug: String,
    pub description: Option<String>,
    pub city: String,
}

/// Restaurant listing filter. Unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantFilter {
    /// Case-insensitive substring of the city.
    pub city: Option<String>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_open: Option<bool>,
    /// Case-insensitive substring of the name or description.
    pub search: Option<String>,
}
