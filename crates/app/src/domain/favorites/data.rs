//! Favorite Data

use crate::domain::{
    categories::records::CategoryUuid, favorites::records::FavoriteRecord,
    restaurants::records::RestaurantUuid,
};

/// Favorites listing filter, matched against the favorited product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FavoriteFilter {
    pub category_uuid: Option<CategoryUuid>,
    pub restaurant_uuid: Option<RestaurantUuid>,
}

/// Result of toggling a product in or out of the favorites.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteToggle {
    Added(FavoriteRecord),
    Removed,
}
