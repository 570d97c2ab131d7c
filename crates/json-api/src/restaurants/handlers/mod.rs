//! Restaurant Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::restaurants::records::RestaurantRecord;

pub(crate) mod by_city;
pub(crate) mod by_slug;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod featured;
pub(crate) mod featured_index;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod open;
pub(crate) mod status;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RestaurantResponse {
    pub uuid: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub city: String,
    pub is_active: bool,

    /// Accepting orders right now
    pub is_open: bool,

    pub is_featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<RestaurantRecord> for RestaurantResponse {
    fn from(restaurant: RestaurantRecord) -> Self {
        Self {
            uuid: restaurant.uuid.into(),
            name: restaurant.name,
            slug: restaurant.slug,
            description: restaurant.description,
            city: restaurant.city,
            is_active: restaurant.is_active,
            is_open: restaurant.is_open,
            is_featured: restaurant.is_featured,
            created_at: restaurant.created_at.to_string(),
            updated_at: restaurant.updated_at.to_string(),
        }
    }
}

#[cfg(test)]
pub(in crate::restaurants) fn make_restaurant(
    uuid: platter_app::domain::restaurants::records::RestaurantUuid,
    name: &str,
) -> RestaurantRecord {
    RestaurantRecord {
        uuid,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: None,
        city: "London".to_string(),
        is_active: true,
        is_open: true,
        is_featured: false,
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
    }
}
