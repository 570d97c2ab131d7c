//! Favorite response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::favorites::{data::FavoriteToggle, records::FavoriteRecord};

use crate::products::models::ProductResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FavoriteResponse {
    pub uuid: Uuid,
    pub product: ProductResponse,

    /// When the product was favorited
    pub created_at: String,
}

impl From<FavoriteRecord> for FavoriteResponse {
    fn from(favorite: FavoriteRecord) -> Self {
        Self {
            uuid: favorite.uuid.into(),
            product: favorite.product.into(),
            created_at: favorite.created_at.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ToggleAction {
    Added,
    Removed,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ToggleFavoriteResponse {
    pub action: ToggleAction,

    /// Present when the product was added
    pub favorite: Option<FavoriteResponse>,
}

impl From<FavoriteToggle> for ToggleFavoriteResponse {
    fn from(toggle: FavoriteToggle) -> Self {
        match toggle {
            FavoriteToggle::Added(favorite) => Self {
                action: ToggleAction::Added,
                favorite: Some(favorite.into()),
            },
            FavoriteToggle::Removed => Self {
                action: ToggleAction::Removed,
                favorite: None,
            },
        }
    }
}
