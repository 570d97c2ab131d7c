//! Favorite Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::favorites::data::FavoriteFilter;

use crate::{
    extensions::*,
    favorites::{errors::into_status_error, models::FavoriteResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FavoritesResponse {
    pub favorites: Vec<FavoriteResponse>,
}

/// Favorite Index Handler
///
/// The signed-in user's favorites, newest first.
#[endpoint(
    tags("favorites"),
    summary = "List Favorites",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    category: QueryParam<Uuid, false>,
    restaurant: QueryParam<Uuid, false>,
    depot: &mut Depot,
) -> Result<Json<FavoritesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let filter = FavoriteFilter {
        category_uuid: category.into_inner().map(Into::into),
        restaurant_uuid: restaurant.into_inner().map(Into::into),
    };

    let favorites = state
        .app
        .favorites
        .list_favorites(user, filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(FavoritesResponse {
        favorites: favorites.into_iter().map(Into::into).collect(),
    }))
}
