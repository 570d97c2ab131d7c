//! Favorite Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, favorites::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IsFavoriteResponse {
    pub is_favorite: bool,
}

/// Favorite Status Handler
///
/// Whether the product is one of the signed-in user's favorites.
#[endpoint(
    tags("favorites"),
    summary = "Check Favorite",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<IsFavoriteResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let is_favorite = state
        .app
        .favorites
        .is_favorite(user, product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(IsFavoriteResponse { is_favorite }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use platter_app::domain::{favorites::MockFavoritesService, products::records::ProductUuid};

    use crate::test_helpers::{TEST_USER_UUID, favorites_service};

    use super::*;

    #[tokio::test]
    async fn test_reports_favorite_status() -> TestResult {
        let product = ProductUuid::new();

        let mut favorites = MockFavoritesService::new();

        favorites
            .expect_is_favorite()
            .once()
            .withf(move |user, p| *user == TEST_USER_UUID && *p == product)
            .return_once(|_, _| Ok(true));

        let service =
            favorites_service(favorites, Router::with_path("favorites/{product}").get(handler));

        let mut res = TestClient::get(format!("http://example.com/favorites/{product}"))
            .send(&service)
            .await;

        let body: IsFavoriteResponse = res.take_json().await?;

        assert!(body.is_favorite);

        Ok(())
    }
}
