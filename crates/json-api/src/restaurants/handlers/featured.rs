//! Toggle Restaurant Featured Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, handlers::RestaurantResponse},
    state::State,
};

/// Toggle Restaurant Featured Handler
///
/// Flips whether the restaurant is promoted.
#[endpoint(
    tags("restaurants"),
    summary = "Toggle Restaurant Featured",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    restaurant: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RestaurantResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurant = state
        .app
        .restaurants
        .toggle_restaurant_featured(restaurant.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurant.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use platter_app::domain::restaurants::{MockRestaurantsService, records::RestaurantUuid};

    use crate::{restaurants::handlers::make_restaurant, test_helpers::restaurants_service};

    use super::*;

    #[tokio::test]
    async fn test_returns_toggled_restaurant() -> TestResult {
        let uuid = RestaurantUuid::new();

        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_toggle_restaurant_featured()
            .once()
            .withf(move |r| *r == uuid)
            .return_once(move |_| {
                let mut restaurant = make_restaurant(uuid, "Star Grill");
                restaurant.is_featured = true;
                Ok(restaurant)
            });

        let service = restaurants_service(
            restaurants,
            Router::with_path("restaurants/{restaurant}/featured").post(handler),
        );

        let mut res = TestClient::post(format!("http://example.com/restaurants/{uuid}/featured"))
            .send(&service)
            .await;

        let body: RestaurantResponse = res.take_json().await?;

        assert!(body.is_featured);

        Ok(())
    }
}
