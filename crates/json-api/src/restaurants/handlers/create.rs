//! Create Restaurant Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use platter_app::domain::restaurants::{data::NewRestaurant, records::RestaurantUuid};

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, handlers::RestaurantResponse},
    state::State,
};

/// Create Restaurant Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateRestaurantRequest {
    pub name: String,

    /// Unique, URL-safe identifier
    pub slug: String,

    pub description: Option<String>,
    pub city: String,
}

impl From<CreateRestaurantRequest> for NewRestaurant {
    fn from(request: CreateRestaurantRequest) -> Self {
        NewRestaurant {
            uuid: RestaurantUuid::new(),
            name: request.name,
            slug: request.slug,
            description: request.description,
            city: request.city,
        }
    }
}

/// Create Restaurant Handler
#[endpoint(
    tags("restaurants"),
    summary = "Create Restaurant",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Restaurant created"),
        (status_code = StatusCode::CONFLICT, description = "Restaurant already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRestaurantRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RestaurantResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurant = state
        .app
        .restaurants
        .create_restaurant(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/restaurants/{}", restaurant.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(restaurant.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use platter_app::domain::restaurants::{MockRestaurantsService, RestaurantsServiceError};

    use crate::{restaurants::handlers::make_restaurant, test_helpers::restaurants_service};

    use super::*;

    fn make_service(restaurants: MockRestaurantsService) -> Service {
        restaurants_service(restaurants, Router::with_path("restaurants").post(handler))
    }

    #[tokio::test]
    async fn test_create_restaurant_success() -> TestResult {
        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_create_restaurant()
            .once()
            .withf(|new| {
                new.name == "Bao House"
                    && new.slug == "bao-house"
                    && new.city == "Leeds"
                    && new.description.is_none()
            })
            .return_once(|new| Ok(make_restaurant(new.uuid, &new.name)));

        let res = TestClient::post("http://example.com/restaurants")
            .json(&json!({ "name": "Bao House", "slug": "bao-house", "city": "Leeds" }))
            .send(&make_service(restaurants))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_name_returns_400() -> TestResult {
        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_create_restaurant()
            .once()
            .return_once(|_| Err(RestaurantsServiceError::InvalidData));

        let res = TestClient::post("http://example.com/restaurants")
            .json(&json!({ "name": " ", "slug": "blank", "city": "Leeds" }))
            .send(&make_service(restaurants))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_taken_slug_returns_409() -> TestResult {
        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_create_restaurant()
            .once()
            .return_once(|_| Err(RestaurantsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/restaurants")
            .json(&json!({ "name": "Bao House", "slug": "bao-house", "city": "Leeds" }))
            .send(&make_service(restaurants))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
