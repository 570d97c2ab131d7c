//! Restaurant Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use platter_app::domain::restaurants::data::RestaurantFilter;

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, handlers::RestaurantResponse},
    state::State,
};

/// Restaurant Index Handler
///
/// Returns restaurants matching the filters, featured first and then by name.
#[endpoint(
    tags("restaurants"),
    summary = "List Restaurants",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    city: QueryParam<String, false>,
    active: QueryParam<bool, false>,
    featured: QueryParam<bool, false>,
    open: QueryParam<bool, false>,
    search: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<RestaurantResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = RestaurantFilter {
        city: city.into_inner().filter(|city| !city.trim().is_empty()),
        is_active: active.into_inner(),
        is_featured: featured.into_inner(),
        is_open: open.into_inner(),
        search: search.into_inner().filter(|search| !search.trim().is_empty()),
    };

    let restaurants = state
        .app
        .restaurants
        .list_restaurants(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use platter_app::domain::restaurants::{MockRestaurantsService, records::RestaurantUuid};

    use crate::{restaurants::handlers::make_restaurant, test_helpers::restaurants_service};

    use super::*;

    fn make_service(restaurants: MockRestaurantsService) -> Service {
        restaurants_service(restaurants, Router::with_path("restaurants").get(handler))
    }

    #[tokio::test]
    async fn test_lists_restaurants() -> TestResult {
        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_list_restaurants()
            .once()
            .withf(|filter| *filter == RestaurantFilter::default())
            .return_once(|_| {
                Ok(vec![
                    make_restaurant(RestaurantUuid::new(), "Bao House"),
                    make_restaurant(RestaurantUuid::new(), "Curry Corner"),
                ])
            });

        let mut res = TestClient::get("http://example.com/restaurants")
            .send(&make_service(restaurants))
            .await;

        let body: Vec<RestaurantResponse> = res.take_json().await?;
        let names: Vec<_> = body.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Bao House", "Curry Corner"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_query_becomes_filter() -> TestResult {
        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_list_restaurants()
            .once()
            .withf(|filter| {
                filter.city.as_deref() == Some("Leeds")
                    && filter.is_open == Some(true)
                    && filter.is_featured.is_none()
                    && filter.search.is_none()
            })
            .return_once(|_| Ok(Vec::new()));

        let res = TestClient::get("http://example.com/restaurants?city=Leeds&open=true&search=%20")
            .send(&make_service(restaurants))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
