//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use platter_app::{
    auth::MockAuthService,
    context::AppContext,
    health::MockHealthService,
    domain::{
        baskets::MockBasketsService,
        categories::MockCategoriesService,
        favorites::MockFavoritesService,
        products::MockProductsService,
        restaurants::MockRestaurantsService,
        reviews::MockReviewsService,
        users::{MockUsersService, records::UserUuid},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

/// Mocks for every service. Any call without an expectation fails the test.
pub(crate) struct Mocks {
    pub(crate) baskets: MockBasketsService,
    pub(crate) products: MockProductsService,
    pub(crate) restaurants: MockRestaurantsService,
    pub(crate) categories: MockCategoriesService,
    pub(crate) reviews: MockReviewsService,
    pub(crate) favorites: MockFavoritesService,
    pub(crate) health: MockHealthService,
    pub(crate) auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn new() -> Self {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        Self {
            baskets: MockBasketsService::new(),
            products: MockProductsService::new(),
            restaurants: MockRestaurantsService::new(),
            categories: MockCategoriesService::new(),
            reviews: MockReviewsService::new(),
            favorites: MockFavoritesService::new(),
            health: MockHealthService::new(),
            auth,
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            baskets: Arc::new(self.baskets),
            products: Arc::new(self.products),
            restaurants: Arc::new(self.restaurants),
            categories: Arc::new(self.categories),
            reviews: Arc::new(self.reviews),
            favorites: Arc::new(self.favorites),
            users: Arc::new(MockUsersService::new()),
            auth: Arc::new(self.auth),
            health: Arc::new(self.health),
        })
    }

    /// Serve `route` as the test user.
    pub(crate) fn into_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_user)
                .push(route),
        )
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Mocks { auth, ..Mocks::new() }.into_state()
}

pub(crate) fn baskets_service(baskets: MockBasketsService, route: Router) -> Service {
    Mocks {
        baskets,
        ..Mocks::new()
    }
    .into_service(route)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Mocks {
        products,
        ..Mocks::new()
    }
    .into_service(route)
}

pub(crate) fn restaurants_service(restaurants: MockRestaurantsService, route: Router) -> Service {
    Mocks {
        restaurants,
        ..Mocks::new()
    }
    .into_service(route)
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    Mocks {
        categories,
        ..Mocks::new()
    }
    .into_service(route)
}

pub(crate) fn reviews_service(reviews: MockReviewsService, route: Router) -> Service {
    Mocks {
        reviews,
        ..Mocks::new()
    }
    .into_service(route)
}

pub(crate) fn favorites_service(favorites: MockFavoritesService, route: Router) -> Service {
    Mocks {
        favorites,
        ..Mocks::new()
    }
    .into_service(route)
}
