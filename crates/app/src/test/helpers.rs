//! Test Helpers

use std::str::FromStr;

use rust_decimal::{Decimal, Error as DecimalError};

use crate::{
    domain::{
        categories::{
            CategoriesService, CategoriesServiceError, data::NewCategory,
            records::{CategoryRecord, CategoryUuid},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductRecord, ProductUuid},
        },
        restaurants::{
            RestaurantsService, RestaurantsServiceError,
            data::NewRestaurant,
            records::{RestaurantRecord, RestaurantUuid},
        },
        users::{
            UsersService, UsersServiceError,
            data::NewUser,
            records::{UserRecord, UserUuid},
        },
    },
    test::TestContext,
};

pub(crate) fn price(value: &str) -> Result<Decimal, DecimalError> {
    Decimal::from_str(value)
}

pub(crate) async fn create_user(
    ctx: &TestContext,
    name: &str,
    email: &str,
) -> Result<UserRecord, UsersServiceError> {
    ctx.users
        .create_user(NewUser {
            uuid: UserUuid::new(),
            name: name.to_string(),
            email: email.to_string(),
        })
        .await
}

pub(crate) async fn create_restaurant(
    ctx: &TestContext,
    name: &str,
) -> Result<RestaurantRecord, RestaurantsServiceError> {
    create_restaurant_in(ctx, name, "London").await
}

/// A restaurant whose slug is the lowercased, hyphenated name.
pub(crate) async fn create_restaurant_in(
    ctx: &TestContext,
    name: &str,
    city: &str,
) -> Result<RestaurantRecord, RestaurantsServiceError> {
    ctx.restaurants
        .create_restaurant(NewRestaurant {
            uuid: RestaurantUuid::new(),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: None,
            city: city.to_string(),
        })
        .await
}

pub(crate) async fn create_category(
    ctx: &TestContext,
    name: &str,
    sort_order: i32,
) -> Result<CategoryRecord, CategoriesServiceError> {
    ctx.categories
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: name.to_string(),
            sort_order,
        })
        .await
}

/// An active product with the given price and stock.
///
/// Panics on an unparsable price; callers pass literals.
pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    unit_price: &str,
    stock: u32,
) -> Result<ProductRecord, ProductsServiceError> {
    let mut product = NewProduct::new(
        ProductUuid::new(),
        name,
        price(unit_price).expect("test prices are valid decimals"),
    );

    product.stock = stock;

    ctx.products.create_product(product).await
}
