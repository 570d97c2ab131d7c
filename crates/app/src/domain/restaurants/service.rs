//! Restaurants service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::restaurants::{
        data::{NewRestaurant, RestaurantFilter},
        errors::RestaurantsServiceError,
        records::{RestaurantRecord, RestaurantUuid},
        repository::PgRestaurantsRepository,
    },
};

/// Featured restaurants returned when the caller names no limit.
pub const DEFAULT_FEATURED_LIMIT: u32 = 10;

#[derive(Debug, Clone)]
pub struct PgRestaurantsService {
    db: Db,
    repository: PgRestaurantsRepository,
}

impl PgRestaurantsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRestaurantsRepository::new(),
        }
    }
}

#[async_trait]
impl RestaurantsService for PgRestaurantsService {
    async fn create_restaurant(
        &self,
        restaurant: NewRestaurant,
    ) -> Result<RestaurantRecord, RestaurantsServiceError> {
        if restaurant.name.trim().is_empty() || restaurant.slug.trim().is_empty() {
            return Err(RestaurantsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .repository
            .create_restaurant(&mut tx, &restaurant)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_restaurant(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let restaurant = self.repository.get_restaurant(&mut tx, restaurant).await?;

        tx.commit().await?;

        Ok(restaurant)
    }

    async fn get_restaurant_by_slug(
        &self,
        slug: &str,
    ) -> Result<RestaurantRecord, RestaurantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let restaurant = self.repository.get_restaurant_by_slug(&mut tx, slug).await?;

        tx.commit().await?;

        Ok(restaurant)
    }

    async fn list_restaurants(
        &self,
        filter: RestaurantFilter,
    ) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let restaurants = self.repository.list_restaurants(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(restaurants)
    }

    async fn featured_restaurants(
        &self,
        limit: u32,
    ) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let restaurants = self
            .repository
            .list_featured_restaurants(&mut tx, limit)
            .await?;

        tx.commit().await?;

        Ok(restaurants)
    }

    async fn restaurants_by_city(
        &self,
        city: &str,
    ) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError> {
        let filter = RestaurantFilter {
            city: Some(city.to_string()),
            is_active: Some(true),
            ..RestaurantFilter::default()
        };

        self.list_restaurants(filter).await
    }

    async fn toggle_restaurant_status(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .toggle_restaurant_status(&mut tx, restaurant)
            .await?;

        tx.commit().await?;

        info!(restaurant_uuid = %restaurant, is_active = updated.is_active, "toggled restaurant status");

        Ok(updated)
    }

    async fn toggle_restaurant_open(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .toggle_restaurant_open(&mut tx, restaurant)
            .await?;

        tx.commit().await?;

        info!(restaurant_uuid = %restaurant, is_open = updated.is_open, "toggled restaurant open");

        Ok(updated)
    }

    async fn toggle_restaurant_featured(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .toggle_restaurant_featured(&mut tx, restaurant)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_restaurant(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<(), RestaurantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let count = self.repository.count_products(&mut tx, restaurant).await?;

        if count > 0 {
            return Err(RestaurantsServiceError::HasProducts { count });
        }

        let rows_affected = self
            .repository
            .delete_restaurant(&mut tx, restaurant)
            .await?;

        if rows_affected == 0 {
            return Err(RestaurantsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(restaurant_uuid = %restaurant, "deleted restaurant");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait RestaurantsService: Send + Sync {
    /// Creates a new restaurant.
    async fn create_restaurant(
        &self,
        restaurant: NewRestaurant,
    ) -> Result<RestaurantRecord, RestaurantsServiceError>;

    /// Retrieve a single restaurant.
    async fn get_restaurant(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError>;

    /// Retrieve a single restaurant by its slug.
    async fn get_restaurant_by_slug(
        &self,
        slug: &str,
    ) -> Result<RestaurantRecord, RestaurantsServiceError>;

    /// Retrieves restaurants matching the filter, featured first and then by name.
    async fn list_restaurants(
        &self,
        filter: RestaurantFilter,
    ) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError>;

    /// Active featured restaurants, newest first.
    async fn featured_restaurants(
        &self,
        limit: u32,
    ) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError>;

    /// Active restaurants whose city contains `city`, ignoring case.
    async fn restaurants_by_city(
        &self,
        city: &str,
    ) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError>;

    /// Flips the active flag.
    async fn toggle_restaurant_status(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError>;

    /// Flips whether the restaurant is accepting orders.
    async fn toggle_restaurant_open(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError>;

    /// Flips the featured flag.
    async fn toggle_restaurant_featured(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError>;

    /// Deletes a restaurant no product references.
    async fn delete_restaurant(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<(), RestaurantsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::products::{ProductsService, data::NewProduct, records::ProductUuid},
        test::{
            TestContext,
            helpers::{create_restaurant, create_restaurant_in, price},
        },
    };

    use super::*;

    #[tokio::test]
    async fn created_restaurant_is_active_and_retrievable() -> TestResult {
        let ctx = TestContext::new().await;

        let created = create_restaurant(&ctx, "Noodle Bar").await?;
        let fetched = ctx.restaurants.get_restaurant(created.uuid).await?;

        assert_eq!(fetched.name, "Noodle Bar");
        assert_eq!(fetched.slug, "noodle-bar");
        assert!(fetched.is_active);
        assert!(fetched.is_open);
        assert!(!fetched.is_featured);
        assert!(fetched.description.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn restaurant_is_found_by_slug() -> TestResult {
        let ctx = TestContext::new().await;

        let created = create_restaurant(&ctx, "Taco Shack").await?;
        let fetched = ctx.restaurants.get_restaurant_by_slug("taco-shack").await?;

        assert_eq!(fetched.uuid, created.uuid);

        let missing = ctx.restaurants.get_restaurant_by_slug("nowhere").await;

        assert!(
            matches!(missing, Err(RestaurantsServiceError::NotFound)),
            "expected NotFound, got {missing:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_slug_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        create_restaurant(&ctx, "Dumpling House").await?;

        let result = create_restaurant(&ctx, "Dumpling House").await;

        assert!(
            matches!(result, Err(RestaurantsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_puts_featured_first_then_orders_by_name() -> TestResult {
        let ctx = TestContext::new().await;

        create_restaurant(&ctx, "Zest").await?;
        create_restaurant(&ctx, "Anchor").await?;
        let mango = create_restaurant(&ctx, "Mango Tree").await?;

        ctx.restaurants.toggle_restaurant_featured(mango.uuid).await?;

        let names: Vec<String> = ctx
            .restaurants
            .list_restaurants(RestaurantFilter::default())
            .await?
            .into_iter()
            .map(|restaurant| restaurant.name)
            .collect();

        assert_eq!(names, vec!["Mango Tree", "Anchor", "Zest"]);

        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_open_flag_and_search() -> TestResult {
        let ctx = TestContext::new().await;

        let closed = create_restaurant(&ctx, "Pho Corner").await?;
        create_restaurant(&ctx, "Pizza 100%").await?;
        create_restaurant(&ctx, "Pasta Place").await?;

        ctx.restaurants.toggle_restaurant_open(closed.uuid).await?;

        let closed_only = ctx
            .restaurants
            .list_restaurants(RestaurantFilter {
                is_open: Some(false),
                ..RestaurantFilter::default()
            })
            .await?;

        assert_eq!(closed_only.len(), 1);
        assert_eq!(closed_only[0].uuid, closed.uuid);

        let literal_percent = ctx
            .restaurants
            .list_restaurants(RestaurantFilter {
                search: Some("100%".to_string()),
                ..RestaurantFilter::default()
            })
            .await?;

        assert_eq!(literal_percent.len(), 1);
        assert_eq!(literal_percent[0].name, "Pizza 100%");

        Ok(())
    }

    #[tokio::test]
    async fn by_city_ignores_case_and_skips_inactive() -> TestResult {
        let ctx = TestContext::new().await;

        let open = create_restaurant_in(&ctx, "Harbour Fish", "Bristol").await?;
        let retired = create_restaurant_in(&ctx, "Old Mill", "bristol").await?;
        create_restaurant_in(&ctx, "Canal Cafe", "Leeds").await?;

        ctx.restaurants.toggle_restaurant_status(retired.uuid).await?;

        let found = ctx.restaurants.restaurants_by_city("BRIST").await?;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].uuid, open.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn featured_list_is_limited_and_excludes_inactive() -> TestResult {
        let ctx = TestContext::new().await;

        for name in ["One", "Two", "Three"] {
            let restaurant = create_restaurant(&ctx, name).await?;
            ctx.restaurants
                .toggle_restaurant_featured(restaurant.uuid)
                .await?;
        }

        let hidden = create_restaurant(&ctx, "Hidden").await?;
        ctx.restaurants.toggle_restaurant_featured(hidden.uuid).await?;
        ctx.restaurants.toggle_restaurant_status(hidden.uuid).await?;

        let all = ctx
            .restaurants
            .featured_restaurants(DEFAULT_FEATURED_LIMIT)
            .await?;

        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|restaurant| restaurant.name != "Hidden"));

        let limited = ctx.restaurants.featured_restaurants(2).await?;

        assert_eq!(limited.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn toggles_flip_their_flag() -> TestResult {
        let ctx = TestContext::new().await;
        let restaurant = create_restaurant(&ctx, "Flip Grill").await?;

        let closed = ctx.restaurants.toggle_restaurant_open(restaurant.uuid).await?;
        assert!(!closed.is_open);
        assert!(closed.is_active);

        let reopened = ctx.restaurants.toggle_restaurant_open(restaurant.uuid).await?;
        assert!(reopened.is_open);

        let inactive = ctx
            .restaurants
            .toggle_restaurant_status(restaurant.uuid)
            .await?;
        assert!(!inactive.is_active);

        let missing = ctx
            .restaurants
            .toggle_restaurant_open(RestaurantUuid::new())
            .await;

        assert!(
            matches!(missing, Err(RestaurantsServiceError::NotFound)),
            "expected NotFound, got {missing:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn restaurant_with_products_is_not_deleted() -> TestResult {
        let ctx = TestContext::new().await;
        let restaurant = create_restaurant(&ctx, "Busy Kitchen").await?;

        let mut product = NewProduct::new(ProductUuid::new(), "Bao", price("4.00")?);
        product.restaurant_uuid = Some(restaurant.uuid);
        ctx.products.create_product(product).await?;

        let result = ctx.restaurants.delete_restaurant(restaurant.uuid).await;

        assert!(
            matches!(result, Err(RestaurantsServiceError::HasProducts { count: 1 })),
            "expected HasProducts, got {result:?}"
        );

        assert!(ctx.restaurants.get_restaurant(restaurant.uuid).await.is_ok());

        Ok(())
    }

    #[tokio::test]
    async fn empty_restaurant_is_deleted() -> TestResult {
        let ctx = TestContext::new().await;
        let restaurant = create_restaurant(&ctx, "Pop Up").await?;

        ctx.restaurants.delete_restaurant(restaurant.uuid).await?;

        let again = ctx.restaurants.delete_restaurant(restaurant.uuid).await;

        assert!(
            matches!(again, Err(RestaurantsServiceError::NotFound)),
            "expected NotFound, got {again:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_restaurant_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.restaurants.get_restaurant(RestaurantUuid::new()).await;

        assert!(
            matches!(result, Err(RestaurantsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx
            .restaurants
            .create_restaurant(NewRestaurant {
                uuid: RestaurantUuid::new(),
                name: String::new(),
                slug: "blank".to_string(),
                description: None,
                city: "London".to_string(),
            })
            .await;

        assert!(
            matches!(result, Err(RestaurantsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }
}
