//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        baskets::{BasketsService, PgBasketsService},
        categories::{CategoriesService, PgCategoriesService},
        favorites::{FavoritesService, PgFavoritesService},
        products::{PgProductsService, ProductsService},
        restaurants::{PgRestaurantsService, RestaurantsService},
        reviews::{PgReviewsService, ReviewsService},
        users::{PgUsersService, UsersService},
    },
    health::{HealthService, PgHealthService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub baskets: Arc<dyn BasketsService>,
    pub products: Arc<dyn ProductsService>,
    pub restaurants: Arc<dyn RestaurantsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub favorites: Arc<dyn FavoritesService>,
    pub users: Arc<dyn UsersService>,
    pub auth: Arc<dyn AuthService>,
    pub health: Arc<dyn HealthService>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            baskets: Arc::new(PgBasketsService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            restaurants: Arc::new(PgRestaurantsService::new(db.clone())),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            reviews: Arc::new(PgReviewsService::new(db.clone())),
            favorites: Arc::new(PgFavoritesService::new(db.clone())),
            users: Arc::new(PgUsersService::new(db.clone())),
            health: Arc::new(PgHealthService::new(db)),
            auth: Arc::new(PgAuthService::new(pool)),
        })
    }
}
