//! Favorites service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        favorites::{
            data::{FavoriteFilter, FavoriteToggle},
            errors::FavoritesServiceError,
            records::FavoriteRecord,
            repository::PgFavoritesRepository,
        },
        products::records::ProductUuid,
        users::records::UserUuid,
    },
    revalidation::{FAVORITE_VIEWS, TracingRevalidator, ViewRevalidator, revalidate_views},
};

#[derive(Clone)]
pub struct PgFavoritesService {
    db: Db,
    repository: PgFavoritesRepository,
    revalidator: Arc<dyn ViewRevalidator>,
}

impl PgFavoritesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self::with_revalidator(db, Arc::new(TracingRevalidator))
    }

    #[must_use]
    pub fn with_revalidator(db: Db, revalidator: Arc<dyn ViewRevalidator>) -> Self {
        Self {
            db,
            repository: PgFavoritesRepository::new(),
            revalidator,
        }
    }

    fn revalidate(&self) {
        revalidate_views(self.revalidator.as_ref(), FAVORITE_VIEWS);
    }
}

impl fmt::Debug for PgFavoritesService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgFavoritesService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl FavoritesService for PgFavoritesService {
    async fn add_favorite(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<FavoriteRecord, FavoritesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let favorite = self
            .repository
            .create_favorite(&mut tx, user, product)
            .await?;

        tx.commit().await?;

        self.revalidate();

        Ok(favorite)
    }

    async fn remove_favorite(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), FavoritesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .repository
            .delete_favorite(&mut tx, user, product)
            .await?;

        if rows_affected == 0 {
            return Err(FavoritesServiceError::NotFound);
        }

        tx.commit().await?;

        self.revalidate();

        Ok(())
    }

    async fn toggle_favorite(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<FavoriteToggle, FavoritesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let removed = self
            .repository
            .delete_favorite(&mut tx, user, product)
            .await?;

        let toggle = if removed > 0 {
            FavoriteToggle::Removed
        } else {
            FavoriteToggle::Added(
                self.repository
                    .create_favorite(&mut tx, user, product)
                    .await?,
            )
        };

        tx.commit().await?;

        info!(
            user_uuid = %user,
            product_uuid = %product,
            added = matches!(toggle, FavoriteToggle::Added(_)),
            "toggled favorite"
        );

        self.revalidate();

        Ok(toggle)
    }

    async fn list_favorites(
        &self,
        user: UserUuid,
        filter: FavoriteFilter,
    ) -> Result<Vec<FavoriteRecord>, FavoritesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let favorites = self
            .repository
            .list_favorites(&mut tx, user, filter)
            .await?;

        tx.commit().await?;

        Ok(favorites)
    }

    async fn is_favorite(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<bool, FavoritesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let favorite = self.repository.is_favorite(&mut tx, user, product).await?;

        tx.commit().await?;

        Ok(favorite)
    }

    async fn count_favorites(&self, user: UserUuid) -> Result<u64, FavoritesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let count = self.repository.count_favorites(&mut tx, user).await?;

        tx.commit().await?;

        Ok(count)
    }

    async fn clear_favorites(&self, user: UserUuid) -> Result<u64, FavoritesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cleared = self.repository.clear_favorites(&mut tx, user).await?;

        tx.commit().await?;

        info!(user_uuid = %user, cleared, "cleared favorites");

        self.revalidate();

        Ok(cleared)
    }
}

#[automock]
#[async_trait]
pub trait FavoritesService: Send + Sync {
    /// Marks a product as one of the user's favorites.
    async fn add_favorite(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<FavoriteRecord, FavoritesServiceError>;

    /// Removes a product from the user's favorites.
    async fn remove_favorite(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), FavoritesServiceError>;

    /// Removes the product if it is a favorite, adds it otherwise.
    async fn toggle_favorite(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<FavoriteToggle, FavoritesServiceError>;

    /// The user's favorites matching the filter, newest first.
    async fn list_favorites(
        &self,
        user: UserUuid,
        filter: FavoriteFilter,
    ) -> Result<Vec<FavoriteRecord>, FavoritesServiceError>;

    async fn is_favorite(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<bool, FavoritesServiceError>;

    async fn count_favorites(&self, user: UserUuid) -> Result<u64, FavoritesServiceError>;

    /// Removes every favorite, returning how many there were.
    async fn clear_favorites(&self, user: UserUuid) -> Result<u64, FavoritesServiceError>;
}
