//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::categories::{
        data::{CategoryPosition, CategoryUpdate, NewCategory},
        errors::CategoriesServiceError,
        records::{CategoryRecord, CategoryUuid},
        repository::PgCategoriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        if category.name.trim().is_empty() {
            return Err(CategoriesServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_category(&mut tx, &category).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let category = self.repository.get_category(&mut tx, category).await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        if update.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(CategoriesServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_category(&mut tx, category, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let count = self.repository.count_products(&mut tx, category).await?;

        if count > 0 {
            return Err(CategoriesServiceError::HasProducts { count });
        }

        let rows_affected = self.repository.delete_category(&mut tx, category).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        info!(category_uuid = %category, "deleted category");

        Ok(())
    }

    async fn reorder_categories(
        &self,
        positions: Vec<CategoryPosition>,
    ) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        for position in &positions {
            let rows_affected = self
                .repository
                .set_sort_order(&mut tx, position.uuid, position.sort_order)
                .await?;

            if rows_affected == 0 {
                return Err(CategoriesServiceError::NotFound);
            }
        }

        tx.commit().await?;

        info!(categories = positions.len(), "reordered categories");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Creates a new category.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Retrieves all categories in display order.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Applies a partial update to a category.
    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Deletes a category no product references.
    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError>;

    /// Moves every listed category to its new position, all or nothing.
    async fn reorder_categories(
        &self,
        positions: Vec<CategoryPosition>,
    ) -> Result<(), CategoriesServiceError>;
}
