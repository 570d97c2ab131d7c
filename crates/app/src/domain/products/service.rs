//! Products service.

use async_trait::async_trait;
use mockall::automock;
use platter::quantity::Quantity;
use tracing::info;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductFilter, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

fn ensure_stock_in_range(stock: u32) -> Result<(), ProductsServiceError> {
    if stock > Quantity::MAX {
        return Err(ProductsServiceError::InvalidData);
    }

    Ok(())
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        if product.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        ensure_stock_in_range(product.stock)?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        if update.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        if let Some(stock) = update.stock {
            ensure_stock_in_range(stock)?;
        }

        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn toggle_product_status(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .toggle_product_status(&mut tx, product)
            .await?;

        tx.commit().await?;

        info!(product_uuid = %product, is_active = updated.is_active, "toggled product status");

        Ok(updated)
    }

    async fn toggle_product_featured(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .toggle_product_featured(&mut tx, product)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn update_product_stock(
        &self,
        product: ProductUuid,
        stock: u32,
    ) -> Result<ProductRecord, ProductsServiceError> {
        ensure_stock_in_range(stock)?;

        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_product_stock(&mut tx, product, stock)
            .await?;

        tx.commit().await?;

        info!(product_uuid = %product, stock, "updated product stock");

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let count = self.repository.count_basket_items(&mut tx, product).await?;

        if count > 0 {
            return Err(ProductsServiceError::InBaskets { count });
        }

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves products matching the filter, newest first.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Applies a partial update to a product.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Flips the active flag.
    async fn toggle_product_status(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Flips the featured flag.
    async fn toggle_product_featured(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Sets the units in stock.
    async fn update_product_stock(
        &self,
        product: ProductUuid,
        stock: u32,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product that no basket references.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
