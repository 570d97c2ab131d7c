//! Baskets service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use platter::{
    availability::{check_addition, check_availability, check_stock},
    inspection::{BasketIssue, inspect_line},
    pricing::{BasketSummary, summarise_by},
    quantity::{Decrement, Quantity},
    reconciliation::{Repair, SyncReport, plan_repair},
};
use sqlx::{Postgres, Transaction};
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        baskets::{
            data::{
                BasketCount, BasketView, DecrementOutcome, NewBasketItem, ProductInBasket,
                RestaurantGroup,
            },
            errors::BasketsServiceError,
            records::{BasketItemRecord, BasketItemUuid, BasketRecord, BasketUuid},
            repositories::{PgBasketItemsRepository, PgBasketsRepository},
        },
        products::{records::ProductUuid, repository::PgProductsRepository},
        users::records::UserUuid,
    },
    revalidation::{TracingRevalidator, ViewRevalidator, revalidate_basket_views},
};

#[derive(Clone)]
pub struct PgBasketsService {
    db: Db,
    baskets_repository: PgBasketsRepository,
    items_repository: PgBasketItemsRepository,
    products_repository: PgProductsRepository,
    revalidator: Arc<dyn ViewRevalidator>,
}

impl PgBasketsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self::with_revalidator(db, Arc::new(TracingRevalidator))
    }

    #[must_use]
    pub fn with_revalidator(db: Db, revalidator: Arc<dyn ViewRevalidator>) -> Self {
        Self {
            db,
            baskets_repository: PgBasketsRepository::new(),
            items_repository: PgBasketItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
            revalidator,
        }
    }

    /// The user's basket with its items, if one exists.
    async fn load_basket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<BasketRecord>, sqlx::Error> {
        let Some(mut basket) = self.baskets_repository.find_basket_by_user(tx, user).await? else {
            return Ok(None);
        };

        basket.items = self.items_repository.list_items(tx, basket.uuid).await?;

        Ok(Some(basket))
    }

    async fn find_or_create_basket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<BasketRecord, sqlx::Error> {
        match self.baskets_repository.find_basket_by_user(tx, user).await? {
            Some(basket) => Ok(basket),
            None => {
                self.baskets_repository
                    .create_basket(tx, BasketUuid::new(), user)
                    .await
            }
        }
    }

    async fn find_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<BasketItemRecord, BasketsServiceError> {
        self.items_repository
            .find_item_for_user(tx, user, item)
            .await?
            .ok_or(BasketsServiceError::ItemNotFound)
    }

    /// Write a single reconciliation repair in its own transaction.
    async fn apply_repair(
        &self,
        item: BasketItemUuid,
        repair: Repair,
    ) -> Result<(), BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        match repair {
            Repair::Keep => {}
            Repair::Clamp(quantity) => {
                self.items_repository
                    .update_quantity(&mut tx, item, quantity)
                    .await?;
            }
            Repair::Remove(_) => {
                self.items_repository.delete_item(&mut tx, item).await?;
            }
        }

        tx.commit().await?;

        Ok(())
    }

    fn revalidate(&self) {
        revalidate_basket_views(self.revalidator.as_ref());
    }
}

impl fmt::Debug for PgBasketsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgBasketsService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl BasketsService for PgBasketsService {
    async fn get_or_create_basket(
        &self,
        user: UserUuid,
    ) -> Result<BasketRecord, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut basket = self.find_or_create_basket(&mut tx, user).await?;

        basket.items = self.items_repository.list_items(&mut tx, basket.uuid).await?;

        tx.commit().await?;

        Ok(basket)
    }

    async fn get_user_basket(&self, user: UserUuid) -> Result<BasketView, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let basket = self
            .load_basket(&mut tx, user)
            .await?
            .ok_or(BasketsServiceError::BasketNotFound)?;

        tx.commit().await?;

        let summary = BasketSummary::calculate(&basket.items);

        Ok(BasketView { basket, summary })
    }

    async fn add_to_basket(
        &self,
        user: UserUuid,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<BasketItemRecord, BasketsServiceError> {
        let quantity = Quantity::try_new(quantity)?;

        let mut tx = self.db.begin_transaction().await?;

        let snapshot = self.products_repository.find_product(&mut tx, product).await?;

        check_availability(snapshot.as_ref(), quantity).into_result()?;

        let snapshot = snapshot.ok_or(BasketsServiceError::ProductNotFound)?;

        let basket = self.find_or_create_basket(&mut tx, user).await?;

        let existing = self
            .items_repository
            .find_item_by_product(&mut tx, basket.uuid, product)
            .await?;

        let item = match existing {
            Some(existing) => {
                let total = check_addition(&snapshot, existing.quantity, quantity)?;

                self.items_repository
                    .update_quantity(&mut tx, existing.uuid, total)
                    .await?
            }
            None => {
                self.items_repository
                    .create_item(
                        &mut tx,
                        basket.uuid,
                        NewBasketItem {
                            uuid: BasketItemUuid::new(),
                            product_uuid: product,
                            quantity: i32::from(quantity),
                        },
                    )
                    .await?
            }
        };

        tx.commit().await?;

        info!(
            user_uuid = %user,
            product_uuid = %product,
            quantity = item.quantity.get(),
            "added product to basket"
        );

        self.revalidate();

        Ok(item)
    }

    async fn update_basket_item_quantity(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
        quantity: i64,
    ) -> Result<BasketItemRecord, BasketsServiceError> {
        let quantity = Quantity::try_new(quantity)?;

        let mut tx = self.db.begin_transaction().await?;

        let existing = self.find_item(&mut tx, user, item).await?;

        check_stock(&existing.product, quantity).into_result()?;

        let updated = self
            .items_repository
            .update_quantity(&mut tx, item, quantity)
            .await?;

        tx.commit().await?;

        info!(user_uuid = %user, item_uuid = %item, quantity = quantity.get(), "set basket item quantity");

        self.revalidate();

        Ok(updated)
    }

    async fn increment_basket_item(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<BasketItemRecord, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let existing = self.find_item(&mut tx, user, item).await?;
        let quantity = check_addition(&existing.product, existing.quantity, Quantity::ONE)?;

        let updated = self
            .items_repository
            .update_quantity(&mut tx, item, quantity)
            .await?;

        tx.commit().await?;

        info!(user_uuid = %user, item_uuid = %item, quantity = quantity.get(), "incremented basket item");

        self.revalidate();

        Ok(updated)
    }

    async fn decrement_basket_item(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<DecrementOutcome, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let existing = self.find_item(&mut tx, user, item).await?;

        let outcome = match existing.quantity.decrement() {
            Decrement::Updated(quantity) => DecrementOutcome::Updated(
                self.items_repository
                    .update_quantity(&mut tx, item, quantity)
                    .await?,
            ),
            Decrement::Removed => {
                self.items_repository.delete_item(&mut tx, item).await?;

                DecrementOutcome::Removed(item)
            }
        };

        tx.commit().await?;

        info!(user_uuid = %user, item_uuid = %item, "decremented basket item");

        self.revalidate();

        Ok(outcome)
    }

    async fn remove_from_basket(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<(), BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .items_repository
            .delete_item_for_user(&mut tx, user, item)
            .await?;

        if rows_affected == 0 {
            return Err(BasketsServiceError::ItemNotFound);
        }

        tx.commit().await?;

        info!(user_uuid = %user, item_uuid = %item, "removed basket item");

        self.revalidate();

        Ok(())
    }

    async fn remove_product_from_basket(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let basket = self
            .baskets_repository
            .find_basket_by_user(&mut tx, user)
            .await?
            .ok_or(BasketsServiceError::BasketNotFound)?;

        let rows_affected = self
            .items_repository
            .delete_item_by_product(&mut tx, basket.uuid, product)
            .await?;

        if rows_affected == 0 {
            return Err(BasketsServiceError::ItemNotFound);
        }

        tx.commit().await?;

        info!(user_uuid = %user, product_uuid = %product, "removed product from basket");

        self.revalidate();

        Ok(())
    }

    async fn clear_basket(&self, user: UserUuid) -> Result<u64, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let basket = self
            .baskets_repository
            .find_basket_by_user(&mut tx, user)
            .await?
            .ok_or(BasketsServiceError::BasketNotFound)?;

        let cleared = self.items_repository.clear_items(&mut tx, basket.uuid).await?;

        tx.commit().await?;

        info!(user_uuid = %user, cleared, "cleared basket");

        self.revalidate();

        Ok(cleared)
    }

    async fn get_basket_items_count(
        &self,
        user: UserUuid,
    ) -> Result<BasketCount, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let basket = self.load_basket(&mut tx, user).await?;

        tx.commit().await?;

        Ok(basket.map_or_else(BasketCount::default, |basket| BasketCount {
            total_quantity: basket
                .items
                .iter()
                .map(|item| u64::from(item.quantity.get()))
                .sum(),
            items_count: basket.items.len(),
        }))
    }

    async fn get_basket_summary(
        &self,
        user: UserUuid,
    ) -> Result<BasketSummary, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let basket = self.load_basket(&mut tx, user).await?;

        tx.commit().await?;

        Ok(basket.map_or(BasketSummary::EMPTY, |basket| {
            BasketSummary::calculate(&basket.items)
        }))
    }

    async fn is_product_in_basket(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<ProductInBasket, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let Some(basket) = self
            .baskets_repository
            .find_basket_by_user(&mut tx, user)
            .await?
        else {
            return Ok(ProductInBasket::default());
        };

        let item = self
            .items_repository
            .find_item_by_product(&mut tx, basket.uuid, product)
            .await?;

        tx.commit().await?;

        Ok(item.map_or_else(ProductInBasket::default, |item| ProductInBasket {
            in_basket: true,
            quantity: item.quantity.get(),
            item_uuid: Some(item.uuid),
        }))
    }

    async fn validate_basket(&self, user: UserUuid) -> Result<Vec<BasketIssue>, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let basket = self.load_basket(&mut tx, user).await?;

        tx.commit().await?;

        let items = basket
            .map(|basket| basket.items)
            .filter(|items| !items.is_empty())
            .ok_or(BasketsServiceError::EmptyBasket)?;

        Ok(items
            .iter()
            .flat_map(|item| inspect_line(&item.product.name, &item.product, item.quantity))
            .collect())
    }

    async fn sync_basket(&self, user: UserUuid) -> Result<SyncReport, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let basket = self.load_basket(&mut tx, user).await?;

        tx.commit().await?;

        let Some(basket) = basket else {
            return Ok(SyncReport::default());
        };

        let mut report = SyncReport::default();

        for item in &basket.items {
            let repair = plan_repair(&item.product, item.quantity);

            if repair == Repair::Keep {
                report.record(repair);
                continue;
            }

            match self.apply_repair(item.uuid, repair).await {
                Ok(()) => report.record(repair),
                Err(error) => {
                    warn!(item_uuid = %item.uuid, ?repair, "failed to repair basket item: {error}");

                    report.record_failure();
                }
            }
        }

        info!(
            user_uuid = %user,
            removed = report.removed_count,
            adjusted = report.adjusted_count,
            failed = report.failed_count,
            "synced basket"
        );

        self.revalidate();

        Ok(report)
    }

    async fn get_basket_items_by_restaurant(
        &self,
        user: UserUuid,
    ) -> Result<Vec<RestaurantGroup>, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let basket = self.load_basket(&mut tx, user).await?;

        tx.commit().await?;

        let Some(basket) = basket else {
            return Ok(Vec::new());
        };

        Ok(
            summarise_by(&basket.items, |item| item.product.restaurant.clone())
                .into_iter()
                .map(|group| RestaurantGroup {
                    restaurant: group.key,
                    items: group.lines.into_iter().cloned().collect(),
                    summary: group.summary,
                })
                .collect(),
        )
    }
}

#[automock]
#[async_trait]
pub trait BasketsService: Send + Sync {
    /// Fetch the user's basket with its items, creating an empty one if needed.
    async fn get_or_create_basket(&self, user: UserUuid)
    -> Result<BasketRecord, BasketsServiceError>;

    /// Fetch the user's basket, its items and their summary.
    async fn get_user_basket(&self, user: UserUuid) -> Result<BasketView, BasketsServiceError>;

    /// Add `quantity` units of a product, merging into an existing item.
    async fn add_to_basket(
        &self,
        user: UserUuid,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<BasketItemRecord, BasketsServiceError>;

    /// Overwrite an item's quantity.
    async fn update_basket_item_quantity(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
        quantity: i64,
    ) -> Result<BasketItemRecord, BasketsServiceError>;

    /// Add one unit to an item.
    async fn increment_basket_item(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<BasketItemRecord, BasketsServiceError>;

    /// Take one unit off an item, deleting it at zero.
    async fn decrement_basket_item(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<DecrementOutcome, BasketsServiceError>;

    /// Delete an item.
    async fn remove_from_basket(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<(), BasketsServiceError>;

    /// Delete the item holding a product.
    async fn remove_product_from_basket(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), BasketsServiceError>;

    /// Delete every item, returning how many were removed.
    async fn clear_basket(&self, user: UserUuid) -> Result<u64, BasketsServiceError>;

    /// Item and unit counts. Zero when the user has no basket.
    async fn get_basket_items_count(&self, user: UserUuid)
    -> Result<BasketCount, BasketsServiceError>;

    /// Basket totals. Zero when the user has no basket.
    async fn get_basket_summary(&self, user: UserUuid) -> Result<BasketSummary, BasketsServiceError>;

    async fn is_product_in_basket(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<ProductInBasket, BasketsServiceError>;

    /// Report items that could not be checked out as they stand.
    async fn validate_basket(&self, user: UserUuid) -> Result<Vec<BasketIssue>, BasketsServiceError>;

    /// Repair items against current availability, item by item.
    async fn sync_basket(&self, user: UserUuid) -> Result<SyncReport, BasketsServiceError>;

    /// Items grouped by restaurant, each group with its own totals.
    async fn get_basket_items_by_restaurant(
        &self,
        user: UserUuid,
    ) -> Result<Vec<RestaurantGroup>, BasketsServiceError>;
}
