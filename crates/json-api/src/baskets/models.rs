//! Basket response models.
//!
//! Money is rendered as a string with exactly two decimal places.

use platter::{
    inspection::BasketIssue,
    pricing::{Amount, BasketSummary, line_total},
    reconciliation::SyncReport,
};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::baskets::{
    data::{BasketCount, BasketView, DecrementOutcome, ProductInBasket, RestaurantGroup},
    records::{BasketItemRecord, BasketRecord, CategoryRef, RestaurantRef},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SummaryResponse {
    /// Distinct items
    pub items_count: usize,

    /// Sum of item quantities
    pub total_quantity: u64,

    /// Total before discounts
    pub subtotal: String,

    /// Total discount
    pub discount: String,

    /// Amount payable
    pub total: String,
}

impl From<BasketSummary> for SummaryResponse {
    fn from(summary: BasketSummary) -> Self {
        Self {
            items_count: summary.items_count,
            total_quantity: summary.total_quantity,
            subtotal: summary.subtotal.to_string(),
            discount: summary.discount.to_string(),
            total: summary.total.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReferenceResponse {
    pub uuid: Uuid,
    pub name: String,
}

impl From<RestaurantRef> for ReferenceResponse {
    fn from(restaurant: RestaurantRef) -> Self {
        Self {
            uuid: restaurant.uuid.into(),
            name: restaurant.name,
        }
    }
}

impl From<CategoryRef> for ReferenceResponse {
    fn from(category: CategoryRef) -> Self {
        Self {
            uuid: category.uuid.into(),
            name: category.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketItemResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub product_name: String,
    pub quantity: u32,

    /// Price of one unit
    pub unit_price: String,

    /// Percentage off, when the product is discounted
    pub discount_percent: Option<String>,

    /// Unit price times quantity, before discount
    pub line_total: String,

    /// Units currently in stock
    pub stock: u32,

    pub is_active: bool,
    pub restaurant: Option<ReferenceResponse>,
    pub category: Option<ReferenceResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BasketItemRecord> for BasketItemResponse {
    fn from(item: BasketItemRecord) -> Self {
        let line_total = Amount::round(line_total(&item)).to_string();
        let product = item.product;

        Self {
            uuid: item.uuid.into(),
            product_uuid: product.uuid.into(),
            product_name: product.name,
            quantity: item.quantity.get(),
            unit_price: Amount::round(product.price).to_string(),
            discount_percent: product.discount.map(|percent| percent.normalize().to_string()),
            line_total,
            stock: product.stock,
            is_active: product.is_active,
            restaurant: product.restaurant.map(Into::into),
            category: product.category.map(Into::into),
            created_at: item.created_at.to_string(),
            updated_at: item.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketResponse {
    pub uuid: Uuid,
    pub user_uuid: Uuid,

    /// Items in the order they were first added
    pub items: Vec<BasketItemResponse>,

    pub summary: SummaryResponse,
    pub created_at: String,
    pub updated_at: String,
}

impl BasketResponse {
    fn new(basket: BasketRecord, summary: BasketSummary) -> Self {
        Self {
            uuid: basket.uuid.into(),
            user_uuid: basket.user_uuid.into(),
            items: basket.items.into_iter().map(Into::into).collect(),
            summary: summary.into(),
            created_at: basket.created_at.to_string(),
            updated_at: basket.updated_at.to_string(),
        }
    }
}

impl From<BasketRecord> for BasketResponse {
    fn from(basket: BasketRecord) -> Self {
        let summary = BasketSummary::calculate(&basket.items);

        Self::new(basket, summary)
    }
}

impl From<BasketView> for BasketResponse {
    fn from(view: BasketView) -> Self {
        Self::new(view.basket, view.summary)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CountResponse {
    /// Units across every item
    pub count: u64,

    /// Distinct items
    pub items_count: usize,
}

impl From<BasketCount> for CountResponse {
    fn from(count: BasketCount) -> Self {
        Self {
            count: count.total_quantity,
            items_count: count.items_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductInBasketResponse {
    pub in_basket: bool,

    /// Zero when the product is not in the basket
    pub quantity: u32,

    pub item_uuid: Option<Uuid>,
}

impl From<ProductInBasket> for ProductInBasketResponse {
    fn from(found: ProductInBasket) -> Self {
        Self {
            in_basket: found.in_basket,
            quantity: found.quantity,
            item_uuid: found.item_uuid.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RestaurantGroupResponse {
    /// `None` groups items whose product has no restaurant
    pub restaurant: Option<ReferenceResponse>,

    pub items: Vec<BasketItemResponse>,
    pub summary: SummaryResponse,
}

impl From<RestaurantGroup> for RestaurantGroupResponse {
    fn from(group: RestaurantGroup) -> Self {
        Self {
            restaurant: group.restaurant.map(Into::into),
            items: group.items.into_iter().map(Into::into).collect(),
            summary: group.summary.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidationResponse {
    pub issues: Vec<String>,
}

impl From<Vec<BasketIssue>> for ValidationResponse {
    fn from(issues: Vec<BasketIssue>) -> Self {
        Self {
            issues: issues.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SyncResponse {
    pub removed_count: usize,
    pub adjusted_count: usize,
    pub unchanged_count: usize,

    /// Items whose repair could not be written
    pub failed_count: usize,
}

impl From<SyncReport> for SyncResponse {
    fn from(report: SyncReport) -> Self {
        Self {
            removed_count: report.removed_count,
            adjusted_count: report.adjusted_count,
            unchanged_count: report.unchanged_count,
            failed_count: report.failed_count,
        }
    }
}

/// What decrementing did to the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum DecrementAction {
    Updated,
    Removed,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DecrementResponse {
    pub action: DecrementAction,

    /// The item after decrementing, unless it was removed
    pub item: Option<BasketItemResponse>,
}

impl From<DecrementOutcome> for DecrementResponse {
    fn from(outcome: DecrementOutcome) -> Self {
        match outcome {
            DecrementOutcome::Updated(item) => Self {
                action: DecrementAction::Updated,
                item: Some(item.into()),
            },
            DecrementOutcome::Removed(_) => Self {
                action: DecrementAction::Removed,
                item: None,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemovedResponse {
    /// Identifier of what was removed
    pub uuid: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClearedResponse {
    /// Items deleted
    pub cleared: u64,
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use platter::quantity::Quantity;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use platter_app::domain::{
        baskets::records::{BasketItemUuid, BasketProduct, BasketUuid},
        products::records::ProductUuid,
    };

    use super::*;

    #[test]
    fn item_money_has_two_decimals() -> TestResult {
        let item = BasketItemRecord {
            uuid: BasketItemUuid::new(),
            basket_uuid: BasketUuid::new(),
            quantity: Quantity::try_new(3)?,
            product: BasketProduct {
                uuid: ProductUuid::new(),
                name: "Gyoza".to_string(),
                price: Decimal::new(45, 1),
                discount: Some(Decimal::new(1000, 2)),
                stock: 10,
                is_active: true,
                restaurant: None,
                category: None,
            },
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        let response = BasketItemResponse::from(item);

        assert_eq!(response.unit_price, "4.50");
        assert_eq!(response.line_total, "13.50");
        assert_eq!(response.discount_percent.as_deref(), Some("10"));

        Ok(())
    }

    #[test]
    fn empty_summary_renders_zeroes() {
        let summary = SummaryResponse::from(BasketSummary::EMPTY);

        assert_eq!(summary.subtotal, "0.00");
        assert_eq!(summary.total, "0.00");
        assert_eq!(summary.items_count, 0);
    }
}
