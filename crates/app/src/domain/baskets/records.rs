//! Basket Records

use jiff::Timestamp;
use platter::{availability::Stocked, pricing::Priced, quantity::Quantity};
use rust_decimal::Decimal;

use crate::{
    domain::{
        categories::records::CategoryUuid, products::records::ProductUuid,
        restaurants::records::RestaurantUuid, users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Basket UUID
pub type BasketUuid = TypedUuid<BasketRecord>;

/// Basket Record
///
/// One per user. Items are ordered by when they were first added.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketRecord {
    pub uuid: BasketUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<BasketItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Basket Item UUID
pub type BasketItemUuid = TypedUuid<BasketItemRecord>;

/// Basket Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct BasketItemRecord {
    pub uuid: BasketItemUuid,
    pub basket_uuid: BasketUuid,
    pub quantity: Quantity,
    pub product: BasketProduct,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Catalog state of the product behind a basket item, read with the item.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: Decimal,
    pub discount: Option<Decimal>,
    pub stock: u32,
    pub is_active: bool,
    pub restaurant: Option<RestaurantRef>,
    pub category: Option<CategoryRef>,
}

/// Restaurant a basket product belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestaurantRef {
    pub uuid: RestaurantUuid,
    pub name: String,
}

/// Category a basket product is listed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryRef {
    pub uuid: CategoryUuid,
    pub name: String,
}

impl Priced for BasketItemRecord {
    fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    fn unit_price(&self) -> Decimal {
        self.product.price
    }

    fn discount_percent(&self) -> Option<Decimal> {
        self.product.discount
    }
}

impl Stocked for BasketProduct {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn stock(&self) -> u32 {
        self.stock
    }
}
