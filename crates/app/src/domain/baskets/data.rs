//! Basket Data

use platter::pricing::BasketSummary;

use crate::domain::{
    baskets::records::{BasketItemRecord, BasketItemUuid, BasketRecord, RestaurantRef},
    products::records::ProductUuid,
};

/// A basket with its derived totals.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketView {
    pub basket: BasketRecord,
    pub summary: BasketSummary,
}

/// Basket size, for badges and headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasketCount {
    /// Sum of item quantities.
    pub total_quantity: u64,

    /// Distinct items.
    pub items_count: usize,
}

/// Whether a product is already in the basket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductInBasket {
    pub in_basket: bool,
    pub quantity: u32,
    pub item_uuid: Option<BasketItemUuid>,
}

/// Outcome of taking one unit off an item.
#[derive(Debug, Clone, PartialEq)]
pub enum DecrementOutcome {
    /// The item still holds at least one unit.
    Updated(BasketItemRecord),

    /// The item dropped to zero and was deleted.
    Removed(BasketItemUuid),
}

/// Basket items from one restaurant, with their own totals.
///
/// Items whose product has no restaurant share a group with `restaurant: None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantGroup {
    pub restaurant: Option<RestaurantRef>,
    pub items: Vec<BasketItemRecord>,
    pub summary: BasketSummary,
}

/// New Basket Item Data
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewBasketItem {
    pub uuid: BasketItemUuid,
    pub product_uuid: ProductUuid,
    pub quantity: i32,
}
