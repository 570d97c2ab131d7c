//! Basket Handlers

pub(crate) mod clear;
pub(crate) mod count;
pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod items;
pub(crate) mod products;
pub(crate) mod restaurants;
pub(crate) mod summary;
pub(crate) mod sync;
pub(crate) mod validate;


#[cfg(test)]
pub(in crate::baskets) use tests::{make_basket, make_item};
