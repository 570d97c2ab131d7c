//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod featured;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod status;
pub(crate) mod stock;
pub(crate) mod update;


#[cfg(test)]
pub(crate) use tests::make_product;
