//! Review Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod mine;
pub(crate) mod stats;
pub(crate) mod update;


#[cfg(test)]
pub(in crate::reviews) use tests::make_review;
