//! Platter
//!
//! Basket rules for the platter storefront: line quantities, stock and
//! availability checks, discount-aware pricing summaries, reconciliation of
//! stale lines against the catalog, and read-only basket inspection.
//!
//! Everything here is pure. Storage and transport live in `platter-app` and
//! `platter-json`.

pub mod availability;
pub mod inspection;
pub mod prelude;
pub mod pricing;
pub mod quantity;
pub mod reconciliation;
