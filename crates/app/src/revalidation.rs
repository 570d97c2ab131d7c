//! View revalidation
//!
//! Basket, review and favorite mutations tell the presentation layer which
//! rendered views are now stale. Delivery is fire-and-forget and never
//! affects the mutation result.

use std::fmt;

use mockall::automock;
use tracing::debug;

/// Views that render basket contents.
pub const BASKET_VIEWS: [&str; 2] = ["/basket", "/cart"];

/// Views that render a user's favorites or favorite markers.
pub const FAVORITE_VIEWS: [&str; 2] = ["/favorites", "/products"];

/// Product listing view; single products live under it.
pub const PRODUCTS_VIEW: &str = "/products";

#[automock]
pub trait ViewRevalidator: Send + Sync {
    /// Mark the view at `path` as stale.
    fn revalidate(&self, path: &str);
}

/// Revalidator that only records the request in the trace log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRevalidator;

impl ViewRevalidator for TracingRevalidator {
    fn revalidate(&self, path: &str) {
        debug!(path, "revalidating view");
    }
}

/// Revalidate each of `paths`.
pub fn revalidate_views<'a>(
    revalidator: &dyn ViewRevalidator,
    paths: impl IntoIterator<Item = &'a str>,
) {
    for path in paths {
        revalidator.revalidate(path);
    }
}

/// Revalidate every basket view.
pub fn revalidate_basket_views(revalidator: &dyn ViewRevalidator) {
    revalidate_views(revalidator, BASKET_VIEWS);
}

/// Revalidate the product listing and the product's own page.
pub fn revalidate_product_views(revalidator: &dyn ViewRevalidator, product: impl fmt::Display) {
    let product_view = format!("{PRODUCTS_VIEW}/{product}");

    revalidate_views(revalidator, [PRODUCTS_VIEW, product_view.as_str()]);
}
