//! Reconciliation
//!
//! Plans the repair of a basket line against the current catalog state.
//! Applying the plan is left to the storage layer, which records each
//! outcome in a [`SyncReport`].

use crate::{availability::Stocked, quantity::Quantity};

/// Why a line is dropped during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// The product was disabled.
    Inactive,

    /// The product has no stock left.
    OutOfStock,
}

/// What reconciliation should do with a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repair {
    /// The line is consistent with the catalog.
    Keep,

    /// Lower the line quantity to the units in stock.
    Clamp(Quantity),

    /// Delete the line.
    Remove(RemovalReason),
}

/// Decide how to repair a line holding `quantity` units of `product`.
///
/// Inactive products are removed before stock is considered. A line over
/// stock is clamped to the remaining units, or removed when none remain.
pub fn plan_repair<P: Stocked + ?Sized>(product: &P, quantity: Quantity) -> Repair {
    if !product.is_active() {
        return Repair::Remove(RemovalReason::Inactive);
    }

    let stock = product.stock();

    if stock >= quantity.get() {
        return Repair::Keep;
    }

    match Quantity::try_from(stock) {
        Ok(clamped) => Repair::Clamp(clamped),
        Err(_) => Repair::Remove(RemovalReason::OutOfStock),
    }
}

/// Tally of a reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Lines deleted.
    pub removed_count: usize,

    /// Lines clamped to the available stock.
    pub adjusted_count: usize,

    /// Lines left untouched.
    pub unchanged_count: usize,

    /// Lines whose repair could not be written.
    pub failed_count: usize,
}

impl SyncReport {
    /// Record a repair that was applied successfully.
    pub fn record(&mut self, repair: Repair) {
        match repair {
            Repair::Keep => self.unchanged_count += 1,
            Repair::Clamp(_) => self.adjusted_count += 1,
            Repair::Remove(_) => self.removed_count += 1,
        }
    }

    /// Record a repair whose write failed.
    pub fn record_failure(&mut self) {
        self.failed_count += 1;
    }

    /// Whether anything was written.
    pub fn changed(&self) -> bool {
        self.removed_count > 0 || self.adjusted_count > 0
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    struct Snapshot {
        active: bool,
        stock: u32,
    }

    impl Stocked for Snapshot {
        fn is_active(&self) -> bool {
            self.active
        }

        fn stock(&self) -> u32 {
            self.stock
        }
    }

    #[test]
    fn inactive_product_is_removed_even_with_stock() -> TestResult {
        let product = Snapshot {
            active: false,
            stock: 50,
        };

        assert_eq!(
            plan_repair(&product, Quantity::try_new(2)?),
            Repair::Remove(RemovalReason::Inactive)
        );

        Ok(())
    }

    #[test]
    fn over_stock_line_is_clamped() -> TestResult {
        let product = Snapshot {
            active: true,
            stock: 2,
        };

        assert_eq!(
            plan_repair(&product, Quantity::try_new(5)?),
            Repair::Clamp(Quantity::try_new(2)?)
        );

        Ok(())
    }

    #[test]
    fn out_of_stock_line_is_removed() -> TestResult {
        let product = Snapshot {
            active: true,
            stock: 0,
        };

        assert_eq!(
            plan_repair(&product, Quantity::try_new(1)?),
            Repair::Remove(RemovalReason::OutOfStock)
        );

        Ok(())
    }

    #[test]
    fn line_within_stock_is_kept() -> TestResult {
        let product = Snapshot {
            active: true,
            stock: 4,
        };

        assert_eq!(plan_repair(&product, Quantity::try_new(4)?), Repair::Keep);

        Ok(())
    }

    #[test]
    fn report_tallies_outcomes() -> TestResult {
        let mut report = SyncReport::default();

        report.record(Repair::Remove(RemovalReason::Inactive));
        report.record(Repair::Clamp(Quantity::try_new(2)?));
        report.record(Repair::Keep);
        report.record_failure();

        assert_eq!(
            report,
            SyncReport {
                removed_count: 1,
                adjusted_count: 1,
                unchanged_count: 1,
                failed_count: 1,
            }
        );
        assert!(report.changed());

        Ok(())
    }

    #[test]
    fn untouched_report_has_no_changes() {
        let mut report = SyncReport::default();

        report.record(Repair::Keep);

        assert!(!report.changed());
    }
}
