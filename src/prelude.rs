//! Platter prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    availability::{
        Availability, AvailabilityError, Stocked, check_addition, check_availability, check_stock,
    },
    inspection::{BasketIssue, inspect_line},
    pricing::{Amount, BasketSummary, Priced, SummaryGroup, line_total, summarise_by},
    quantity::{Decrement, Quantity, QuantityError},
    reconciliation::{RemovalReason, Repair, SyncReport, plan_repair},
};
