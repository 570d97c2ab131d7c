//! Pricing
//!
//! Basket summaries are always derived from the current lines and never
//! stored. Accumulation keeps full precision; each money field is rounded
//! half away from zero to two decimal places only when the summary is built.

use std::{fmt, hash::Hash};

use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap;

/// A basket line that can be priced.
pub trait Priced {
    /// Units on the line.
    fn quantity(&self) -> u32;

    /// Undiscounted price of a single unit.
    fn unit_price(&self) -> Decimal;

    /// Optional percentage discount (`20` means 20% off).
    fn discount_percent(&self) -> Option<Decimal>;
}

/// A money amount with exactly two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// `0.00`
    pub const ZERO: Self = Self(Decimal::from_parts(0, 0, 0, false, 2));

    /// Round a full-precision value to two decimal places (half away from zero).
    pub fn round(value: Decimal) -> Self {
        let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        rounded.rescale(2);

        Self(rounded)
    }

    /// The underlying decimal, always at scale 2.
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Derived totals for a basket or a group of basket lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasketSummary {
    /// Number of distinct lines.
    pub items_count: usize,

    /// Sum of line quantities.
    pub total_quantity: u64,

    /// Sum of undiscounted line totals.
    pub subtotal: Amount,

    /// Sum of line discounts.
    pub discount: Amount,

    /// `subtotal - discount`.
    pub total: Amount,
}

impl BasketSummary {
    /// Summary of an empty (or missing) basket.
    pub const EMPTY: Self = Self {
        items_count: 0,
        total_quantity: 0,
        subtotal: Amount::ZERO,
        discount: Amount::ZERO,
        total: Amount::ZERO,
    };

    /// Calculate the summary for the given lines.
    pub fn calculate<'a, I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a L>,
        L: Priced + ?Sized + 'a,
    {
        let mut items_count = 0_usize;
        let mut total_quantity = 0_u64;
        let mut subtotal = Decimal::ZERO;
        let mut discount = Decimal::ZERO;

        for line in lines {
            let line_total = line_total(line);

            items_count += 1;
            total_quantity += u64::from(line.quantity());
            subtotal += line_total;
            discount += line_discount(line, line_total);
        }

        Self {
            items_count,
            total_quantity,
            subtotal: Amount::round(subtotal),
            discount: Amount::round(discount),
            total: Amount::round(subtotal - discount),
        }
    }
}

/// `unit price × quantity`, before any discount.
pub fn line_total<L: Priced + ?Sized>(line: &L) -> Decimal {
    line.unit_price() * Decimal::from(line.quantity())
}

fn line_discount<L: Priced + ?Sized>(line: &L, line_total: Decimal) -> Decimal {
    match line.discount_percent() {
        Some(percent) if percent > Decimal::ZERO => line_total * percent / Decimal::ONE_HUNDRED,
        Some(_) | None => Decimal::ZERO,
    }
}

/// Lines sharing a key, with their own summary.
#[derive(Debug, Clone)]
pub struct SummaryGroup<'a, K, L> {
    /// Grouping key.
    pub key: K,

    /// Lines in first-seen order.
    pub lines: Vec<&'a L>,

    /// Summary over `lines` only.
    pub summary: BasketSummary,
}

/// Partition lines by `key` and summarise each partition independently.
///
/// Groups come back in the order their first line appears.
pub fn summarise_by<'a, K, L, F>(lines: &'a [L], key: F) -> Vec<SummaryGroup<'a, K, L>>
where
    K: Eq + Hash + Clone,
    L: Priced,
    F: Fn(&L) -> K,
{
    let mut positions: FxHashMap<K, usize> = FxHashMap::default();
    let mut groups: Vec<SummaryGroup<'a, K, L>> = Vec::new();

    for line in lines {
        let group_key = key(line);

        let position = *positions.entry(group_key.clone()).or_insert_with(|| {
            groups.push(SummaryGroup {
                key: group_key,
                lines: Vec::new(),
                summary: BasketSummary::EMPTY,
            });

            groups.len() - 1
        });

        if let Some(group) = groups.get_mut(position) {
            group.lines.push(line);
        }
    }

    for group in &mut groups {
        group.summary = BasketSummary::calculate(group.lines.iter().copied());
    }

    groups
}
