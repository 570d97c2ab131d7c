//! Read-only basket inspection.

use std::fmt;

use crate::{availability::Stocked, quantity::Quantity};

/// A problem that would stop a basket from being checked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasketIssue {
    /// The product was disabled after it was added.
    Unavailable {
        /// Product display name.
        product_name: String,
    },

    /// The basket holds more units than are in stock.
    InsufficientStock {
        /// Product display name.
        product_name: String,

        /// Units currently in stock.
        available: u32,

        /// Units in the basket.
        in_basket: u32,
    },
}

impl fmt::Display for BasketIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { product_name } => {
                write!(f, "{product_name} is no longer available")
            }
            Self::InsufficientStock {
                product_name,
                available,
                in_basket,
            } => write!(
                f,
                "{product_name}: only {available} items available (you have {in_basket} in cart)"
            ),
        }
    }
}

/// Inspect a single line, reporting every issue that applies.
///
/// An inactive product that is also short of stock yields both issues,
/// unavailability first.
pub fn inspect_line<P: Stocked + ?Sized>(
    product_name: &str,
    product: &P,
    quantity: Quantity,
) -> Vec<BasketIssue> {
    let mut issues = Vec::new();

    if !product.is_active() {
        issues.push(BasketIssue::Unavailable {
            product_name: product_name.to_string(),
        });
    }

    let available = product.stock();

    if available < quantity.get() {
        issues.push(BasketIssue::InsufficientStock {
            product_name: product_name.to_string(),
            available,
            in_basket: quantity.get(),
        });
    }

    issues
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
    fn inactive_line_message() -> TestResult {
        let product = Snapshot {
            active: false,
            stock: 10,
        };

        let issues = inspect_line("Margherita", &product, Quantity::try_new(3)?);

        assert_eq!(
            issues,
            vec![BasketIssue::Unavailable {
                product_name: "Margherita".to_string()
            }]
        );
        assert_eq!(
            issues.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["Margherita is no longer available".to_string()]
        );

        Ok(())
    }

    #[test]
    fn short_stock_message_includes_both_numbers() -> TestResult {
        let product = Snapshot {
            active: true,
            stock: 2,
        };

        let issues: Vec<String> = inspect_line("Pad Thai", &product, Quantity::try_new(5)?)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            issues,
            vec!["Pad Thai: only 2 items available (you have 5 in cart)".to_string()]
        );

        Ok(())
    }

    #[test]
    fn healthy_line_has_no_issue() -> TestResult {
        let product = Snapshot {
            active: true,
            stock: 5,
        };

        assert!(inspect_line("Ramen", &product, Quantity::try_new(5)?).is_empty());

        Ok(())
    }

    #[test]
    fn inactive_and_short_line_reports_both() -> TestResult {
        let product = Snapshot {
            active: false,
            stock: 1,
        };

        let issues: Vec<String> = inspect_line("Soup", &product, Quantity::try_new(5)?)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            issues,
            vec![
                "Soup is no longer available".to_string(),
                "Soup: only 1 items available (you have 5 in cart)".to_string(),
            ]
        );

        Ok(())
    }
}
