//! Item type: a label paired with a signed amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A labelled signed amount.
///
/// One `Item` is created per parsed input line; the same type carries the
/// running total inside a dataflow node. Expenses are negative, income
/// positive.
///
/// # Examples
///
/// ```
/// use collate_core::Item;
/// use rust_decimal_macros::dec;
///
/// let item = Item::new("Coffee", dec!(-1.00));
/// assert_eq!(item.label, "Coffee");
/// assert_eq!(item.amount, dec!(-1.00));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// The label: everything after the amount on the input line. May be
    /// empty.
    pub label: String,
    /// The signed amount.
    pub amount: Decimal,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }

    /// Create a zero-amount item for `label`.
    #[must_use]
    pub fn zero(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount: Decimal::ZERO,
        }
    }

    /// Check if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // trailing zeros dropped, so -5.00 prints as "-5 Rent"
        write!(f, "{} {}", self.amount.normalize(), self.label)
    }
}
