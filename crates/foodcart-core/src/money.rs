//! Price type for menu items and cart totals.
//!
//! Prices are whole currency units (the storefront sells in đồng, which has
//! no subunit in practice), held as a signed 64-bit integer so totals never
//! go through floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// An amount in whole currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from whole units.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw amount.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Line total for `quantity` units, saturating at the bounds of `i64`.
    pub fn times(&self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Format with `.` thousands separators and a currency suffix,
    /// e.g. `150.000 ₫`. An empty suffix omits the trailing space.
    pub fn display_with(&self, suffix: &str) -> String {
        let grouped = group_thousands(self.0);
        if suffix.is_empty() {
            grouped
        } else {
            format!("{} {}", grouped, suffix)
        }
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::zero(), |acc, p| acc + p)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Price(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", group_thousands(self.0))
    }
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
