//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    Every amount is a whole number of rupiah. Subtotals and grand       │
//! │    totals are exact sums; the round-trip identity                      │
//! │    grand_total == table_subtotal + cart_subtotal never drifts.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parlor_core::money::Money;
//!
//! // Create from minor units (the only way)
//! let rate = Money::from_minor(50_000); // Rp50.000
//!
//! // Arithmetic operations
//! let two_hours = rate * 2;
//! let total = two_hours + Money::from_minor(15_000);
//! assert_eq!(total.minor(), 115_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (whole rupiah).
///
/// ## Design Decisions
/// - **i64 (signed)**: leaves room for refunds/adjustments even though the
///   booking flow itself only produces non-negative amounts
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
///
/// Every monetary value in the system flows through this type:
/// `Table.hourly_rate` and `MenuItem.unit_price` feed the line and subtotal
/// math, and the frontend only formats the result for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use parlor_core::money::Money;
    ///
    /// let rate = Money::from_minor(50_000);
    /// assert_eq!(rate.minor(), 50_000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use parlor_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(15_000); // Rp15.000
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.minor(), 30_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the amount Indonesian style: `Rp50.000`.
///
/// ## Note
/// This is for logs and debugging. The frontend formats amounts itself to
/// handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rp{}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity and duration calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Groups digits with `.` separators: 1500000 -> "1.500.000".
fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }
    let mut out = String::new();
    for (i, group) in groups.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&group.to_string());
        } else {
            out.push_str(&format!(".{:03}", group));
        }
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(50_000);
        assert_eq!(money.minor(), 50_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(50_000)), "Rp50.000");
        assert_eq!(format!("{}", Money::from_minor(1_500_000)), "Rp1.500.000");
        assert_eq!(format!("{}", Money::from_minor(999)), "Rp999");
        assert_eq!(format!("{}", Money::from_minor(0)), "Rp0");
        assert_eq!(format!("{}", Money::from_minor(-15_000)), "-Rp15.000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(100_000);
        let b = Money::from_minor(30_000);

        assert_eq!((a + b).minor(), 130_000);
        assert_eq!((a - b).minor(), 70_000);
        let result: Money = b * 3;
        assert_eq!(result.minor(), 90_000);
    }

    #[test]
    fn test_assign_ops() {
        let mut total = Money::zero();
        total += Money::from_minor(15_000);
        total += Money::from_minor(15_000);
        assert_eq!(total.minor(), 30_000);
        total -= Money::from_minor(5_000);
        assert_eq!(total.minor(), 25_000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_minor(100).is_positive());
        assert!(Money::from_minor(-100).is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_minor(15_000);
        assert_eq!(unit_price.multiply_quantity(2).minor(), 30_000);
        assert_eq!(unit_price.multiply_quantity(0).minor(), 0);
    }
}
