//! # Pricing Calculator
//!
//! Pure arithmetic over booking drafts and carts.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where the totals come from                           │
//! │                                                                         │
//! │  Table.hourly_rate × Draft.duration_hours ──► table_subtotal           │
//! │                                                    │                    │
//! │  Σ CartLineItem.unit_price × quantity ──────► cart_subtotal            │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                       grand_total = table_subtotal + cart_subtotal     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No side effects; every function is deterministic and total over its
//! documented domain. All arithmetic is on integer minor units, never
//! floating point, so `grand_total == table_subtotal + cart_subtotal` holds
//! exactly for every summary the flow produces.

use crate::cart::CartLineItem;
use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_duration_hours, validate_price_minor};

/// Computes the table subtotal: `duration_hours × hourly_rate`.
///
/// ## Domain
/// - `duration_hours` must be within the configured 1..=4 range; out-of-range
///   values are **rejected**, never clamped (consistent with
///   [`crate::draft::BookingDraft::set_duration`])
/// - `hourly_rate` must be non-negative
///
/// ## Example
/// ```rust
/// use parlor_core::money::Money;
/// use parlor_core::pricing::table_subtotal;
///
/// let subtotal = table_subtotal(2, Money::from_minor(50_000)).unwrap();
/// assert_eq!(subtotal.minor(), 100_000);
/// ```
pub fn table_subtotal(duration_hours: i64, hourly_rate: Money) -> Result<Money, ValidationError> {
    validate_duration_hours(duration_hours)?;
    validate_price_minor(hourly_rate.minor())?;
    Ok(hourly_rate * duration_hours)
}

/// Computes the cart subtotal: Σ `unit_price × quantity` over the lines.
///
/// An empty sequence yields zero.
pub fn cart_subtotal(lines: &[CartLineItem]) -> Money {
    lines
        .iter()
        .fold(Money::zero(), |acc, line| acc + line.line_total())
}

/// Combines the two subtotals into the grand total.
#[inline]
pub fn grand_total(table_subtotal: Money, cart_subtotal: Money) -> Money {
    table_subtotal + cart_subtotal
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, unit_price_minor: i64, quantity: i64) -> CartLineItem {
        CartLineItem {
            menu_item_id: id.to_string(),
            name: format!("Item {}", id),
            unit_price_minor,
            quantity,
        }
    }

    #[test]
    fn test_table_subtotal_is_duration_times_rate() {
        // d * r for every allowed duration
        let rate = Money::from_minor(50_000);
        for d in 1..=4 {
            assert_eq!(table_subtotal(d, rate).unwrap().minor(), d * 50_000);
        }

        // Zero rate is allowed (promotional table)
        assert_eq!(table_subtotal(2, Money::zero()).unwrap().minor(), 0);
    }

    #[test]
    fn test_table_subtotal_rejects_bad_domain() {
        let rate = Money::from_minor(50_000);
        assert!(table_subtotal(0, rate).is_err());
        assert!(table_subtotal(5, rate).is_err());
        assert!(table_subtotal(-1, rate).is_err());
        assert!(table_subtotal(2, Money::from_minor(-1)).is_err());
    }

    #[test]
    fn test_cart_subtotal_sums_lines() {
        let lines = vec![line("m1", 15_000, 2), line("m2", 8_000, 3)];
        assert_eq!(cart_subtotal(&lines).minor(), 54_000);
    }

    #[test]
    fn test_cart_subtotal_empty_is_zero() {
        assert_eq!(cart_subtotal(&[]).minor(), 0);
    }

    #[test]
    fn test_grand_total_is_sum() {
        let table = Money::from_minor(100_000);
        let cart = Money::from_minor(30_000);
        assert_eq!(grand_total(table, cart).minor(), 130_000);
        assert_eq!(grand_total(table, Money::zero()), table);
    }

    /// The documented scenario: A1 at Rp50.000/h for 2h plus 2× m1 at
    /// Rp15.000 must come to exactly Rp130.000.
    #[test]
    fn test_reference_scenario() {
        let table = table_subtotal(2, Money::from_minor(50_000)).unwrap();
        let cart = cart_subtotal(&[line("m1", 15_000, 2)]);

        assert_eq!(table.minor(), 100_000);
        assert_eq!(cart.minor(), 30_000);
        assert_eq!(grand_total(table, cart).minor(), 130_000);
    }
}
