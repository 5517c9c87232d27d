//! # Validation Module
//!
//! Input validation utilities for Parlor.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Field-level rules before any booking logic runs                   │
//! │  └── The flow machine trusts values that passed validation             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Server behind POST /bookings                                 │
//! │  └── Final authority on conflicts and availability                     │
//! │                                                                         │
//! │  Defense in depth: each layer catches different mistakes               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parlor_core::validation::{validate_quantity, validate_duration_hours};
//!
//! validate_quantity(2).unwrap();
//! validate_duration_hours(3).unwrap();
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::{MAX_DURATION_HOURS, MAX_ITEM_QUANTITY, MIN_DURATION_HOURS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a table id ("A1", "B2", ...).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 20 characters
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_table_id(id: &str) -> ValidationResult<()> {
    validate_business_id("table id", id, 20)
}

/// Validates a menu item id ("m1", "m2", ...).
pub fn validate_menu_item_id(id: &str) -> ValidationResult<()> {
    validate_business_id("menu item id", id, 20)
}

fn validate_business_id(field: &str, id: &str, max: usize) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.len() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a table or menu display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
pub fn validate_display_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a booking duration in hours.
///
/// ## Policy
/// Values outside `MIN_DURATION_HOURS..=MAX_DURATION_HOURS` are rejected,
/// never clamped, so a mistyped duration is surfaced instead of silently
/// changed. The same rule is applied by [`crate::pricing::table_subtotal`].
pub fn validate_duration_hours(hours: i64) -> ValidationResult<()> {
    if !(MIN_DURATION_HOURS..=MAX_DURATION_HOURS).contains(&hours) {
        return Err(ValidationError::OutOfRange {
            field: "duration".to_string(),
            min: MIN_DURATION_HOURS,
            max: MAX_DURATION_HOURS,
        });
    }

    Ok(())
}

/// Validates a price in minor units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (complimentary items)
pub fn validate_price_minor(minor: i64) -> ValidationResult<()> {
    if minor < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates and parses a booking date from its ISO-8601 form (`YYYY-MM-DD`).
///
/// ## Returns
/// The parsed date on success.
///
/// ## Example
/// ```rust
/// use parlor_core::validation::validate_booking_date;
///
/// assert!(validate_booking_date("2026-09-01").is_ok());
/// assert!(validate_booking_date("01/09/2026").is_err());
/// assert!(validate_booking_date("").is_err());
/// ```
pub fn validate_booking_date(date: &str) -> ValidationResult<NaiveDate> {
    let date = date.trim();

    if date.is_empty() {
        return Err(ValidationError::Required {
            field: "date".to_string(),
        });
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: "must be an ISO-8601 date (YYYY-MM-DD)".to_string(),
    })
}

// =============================================================================
// Contact Validators
// =============================================================================

/// Validates an email address for login/registration payloads.
///
/// ## Rules
/// Deliberately shallow: non-empty, contains a single `@` with characters on
/// both sides, at most 254 characters. The auth gateway is the authority on
/// whether the account exists.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        });
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || parts.next().is_some() {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_table_id() {
        assert!(validate_table_id("A1").is_ok());
        assert!(validate_table_id("table_3").is_ok());

        assert!(validate_table_id("").is_err());
        assert!(validate_table_id("   ").is_err());
        assert!(validate_table_id("has space").is_err());
        assert!(validate_table_id(&"A".repeat(30)).is_err());
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("Table A1 (VIP)").is_ok());
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(99).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(100).is_err());
    }

    #[test]
    fn test_validate_duration_hours() {
        assert!(validate_duration_hours(1).is_ok());
        assert!(validate_duration_hours(4).is_ok());

        assert!(validate_duration_hours(0).is_err());
        assert!(validate_duration_hours(5).is_err());
        assert!(validate_duration_hours(-2).is_err());
    }

    #[test]
    fn test_validate_price_minor() {
        assert!(validate_price_minor(0).is_ok());
        assert!(validate_price_minor(50_000).is_ok());
        assert!(validate_price_minor(-100).is_err());
    }

    #[test]
    fn test_validate_booking_date() {
        let date = validate_booking_date("2026-09-01").unwrap();
        assert_eq!(date.to_string(), "2026-09-01");

        assert!(validate_booking_date("").is_err());
        assert!(validate_booking_date("2026-13-01").is_err());
        assert!(validate_booking_date("tomorrow").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("a@b@c").is_err());
        assert!(validate_email("@example.com").is_err());
    }
}
