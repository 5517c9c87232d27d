//! # Domain Types
//!
//! Core domain types used throughout Parlor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Table       │   │    MenuItem     │   │ ConfirmedBooking│       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id (UUID)      │       │
//! │  │  display_name   │   │  name           │   │  table_id       │       │
//! │  │  capacity       │   │  category       │   │  date/slot/dur  │       │
//! │  │  hourly_rate    │   │  unit_price     │   │  totals         │       │
//! │  │  availability   │   │  is_active      │   │  lines          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TimeSlot     │   │TableAvailability│   │  BookingStatus  │       │
//! │  │  10:00 .. 20:00 │   │  Available      │   │  Pending        │       │
//! │  │  fixed 2h grid  │   │  Occupied       │   │  Confirmed ...  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Table` and `MenuItem` are immutable reference data for the duration of a
//! session; the only mutable state lives in [`crate::draft`] and
//! [`crate::cart`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLineItem;
use crate::money::Money;
use crate::validation::{
    validate_display_name, validate_menu_item_id, validate_price_minor, validate_table_id,
    ValidationResult,
};

// =============================================================================
// Table Availability
// =============================================================================

/// Whether a billiard table can currently be selected.
///
/// Occupied tables stay visible in the table grid but are not selectable;
/// the flow rejects them with a user-facing warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TableAvailability {
    Available,
    Occupied,
}

// =============================================================================
// Table
// =============================================================================

/// A billiard table offered for booking.
///
/// Immutable reference data: availability is read from the catalog the
/// session was constructed with. Cross-session conflicts (two users booking
/// the same table) are arbitrated server-side, not here.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Table {
    /// Business identifier shown to the user ("A1", "B2", ...).
    pub id: String,

    /// Display name shown in the table grid.
    pub display_name: String,

    /// Number of players the table area seats. Always > 0.
    pub capacity: u32,

    /// Hourly rate in minor units (whole rupiah).
    pub hourly_rate_minor: i64,

    /// Whether the table can be selected right now.
    pub availability: TableAvailability,
}

impl Table {
    /// Builds a table after validating its id, display name, and rate.
    ///
    /// Catalog entries come from configuration or a backend, not from typed
    /// user input, so a bad entry is a data error surfaced at construction.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        capacity: u32,
        hourly_rate_minor: i64,
        availability: TableAvailability,
    ) -> ValidationResult<Self> {
        let id = id.into();
        let display_name = display_name.into();

        validate_table_id(&id)?;
        validate_display_name(&display_name)?;
        validate_price_minor(hourly_rate_minor)?;

        Ok(Table {
            id,
            display_name,
            capacity,
            hourly_rate_minor,
            availability,
        })
    }

    /// Returns the hourly rate as a Money type.
    #[inline]
    pub fn hourly_rate(&self) -> Money {
        Money::from_minor(self.hourly_rate_minor)
    }

    /// Checks whether the table can be selected.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.availability == TableAvailability::Available
    }
}

// =============================================================================
// Time Slot
// =============================================================================

/// A fixed discrete start time offered for booking.
///
/// The café offers a two-hour grid between opening and the last evening
/// block. A closed enum (rather than a free-form string) makes illegal slots
/// unrepresentable in a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TimeSlot {
    #[serde(rename = "10:00")]
    T1000,
    #[serde(rename = "12:00")]
    T1200,
    #[serde(rename = "14:00")]
    T1400,
    #[serde(rename = "16:00")]
    T1600,
    #[serde(rename = "18:00")]
    T1800,
    #[serde(rename = "20:00")]
    T2000,
}

impl TimeSlot {
    /// All offered slots, in display order.
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::T1000,
        TimeSlot::T1200,
        TimeSlot::T1400,
        TimeSlot::T1600,
        TimeSlot::T1800,
        TimeSlot::T2000,
    ];

    /// Human-readable start time, also the wire representation.
    pub const fn label(&self) -> &'static str {
        match self {
            TimeSlot::T1000 => "10:00",
            TimeSlot::T1200 => "12:00",
            TimeSlot::T1400 => "14:00",
            TimeSlot::T1600 => "16:00",
            TimeSlot::T1800 => "18:00",
            TimeSlot::T2000 => "20:00",
        }
    }

    /// Parses a slot from its label. Returns `None` for anything outside the
    /// fixed set.
    pub fn from_label(label: &str) -> Option<TimeSlot> {
        TimeSlot::ALL.iter().copied().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Menu
// =============================================================================

/// Menu item category, used for grouping in the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Drink,
    Food,
    Snack,
}

/// A café menu item that can be attached to a booking.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    /// Business identifier ("m1", "m2", ...).
    pub id: String,

    /// Display name shown in the menu and on the summary.
    pub name: String,

    /// Grouping category.
    pub category: MenuCategory,

    /// Unit price in minor units.
    pub unit_price_minor: i64,

    /// Whether the item is currently offered (soft delete).
    pub is_active: bool,
}

impl MenuItem {
    /// Builds a menu item after validating its id, name, and price.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: MenuCategory,
        unit_price_minor: i64,
        is_active: bool,
    ) -> ValidationResult<Self> {
        let id = id.into();
        let name = name.into();

        validate_menu_item_id(&id)?;
        validate_display_name(&name)?;
        validate_price_minor(unit_price_minor)?;

        Ok(MenuItem {
            id,
            name,
            category,
            unit_price_minor,
            is_active,
        })
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_minor(self.unit_price_minor)
    }
}

// =============================================================================
// Booking Status
// =============================================================================

/// Lifecycle status of a submitted booking, as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Submitted, awaiting server confirmation.
    Pending,
    /// Accepted by the server.
    Confirmed,
    /// The booked block has ended.
    Completed,
    /// Cancelled by the user or the café.
    Cancelled,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

// =============================================================================
// Confirmed Booking
// =============================================================================

/// The booking record emitted when the user confirms the summary screen.
///
/// Uses the snapshot pattern: draft fields, cart lines, and all three totals
/// are frozen at confirmation time, so later catalog or menu changes cannot
/// alter what the user agreed to pay.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfirmedBooking {
    /// Unique identifier (UUID v4), generated client-side so the record is
    /// addressable before the server has seen it.
    pub id: String,

    /// The booked table.
    pub table_id: String,

    /// Booking date (ISO-8601 on the wire).
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Booked start time.
    pub time_slot: TimeSlot,

    /// Booked duration in hours (1..=4).
    pub duration_hours: i64,

    /// Menu lines attached to the booking (frozen).
    pub lines: Vec<CartLineItem>,

    /// Table rate × duration, in minor units (frozen).
    pub table_subtotal_minor: i64,

    /// Σ unit price × quantity over the lines, in minor units (frozen).
    pub cart_subtotal_minor: i64,

    /// table_subtotal + cart_subtotal, in minor units (frozen).
    pub grand_total_minor: i64,

    /// When the user confirmed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl ConfirmedBooking {
    /// Returns the grand total as Money.
    #[inline]
    pub fn grand_total(&self) -> Money {
        Money::from_minor(self.grand_total_minor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_available() {
        let mut table = Table {
            id: "A1".to_string(),
            display_name: "Table A1".to_string(),
            capacity: 4,
            hourly_rate_minor: 50_000,
            availability: TableAvailability::Available,
        };
        assert!(table.is_available());
        assert_eq!(table.hourly_rate().minor(), 50_000);

        table.availability = TableAvailability::Occupied;
        assert!(!table.is_available());
    }

    #[test]
    fn test_table_new_validates_fields() {
        let table =
            Table::new("B1", "Table B1 (VIP)", 6, 75_000, TableAvailability::Available).unwrap();
        assert_eq!(table.id, "B1");
        assert_eq!(table.display_name, "Table B1 (VIP)");

        assert!(Table::new("has space", "Table", 4, 50_000, TableAvailability::Available).is_err());
        assert!(Table::new("A1", "", 4, 50_000, TableAvailability::Available).is_err());
        assert!(Table::new("A1", "Table A1", 4, -1, TableAvailability::Available).is_err());
    }

    #[test]
    fn test_menu_item_new_validates_fields() {
        let item = MenuItem::new("m1", "Iced Lychee Tea", MenuCategory::Drink, 15_000, true).unwrap();
        assert_eq!(item.unit_price().minor(), 15_000);

        assert!(MenuItem::new("", "Tea", MenuCategory::Drink, 15_000, true).is_err());
        assert!(MenuItem::new("m1", "A".repeat(200), MenuCategory::Drink, 15_000, true).is_err());
        assert!(MenuItem::new("m1", "Tea", MenuCategory::Drink, -5, true).is_err());
    }

    #[test]
    fn test_time_slot_labels_round_trip() {
        for slot in TimeSlot::ALL {
            assert_eq!(TimeSlot::from_label(slot.label()), Some(slot));
        }
        assert_eq!(TimeSlot::from_label("11:00"), None);
        assert_eq!(TimeSlot::from_label(""), None);
    }

    #[test]
    fn test_time_slot_serde_uses_labels() {
        let json = serde_json::to_string(&TimeSlot::T1800).unwrap();
        assert_eq!(json, "\"18:00\"");
        let slot: TimeSlot = serde_json::from_str("\"10:00\"").unwrap();
        assert_eq!(slot, TimeSlot::T1000);
    }

    #[test]
    fn test_booking_status_default() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }
}
