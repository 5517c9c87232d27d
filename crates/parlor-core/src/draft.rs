//! # Booking Draft
//!
//! The in-progress, not-yet-submitted booking selection for one session.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Lifecycle                                      │
//! │                                                                         │
//! │  flow start ──► empty draft                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  select_table / select_date / select_time / set_duration               │
//! │  (any order, last-write-wins, no history)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  is_complete() == true ──► flow may advance to menu / summary          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  clear() on confirm or cancel ──► back to the empty draft              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The draft holds exactly one in-progress booking and is owned by its
//! session's [`crate::flow::BookingFlow`]; it is never shared across
//! sessions. Availability of the selected table is deliberately NOT checked
//! here - that is a property of the table catalog, enforced by the flow
//! before it calls [`BookingDraft::select_table`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::TimeSlot;
use crate::validation::{validate_duration_hours, ValidationResult};

// =============================================================================
// Draft Fields
// =============================================================================

/// The four required draft fields, used to name what is still unset when a
/// forward transition is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Table,
    Date,
    TimeSlot,
    Duration,
}

impl DraftField {
    /// User-facing field name.
    pub const fn name(&self) -> &'static str {
        match self {
            DraftField::Table => "table",
            DraftField::Date => "date",
            DraftField::TimeSlot => "time slot",
            DraftField::Duration => "duration",
        }
    }
}

// =============================================================================
// Booking Draft
// =============================================================================

/// The in-progress booking selection.
///
/// Every setter is independent and idempotent: setting the same value twice
/// leaves the draft unchanged, setting a different value overwrites the
/// prior choice. `clear` is the only way a field returns to unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingDraft {
    /// Selected table id, if any.
    pub table_id: Option<String>,

    /// Selected booking date, if any.
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,

    /// Selected start time, if any.
    pub time_slot: Option<TimeSlot>,

    /// Selected duration in hours (1..=4), if any.
    pub duration_hours: Option<i64>,
}

impl BookingDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the selected table. Last-write-wins.
    pub fn select_table(&mut self, table_id: impl Into<String>) {
        self.table_id = Some(table_id.into());
    }

    /// Records the selected date. Last-write-wins.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// Records the selected start time. Last-write-wins.
    pub fn select_time(&mut self, slot: TimeSlot) {
        self.time_slot = Some(slot);
    }

    /// Records the selected duration.
    ///
    /// Rejects values outside the configured 1..=4 range; on rejection the
    /// previous value (possibly unset) is kept.
    pub fn set_duration(&mut self, hours: i64) -> ValidationResult<()> {
        validate_duration_hours(hours)?;
        self.duration_hours = Some(hours);
        Ok(())
    }

    /// Resets every field to unset. Idempotent.
    pub fn clear(&mut self) {
        *self = BookingDraft::default();
    }

    /// True once all four required fields are set.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names the fields that are still unset, in screen order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.table_id.is_none() {
            missing.push(DraftField::Table);
        }
        if self.date.is_none() {
            missing.push(DraftField::Date);
        }
        if self.time_slot.is_none() {
            missing.push(DraftField::TimeSlot);
        }
        if self.duration_hours.is_none() {
            missing.push(DraftField::Duration);
        }
        missing
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_draft_is_incomplete() {
        let draft = BookingDraft::new();
        assert!(!draft.is_complete());
        assert_eq!(
            draft.missing_fields(),
            vec![
                DraftField::Table,
                DraftField::Date,
                DraftField::TimeSlot,
                DraftField::Duration
            ]
        );
    }

    #[test]
    fn test_setters_are_last_write_wins() {
        let mut draft = BookingDraft::new();

        draft.select_table("A1");
        draft.select_table("A1"); // idempotent
        assert_eq!(draft.table_id.as_deref(), Some("A1"));

        draft.select_table("B3"); // overwrite, no history
        assert_eq!(draft.table_id.as_deref(), Some("B3"));

        draft.select_time(TimeSlot::T1000);
        draft.select_time(TimeSlot::T1800);
        assert_eq!(draft.time_slot, Some(TimeSlot::T1800));
    }

    #[test]
    fn test_set_duration_rejects_out_of_range() {
        let mut draft = BookingDraft::new();

        assert!(draft.set_duration(2).is_ok());
        assert_eq!(draft.duration_hours, Some(2));

        // Rejected, previous value kept
        assert!(draft.set_duration(0).is_err());
        assert!(draft.set_duration(5).is_err());
        assert_eq!(draft.duration_hours, Some(2));
    }

    #[test]
    fn test_complete_after_all_fields() {
        let mut draft = BookingDraft::new();
        draft.select_table("A1");
        draft.select_date(date("2026-09-01"));
        draft.select_time(TimeSlot::T1400);
        draft.set_duration(2).unwrap();

        assert!(draft.is_complete());
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_clear_restores_initial_value_idempotently() {
        let mut draft = BookingDraft::new();
        draft.select_table("A1");
        draft.select_date(date("2026-09-01"));
        draft.select_time(TimeSlot::T1400);
        draft.set_duration(2).unwrap();

        draft.clear();
        assert_eq!(draft, BookingDraft::default());

        // Calling twice is the same as once
        draft.clear();
        assert_eq!(draft, BookingDraft::default());
    }
}
