//! # Booking Flow State Machine
//!
//! Orchestrates the booking sequence for one user session.
//!
//! ## States and Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Flow                                         │
//! │                                                                         │
//! │  ┌───────────────┐    ┌───────────────┐    ┌───────────────┐           │
//! │  │ SelectingTable│───►│ SelectingSlot │───►│  AddingMenu   │           │
//! │  │  (home state) │    │               │    │  (optional)   │           │
//! │  └───────────────┘    └───────┬───────┘    └───────┬───────┘           │
//! │          ▲                    │ review()           │ review()          │
//! │          │                    ▼                    ▼                   │
//! │          │            ┌──────────────────────────────────┐             │
//! │          │            │        ReviewingSummary          │             │
//! │          │            └───────────────┬──────────────────┘             │
//! │          │                            │ confirm()                      │
//! │          └────────────────────────────┘                                │
//! │           (also: cancel() from ANY state)                              │
//! │                                                                         │
//! │  Field setters (table, date, slot, duration) interleave freely:        │
//! │  only the FORWARD transitions above are gated, on a complete draft.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Notes
//! - Each session constructs its own `BookingFlow` instance owning its draft,
//!   cart, and catalogs; there is no shared global store
//! - Everything here is synchronous; only the final submission (the gateway's
//!   `POST /bookings`) involves network I/O, outside this crate
//! - `confirm` recomputes the summary fresh from live state, so totals can
//!   never go stale if fields were mutated after the summary screen was
//!   first rendered

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, CartLineItem};
use crate::catalog::{MenuCatalog, TableCatalog};
use crate::draft::BookingDraft;
use crate::error::{CoreError, CoreResult};
use crate::pricing;
use crate::types::{ConfirmedBooking, TimeSlot};
use crate::validation::{validate_menu_item_id, validate_table_id};

// =============================================================================
// Flow State
// =============================================================================

/// The screen-level state of the booking flow.
///
/// `SelectingTable` doubles as the neutral/home state: confirmation and
/// cancellation both return the machine there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    /// Browsing the table grid. Nothing committed yet.
    SelectingTable,
    /// A table is chosen; date, slot, and duration are being picked.
    SelectingSlot,
    /// Optional menu step; cart mutation happens here.
    AddingMenu,
    /// Summary screen; confirm() is only legal here.
    ReviewingSummary,
}

impl Default for FlowState {
    fn default() -> Self {
        FlowState::SelectingTable
    }
}

// =============================================================================
// Booking Summary
// =============================================================================

/// Derived view of the booking: draft fields plus the three totals.
///
/// Never stored - always recomputed from the live draft, cart, and catalog,
/// so it always equals a fresh recomputation from its sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub table_id: String,
    pub table_name: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub duration_hours: i64,
    pub table_subtotal_minor: i64,
    /// Cart lines in insertion order.
    pub lines: Vec<CartLineItem>,
    pub cart_subtotal_minor: i64,
    pub grand_total_minor: i64,
}

// =============================================================================
// Booking Flow
// =============================================================================

/// The booking-flow state machine for one session.
///
/// Owns the session's draft, cart, and reference catalogs. All transitions
/// are user-input-driven and processed one at a time; there is no background
/// mutation and exactly one in-progress draft.
#[derive(Debug, Clone)]
pub struct BookingFlow {
    state: FlowState,
    draft: BookingDraft,
    cart: Cart,
    tables: TableCatalog,
    menu: MenuCatalog,
}

impl BookingFlow {
    /// Creates a fresh flow over the given reference data.
    pub fn new(tables: TableCatalog, menu: MenuCatalog) -> Self {
        BookingFlow {
            state: FlowState::SelectingTable,
            draft: BookingDraft::new(),
            cart: Cart::new(),
            tables,
            menu,
        }
    }

    // -------------------------------------------------------------------------
    // Read accessors for the presentation layer
    // -------------------------------------------------------------------------

    /// Current flow state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The in-progress draft.
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The table reference data this session sees.
    pub fn tables(&self) -> &TableCatalog {
        &self.tables
    }

    /// The menu reference data this session sees.
    pub fn menu(&self) -> &MenuCatalog {
        &self.menu
    }

    // -------------------------------------------------------------------------
    // Field setters (interleave freely; never change gated state)
    // -------------------------------------------------------------------------

    /// Selects a table.
    ///
    /// ## Errors
    /// - [`CoreError::TableNotFound`] for an unknown id
    /// - [`CoreError::TableOccupied`] for an occupied table - the selection
    ///   is rejected with a user-facing warning, draft and state unchanged
    pub fn select_table(&mut self, table_id: &str) -> CoreResult<()> {
        validate_table_id(table_id)?;

        let table = self
            .tables
            .get(table_id)
            .ok_or_else(|| CoreError::TableNotFound(table_id.to_string()))?;

        if !table.is_available() {
            return Err(CoreError::TableOccupied {
                table_id: table_id.to_string(),
            });
        }

        self.draft.select_table(table_id);
        if self.state == FlowState::SelectingTable {
            self.state = FlowState::SelectingSlot;
        }
        Ok(())
    }

    /// Selects the booking date. Last-write-wins.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.draft.select_date(date);
    }

    /// Selects the start time. Last-write-wins.
    pub fn select_time(&mut self, slot: TimeSlot) {
        self.draft.select_time(slot);
    }

    /// Sets the duration; out-of-range values are rejected.
    pub fn set_duration(&mut self, hours: i64) -> CoreResult<()> {
        self.draft.set_duration(hours)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Cart operations (legal only during the menu step)
    // -------------------------------------------------------------------------

    /// Adds a menu item to the cart, accumulating quantity on repeat adds.
    pub fn add_menu_item(&mut self, menu_item_id: &str, quantity: i64) -> CoreResult<()> {
        self.require_state(FlowState::AddingMenu, "add menu item")?;
        validate_menu_item_id(menu_item_id)?;

        let item = self
            .menu
            .get_active(menu_item_id)
            .ok_or_else(|| CoreError::MenuItemNotFound(menu_item_id.to_string()))?
            .clone();
        self.cart.add_item(&item, quantity)
    }

    /// Sets the quantity of a cart line (0 removes it).
    pub fn update_menu_quantity(&mut self, menu_item_id: &str, quantity: i64) -> CoreResult<()> {
        self.require_state(FlowState::AddingMenu, "update menu quantity")?;
        self.cart.update_quantity(menu_item_id, quantity)
    }

    /// Removes a cart line; a no-op when absent.
    pub fn remove_menu_item(&mut self, menu_item_id: &str) -> CoreResult<bool> {
        self.require_state(FlowState::AddingMenu, "remove menu item")?;
        Ok(self.cart.remove_item(menu_item_id))
    }

    // -------------------------------------------------------------------------
    // Forward transitions (gated on a complete draft)
    // -------------------------------------------------------------------------

    /// Enters the optional menu step.
    ///
    /// Menu items are always attached to a fully-specified table booking,
    /// never to an incomplete one, so this has the same precondition as
    /// [`BookingFlow::review`].
    pub fn enter_menu(&mut self) -> CoreResult<()> {
        self.require_complete_draft()?;
        self.state = FlowState::AddingMenu;
        Ok(())
    }

    /// Advances to the summary screen, either directly from slot selection
    /// (skipping the menu) or from the menu step.
    ///
    /// ## Errors
    /// [`CoreError::IncompleteDraft`] naming every unset field; the current
    /// state and all fields are left unchanged.
    pub fn review(&mut self) -> CoreResult<()> {
        self.require_complete_draft()?;
        self.state = FlowState::ReviewingSummary;
        Ok(())
    }

    /// Computes the booking summary fresh from the live draft, cart, and
    /// catalog. Never cached.
    pub fn summary(&self) -> CoreResult<BookingSummary> {
        self.require_complete_draft()?;

        // require_complete_draft guarantees the four fields below are set
        let table_id = self.draft.table_id.clone().unwrap_or_default();
        let date = self.draft.date.unwrap_or_default();
        let time_slot = self.draft.time_slot.unwrap_or(TimeSlot::T1000);
        let duration_hours = self.draft.duration_hours.unwrap_or(0);

        let table = self
            .tables
            .get(&table_id)
            .ok_or_else(|| CoreError::TableNotFound(table_id.clone()))?;

        let table_subtotal = pricing::table_subtotal(duration_hours, table.hourly_rate())?;
        let cart_subtotal = pricing::cart_subtotal(&self.cart.lines);
        let grand_total = pricing::grand_total(table_subtotal, cart_subtotal);

        Ok(BookingSummary {
            table_id,
            table_name: table.display_name.clone(),
            date,
            time_slot,
            duration_hours,
            table_subtotal_minor: table_subtotal.minor(),
            lines: self.cart.lines.clone(),
            cart_subtotal_minor: cart_subtotal.minor(),
            grand_total_minor: grand_total.minor(),
        })
    }

    /// Confirms the booking from the summary screen.
    ///
    /// Recomputes the summary from current state (never trusts a previously
    /// rendered one), emits the confirmed booking record for submission,
    /// clears draft and cart, and returns the machine to the home state.
    pub fn confirm(&mut self) -> CoreResult<ConfirmedBooking> {
        self.require_state(FlowState::ReviewingSummary, "confirm")?;

        let summary = self.summary()?;
        let booking = ConfirmedBooking {
            id: Uuid::new_v4().to_string(),
            table_id: summary.table_id,
            date: summary.date,
            time_slot: summary.time_slot,
            duration_hours: summary.duration_hours,
            lines: summary.lines,
            table_subtotal_minor: summary.table_subtotal_minor,
            cart_subtotal_minor: summary.cart_subtotal_minor,
            grand_total_minor: summary.grand_total_minor,
            created_at: Utc::now(),
        };

        self.draft.clear();
        self.cart.clear();
        self.state = FlowState::SelectingTable;

        Ok(booking)
    }

    /// Explicit cancellation from any state: clears draft and cart and
    /// returns to the home state.
    pub fn cancel(&mut self) {
        self.draft.clear();
        self.cart.clear();
        self.state = FlowState::SelectingTable;
    }

    // -------------------------------------------------------------------------
    // Gate helpers
    // -------------------------------------------------------------------------

    fn require_complete_draft(&self) -> CoreResult<()> {
        let missing = self.draft.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::IncompleteDraft { missing })
        }
    }

    fn require_state(&self, expected: FlowState, operation: &'static str) -> CoreResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(CoreError::InvalidFlowState {
                operation,
                state: self.state,
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MenuCategory, MenuItem, Table, TableAvailability};

    fn fixture_flow() -> BookingFlow {
        let tables = TableCatalog::new(vec![
            Table {
                id: "A1".to_string(),
                display_name: "Table A1".to_string(),
                capacity: 4,
                hourly_rate_minor: 50_000,
                availability: TableAvailability::Available,
            },
            Table {
                id: "B2".to_string(),
                display_name: "Table B2".to_string(),
                capacity: 4,
                hourly_rate_minor: 60_000,
                availability: TableAvailability::Occupied,
            },
        ]);
        let menu = MenuCatalog::new(vec![MenuItem {
            id: "m1".to_string(),
            name: "Iced Tea".to_string(),
            category: MenuCategory::Drink,
            unit_price_minor: 15_000,
            is_active: true,
        }]);
        BookingFlow::new(tables, menu)
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn complete_draft(flow: &mut BookingFlow) {
        flow.select_table("A1").unwrap();
        flow.select_date(date("2026-09-01"));
        flow.select_time(TimeSlot::T1400);
        flow.set_duration(2).unwrap();
    }

    #[test]
    fn test_starts_in_home_state() {
        let flow = fixture_flow();
        assert_eq!(flow.state(), FlowState::SelectingTable);
        assert!(flow.cart().is_empty());
        assert!(!flow.draft().is_complete());
    }

    #[test]
    fn test_select_table_promotes_to_slot_selection() {
        let mut flow = fixture_flow();
        flow.select_table("A1").unwrap();
        assert_eq!(flow.state(), FlowState::SelectingSlot);
    }

    #[test]
    fn test_select_unknown_table() {
        let mut flow = fixture_flow();
        let err = flow.select_table("Z9").unwrap_err();
        assert!(matches!(err, CoreError::TableNotFound(_)));
        assert!(flow.draft().table_id.is_none());
    }

    #[test]
    fn test_occupied_table_rejected_state_unchanged() {
        let mut flow = fixture_flow();
        let err = flow.select_table("B2").unwrap_err();
        assert!(matches!(err, CoreError::TableOccupied { .. }));
        assert!(flow.draft().table_id.is_none());
        assert_eq!(flow.state(), FlowState::SelectingTable);
    }

    #[test]
    fn test_forward_transitions_gated_on_complete_draft() {
        let mut flow = fixture_flow();
        flow.select_table("A1").unwrap();
        flow.select_time(TimeSlot::T1400);
        // date and duration still unset

        let err = flow.review().unwrap_err();
        match err {
            CoreError::IncompleteDraft { missing } => {
                assert_eq!(
                    missing,
                    vec![crate::draft::DraftField::Date, crate::draft::DraftField::Duration]
                );
            }
            other => panic!("expected IncompleteDraft, got {other:?}"),
        }
        assert_eq!(flow.state(), FlowState::SelectingSlot);

        // enter_menu has the same precondition
        assert!(flow.enter_menu().is_err());
        assert_eq!(flow.state(), FlowState::SelectingSlot);
    }

    #[test]
    fn test_cart_ops_only_in_menu_step() {
        let mut flow = fixture_flow();
        complete_draft(&mut flow);

        let err = flow.add_menu_item("m1", 1).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFlowState { .. }));

        flow.enter_menu().unwrap();
        flow.add_menu_item("m1", 2).unwrap();
        assert_eq!(flow.cart().total_quantity(), 2);

        assert!(matches!(
            flow.add_menu_item("m9", 1).unwrap_err(),
            CoreError::MenuItemNotFound(_)
        ));
    }

    #[test]
    fn test_summary_recomputes_from_live_state() {
        let mut flow = fixture_flow();
        complete_draft(&mut flow);
        flow.review().unwrap();

        let first = flow.summary().unwrap();
        assert_eq!(first.grand_total_minor, 100_000);

        // Mutate after the summary screen was first rendered; a fresh call
        // must reflect the change (no stale cache)
        flow.set_duration(3).unwrap();
        let second = flow.summary().unwrap();
        assert_eq!(second.table_subtotal_minor, 150_000);
        assert_eq!(second.grand_total_minor, 150_000);
    }

    #[test]
    fn test_confirm_only_from_summary() {
        let mut flow = fixture_flow();
        complete_draft(&mut flow);
        let err = flow.confirm().unwrap_err();
        assert!(matches!(err, CoreError::InvalidFlowState { .. }));
    }

    #[test]
    fn test_confirm_emits_record_and_resets() {
        let mut flow = fixture_flow();
        complete_draft(&mut flow);
        flow.enter_menu().unwrap();
        flow.add_menu_item("m1", 2).unwrap();
        flow.review().unwrap();

        let booking = flow.confirm().unwrap();
        assert_eq!(booking.table_id, "A1");
        assert_eq!(booking.table_subtotal_minor, 100_000);
        assert_eq!(booking.cart_subtotal_minor, 30_000);
        assert_eq!(booking.grand_total_minor, 130_000);
        assert_eq!(booking.lines.len(), 1);
        assert!(!booking.id.is_empty());

        // Draft and cart cleared, machine back home
        assert_eq!(flow.state(), FlowState::SelectingTable);
        assert_eq!(*flow.draft(), BookingDraft::default());
        assert!(flow.cart().is_empty());
    }

    #[test]
    fn test_cancel_from_any_state_clears_everything() {
        let mut flow = fixture_flow();
        complete_draft(&mut flow);
        flow.enter_menu().unwrap();
        flow.add_menu_item("m1", 1).unwrap();

        flow.cancel();
        assert_eq!(flow.state(), FlowState::SelectingTable);
        assert_eq!(*flow.draft(), BookingDraft::default());
        assert!(flow.cart().is_empty());
    }
}
