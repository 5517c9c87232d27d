//! # parlor-core: Pure Business Logic for Parlor
//!
//! This crate is the **heart** of the Parlor table-booking system. It holds
//! every rule of the booking flow as pure functions and plain state types
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Parlor Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (mobile frontend)                 │   │
//! │  │   Table Grid ──► Slot Picker ──► Menu ──► Summary ──► Confirm  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ parlor-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  money  │ │  draft  │ │  cart   │ │ pricing │ │  flow   │  │   │
//! │  │   │  Money  │ │ Booking │ │  Cart   │ │ totals  │ │ machine │  │   │
//! │  │   │         │ │ Draft   │ │ lines   │ │         │ │         │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           parlor-gateway (auth + booking submission)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Table, MenuItem, TimeSlot, ConfirmedBooking)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Immutable per-session table and menu reference data
//! - [`pricing`] - Subtotal and grand-total arithmetic
//! - [`draft`] - The in-progress booking selection
//! - [`cart`] - Menu line items attached to the current draft
//! - [`flow`] - The booking-flow state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use parlor_core::money::Money;
//! use parlor_core::pricing;
//!
//! // Two hours at Rp50.000/hour
//! let rate = Money::from_minor(50_000);
//! let table = pricing::table_subtotal(2, rate).unwrap();
//! assert_eq!(table.minor(), 100_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod draft;
pub mod error;
pub mod flow;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use parlor_core::Money` instead of
// `use parlor_core::money::Money`

pub use cart::{Cart, CartLineItem};
pub use catalog::{MenuCatalog, TableCatalog};
pub use draft::{BookingDraft, DraftField};
pub use error::{CoreError, CoreResult, ValidationError};
pub use flow::{BookingFlow, BookingSummary, FlowState};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum bookable duration in hours.
pub const MIN_DURATION_HOURS: i64 = 1;

/// Maximum bookable duration in hours.
///
/// ## Business Reason
/// Tables are let out in short blocks so one group cannot hold a table for a
/// whole evening. Durations outside 1..=4 are rejected, never clamped, so a
/// mistyped value is surfaced to the user instead of silently changed.
pub const MAX_DURATION_HOURS: i64 = 4;

/// Maximum distinct menu lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts; the café menu is small, so 50 distinct lines is
/// already far beyond any real order.
pub const MAX_CART_ITEMS: usize = 50;

/// Maximum quantity of a single menu line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 100 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 99;
