//! # Error Types
//!
//! Domain-specific error types for parlor-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parlor-core errors (this file)                                        │
//! │  ├── CoreError        - Booking flow and catalog errors                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  parlor-gateway errors (separate crate)                                │
//! │  └── GatewayError     - Remote auth / submission failures              │
//! │                                                                         │
//! │  Recovery: every error here is recoverable at the UI boundary; the     │
//! │  user corrects input and retries, state is left unchanged.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (table id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::draft::DraftField;
use crate::flow::FlowState;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent booking rule violations. They should be caught and
/// translated to user-friendly messages; none of them is fatal.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Table id does not exist in the reference catalog.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// The selected table is currently occupied.
    ///
    /// ## When This Occurs
    /// - The user taps an occupied table in the table grid
    ///
    /// The selection is rejected with a user-facing warning and the draft
    /// keeps its previous value (possibly unset).
    #[error("Table {table_id} is occupied")]
    TableOccupied { table_id: String },

    /// Menu item id does not exist (or is no longer offered).
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// A forward transition was attempted without a fully populated draft.
    ///
    /// ## When This Occurs
    /// - Entering the menu step or the summary screen before table, date,
    ///   time slot, and duration are all chosen
    ///
    /// The message names every missing field so the user can fix all of
    /// them at once; the flow state and all draft fields are unchanged.
    #[error("Booking is incomplete, missing: {}", format_fields(missing))]
    IncompleteDraft { missing: Vec<DraftField> },

    /// The operation is not allowed in the current flow state.
    ///
    /// ## When This Occurs
    /// - Confirming while not on the summary screen
    /// - Cart mutation outside the menu step
    #[error("Cannot {operation} while in {state:?}")]
    InvalidFlowState {
        operation: &'static str,
        state: FlowState,
    },

    /// Cart has exceeded maximum allowed distinct lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

fn format_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before booking logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid date, invalid id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
