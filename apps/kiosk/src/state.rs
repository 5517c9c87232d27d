//! # Session State
//!
//! Wraps one session's [`BookingFlow`] for shared access.
//!
//! ## Thread Safety
//! The flow is wrapped in `Arc<Mutex<T>>`:
//! 1. UI handlers and the submission path may both touch the session
//! 2. Only one operation may mutate the flow at a time
//! 3. All transitions stay user-input-driven and serialized - there is no
//!    background mutation of draft or cart
//!
//! Each session constructs its own `SessionState`; nothing is process-global.

use std::sync::{Arc, Mutex};

use parlor_core::{BookingFlow, MenuCatalog, TableCatalog};

/// Shared handle to one session's booking flow.
#[derive(Debug, Clone)]
pub struct SessionState {
    flow: Arc<Mutex<BookingFlow>>,
}

impl SessionState {
    /// Creates a fresh session over the given reference data.
    pub fn new(tables: TableCatalog, menu: MenuCatalog) -> Self {
        SessionState {
            flow: Arc::new(Mutex::new(BookingFlow::new(tables, menu))),
        }
    }

    /// Executes a function with read access to the flow.
    pub fn with_flow<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BookingFlow) -> R,
    {
        let flow = self.flow.lock().expect("Flow mutex poisoned");
        f(&flow)
    }

    /// Executes a function with write access to the flow.
    pub fn with_flow_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BookingFlow) -> R,
    {
        let mut flow = self.flow.lock().expect("Flow mutex poisoned");
        f(&mut flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use parlor_core::FlowState;

    #[test]
    fn test_session_round_trip() {
        let session = SessionState::new(seed::tables().unwrap(), seed::menu().unwrap());

        session.with_flow_mut(|flow| flow.select_table("A1")).unwrap();
        let state = session.with_flow(|flow| flow.state());
        assert_eq!(state, FlowState::SelectingSlot);
    }

    #[test]
    fn test_clones_share_the_same_session() {
        let session = SessionState::new(seed::tables().unwrap(), seed::menu().unwrap());
        let other = session.clone();

        session.with_flow_mut(|flow| flow.select_table("A1")).unwrap();
        assert_eq!(
            other.with_flow(|flow| flow.draft().table_id.clone()),
            Some("A1".to_string())
        );
    }
}
