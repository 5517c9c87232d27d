//! # Catalog Module
//!
//! Immutable per-session reference data: the billiard tables and the café
//! menu. The booking flow reads from these catalogs; nothing in this crate
//! ever mutates them.
//!
//! There is no persistence behind a catalog - a session is constructed with
//! the data it should see (in the app that is a hard-coded seed, in tests a
//! handful of fixtures). Cross-session availability conflicts are the
//! server's problem, not the catalog's.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{MenuItem, Table};

// =============================================================================
// Table Catalog
// =============================================================================

/// The set of tables a session can book from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TableCatalog {
    tables: Vec<Table>,
}

impl TableCatalog {
    /// Creates a catalog from a fixed set of tables.
    pub fn new(tables: Vec<Table>) -> Self {
        TableCatalog { tables }
    }

    /// Looks up a table by id.
    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// All tables, in catalog order (for the table grid).
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Only the tables that can currently be selected.
    pub fn available_tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter().filter(|t| t.is_available())
    }
}

// =============================================================================
// Menu Catalog
// =============================================================================

/// The café menu a session can order from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Creates a catalog from a fixed set of menu items.
    pub fn new(items: Vec<MenuItem>) -> Self {
        MenuCatalog { items }
    }

    /// Looks up an item by id. Inactive items are treated as absent, so a
    /// retired item can no longer be added to a cart.
    pub fn get_active(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|m| m.id == id && m.is_active)
    }

    /// All currently offered items, in catalog order.
    pub fn active_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|m| m.is_active)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
