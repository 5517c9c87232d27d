//! # Cart Module
//!
//! Menu line items attached to the current booking draft.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Flow Operation          Cart Change           │
//! │  ───────────────          ──────────────          ───────────           │
//! │                                                                         │
//! │  Tap menu item ──────────► add_menu_item ───────► accumulate quantity  │
//! │                                                   (or append new line)  │
//! │  Change quantity ────────► update_menu_quantity ► line.quantity = n    │
//! │                                                                         │
//! │  Tap remove ─────────────► remove_menu_item ────► drop the line        │
//! │                                                                         │
//! │  Confirm / cancel ───────► clear ───────────────► lines.clear()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `menu_item_id`; adding the same item again
//!   accumulates its quantity and never overwrites the frozen name/price
//! - Insertion order of distinct items is preserved (first-added stays first)
//! - Quantity is always > 0; an update to 0 removes the line
//! - At most [`crate::MAX_CART_ITEMS`] distinct lines, each at most
//!   [`crate::MAX_ITEM_QUANTITY`] units

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::MenuItem;
use crate::validation::validate_quantity;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Line Item
// =============================================================================

/// One menu product plus its quantity within the cart.
///
/// ## Price Freezing
/// `name` and `unit_price_minor` are captured when the item is first added.
/// If the menu changes afterwards, the line keeps the values the user saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Menu item id this line refers to.
    pub menu_item_id: String,

    /// Name at time of adding (frozen).
    pub name: String,

    /// Unit price in minor units at time of adding (frozen).
    pub unit_price_minor: i64,

    /// Quantity in the cart. Always > 0.
    pub quantity: i64,
}

impl CartLineItem {
    /// Creates a line from a menu item and quantity.
    pub fn from_menu_item(item: &MenuItem, quantity: i64) -> Self {
        CartLineItem {
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price_minor: item.unit_price_minor,
            quantity,
        }
    }

    /// Line total (unit price × quantity) in minor units.
    pub fn line_total_minor(&self) -> i64 {
        self.unit_price_minor * self.quantity
    }

    /// Line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_minor(self.line_total_minor())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The menu cart for the current booking draft.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLineItem>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a menu item to the cart or accumulates quantity if already present.
    ///
    /// ## Behavior
    /// - Item already in cart: quantity increases by `quantity`; the frozen
    ///   name/price of the existing line are kept
    /// - Item not in cart: appended as a new line (insertion order preserved)
    pub fn add_item(&mut self, item: &MenuItem, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.menu_item_id == item.id)
        {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.lines.push(CartLineItem::from_menu_item(item, quantity));
        Ok(())
    }

    /// Sets the quantity of a line already in the cart.
    ///
    /// ## Behavior
    /// - Quantity 0: removes the line
    /// - Item not in cart: error
    pub fn update_quantity(&mut self, menu_item_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            self.remove_item(menu_item_id);
            return Ok(());
        }

        validate_quantity(quantity)?;

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.menu_item_id == menu_item_id)
            .ok_or_else(|| CoreError::MenuItemNotFound(menu_item_id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Removes a line by menu item id.
    ///
    /// A no-op when the line is not present; returns whether a line was
    /// actually removed.
    pub fn remove_item(&mut self, menu_item_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.menu_item_id != menu_item_id);
        self.lines.len() != initial_len
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart subtotal (Σ unit price × quantity) in minor units.
    pub fn subtotal_minor(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_minor()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuCategory;

    fn menu_item(id: &str, price_minor: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            category: MenuCategory::Drink,
            unit_price_minor: price_minor,
            is_active: true,
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let item = menu_item("m1", 15_000);

        cart.add_item(&item, 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal_minor(), 30_000);
    }

    #[test]
    fn test_add_same_item_accumulates_quantity() {
        let mut cart = Cart::new();
        let item = menu_item("m1", 15_000);

        cart.add_item(&item, 2).unwrap();
        cart.add_item(&item, 3).unwrap();

        assert_eq!(cart.line_count(), 1); // still one line, not two
        assert_eq!(cart.lines[0].quantity, 5);
    }

    #[test]
    fn test_repeat_add_keeps_frozen_name_and_price() {
        let mut cart = Cart::new();
        let original = menu_item("m1", 15_000);
        cart.add_item(&original, 1).unwrap();

        // Menu changed after first add; the line must keep what the user saw
        let mut repriced = menu_item("m1", 20_000);
        repriced.name = "Renamed".to_string();
        cart.add_item(&repriced, 1).unwrap();

        assert_eq!(cart.lines[0].unit_price_minor, 15_000);
        assert_eq!(cart.lines[0].name, "Item m1");
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("m2", 10_000), 1).unwrap();
        cart.add_item(&menu_item("m1", 15_000), 1).unwrap();
        cart.add_item(&menu_item("m2", 10_000), 1).unwrap(); // accumulate

        let ids: Vec<&str> = cart.lines.iter().map(|l| l.menu_item_id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m1"]); // first-added stays first
    }

    #[test]
    fn test_add_rejects_invalid_quantity() {
        let mut cart = Cart::new();
        let item = menu_item("m1", 15_000);

        assert!(cart.add_item(&item, 0).is_err());
        assert!(cart.add_item(&item, -1).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_accumulation_respects_quantity_cap() {
        let mut cart = Cart::new();
        let item = menu_item("m1", 15_000);

        cart.add_item(&item, MAX_ITEM_QUANTITY).unwrap();
        let err = cart.add_item(&item, 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
        assert_eq!(cart.lines[0].quantity, MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_distinct_line_cap() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_ITEMS {
            cart.add_item(&menu_item(&format!("m{}", i), 10_000), 1).unwrap();
        }
        assert_eq!(cart.line_count(), MAX_CART_ITEMS);

        // The next distinct item is rejected and the cart is unchanged
        let err = cart.add_item(&menu_item("overflow", 10_000), 1).unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { max } if max == MAX_CART_ITEMS));
        assert_eq!(cart.line_count(), MAX_CART_ITEMS);

        // Accumulating onto an existing line is still allowed at the cap
        cart.add_item(&menu_item("m0", 10_000), 1).unwrap();
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("m1", 15_000), 2).unwrap();

        cart.update_quantity("m1", 4).unwrap();
        assert_eq!(cart.lines[0].quantity, 4);

        // Quantity 0 removes the line
        cart.update_quantity("m1", 0).unwrap();
        assert!(cart.is_empty());

        // Unknown line errors
        assert!(cart.update_quantity("m9", 1).is_err());
    }

    #[test]
    fn test_remove_item_is_noop_when_absent() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("m1", 15_000), 1).unwrap();

        assert!(cart.remove_item("m1"));
        assert!(!cart.remove_item("m1")); // no-op, no error
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("m1", 15_000), 2).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal_minor(), 0);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.subtotal_minor(), 0);
        assert_eq!(cart.total_quantity(), 0);
    }
}
