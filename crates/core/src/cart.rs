//! # Cart
//!
//! The ordered list of configured, priced lines pending order submission.
//! Adding is always an append: two identical configurations stay two
//! separate lines with distinct ids.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::menu::{MenuItem, PricedOption};

/// One configured, quantified instance of a menu item.
///
/// Invariant: `total_price == unit_price * quantity`, both after creation
/// and after every quantity change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    /// Copied from the catalog at configuration time, not live-linked.
    pub item: MenuItem,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<PricedOption>,
    /// Item extras, pizza toppings, and burger extras, flattened in that
    /// order.
    pub selected_extras: Vec<PricedOption>,
    /// Single-select choice per modifier group.
    pub selected_modifiers: IndexMap<String, String>,
    pub special_instructions: String,
    pub unit_price: u64,
    pub total_price: u64,
    pub added_at: DateTime<Utc>,
}

/// Process-owned order state, mutated only through these operations.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. Never merges with an existing identical line.
    pub fn add(&mut self, line: CartLine) {
        tracing::info!(line = %line.id, item = %line.item.name, "Cart line added");
        self.lines.push(line);
    }

    /// Remove a line by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|line| line.id != id);
    }

    /// Adjust a line's quantity by `delta`, clamped to at least 1. The
    /// stored unit price is held constant and the total recomputed from it.
    /// Returns the updated line, or `None` for an unknown id.
    pub fn update_quantity(&mut self, id: &str, delta: i32) -> Option<&CartLine> {
        let line = self.lines.iter_mut().find(|line| line.id == id)?;
        let new_quantity = (i64::from(line.quantity) + i64::from(delta)).max(1) as u32;
        line.quantity = new_quantity;
        line.total_price = line.unit_price * u64::from(new_quantity);
        Some(line)
    }

    /// Empty the cart entirely.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Order total: sum of line totals.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(|line| line.total_price).sum()
    }

    /// Number of units across all lines (the cart badge count).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configure::{ConfigurationDraft, Selections};
    use crate::menu::{Catalog, ItemPath};
    use crate::modifiers::ModifierRegistry;

    fn line_for(price: &str, quantity: u32) -> CartLine {
        let catalog = Catalog::seed();
        let registry = ModifierRegistry::seed();
        let item = crate::menu::MenuItem::new("Flat White", price);
        let draft = ConfigurationDraft::open(
            ItemPath {
                section: 0,
                sub: 0,
                item: 0,
            },
            &item,
            &registry,
            &catalog,
        );
        draft.build_line(&Selections {
            quantity,
            ..Selections::default()
        })
    }

    #[test]
    fn test_identical_adds_stay_separate_lines() {
        let mut cart = Cart::new();
        let first = line_for("R40", 1);
        let second = line_for("R40", 1);
        assert_ne!(first.id, second.id);
        cart.add(first);
        cart.add(second);
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.total(), 80);
    }

    #[test]
    fn test_total_tracks_quantity_updates() {
        let mut cart = Cart::new();
        cart.add(line_for("R135", 1));
        let id = cart.lines()[0].id.clone();

        let line = cart.update_quantity(&id, 2).unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(line.total_price, line.unit_price * 3);
        assert_eq!(cart.total(), 405);
    }

    #[test]
    fn test_quantity_clamps_at_one() {
        let mut cart = Cart::new();
        cart.add(line_for("R95", 2));
        let id = cart.lines()[0].id.clone();

        let line = cart.update_quantity(&id, -5).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.total_price, 95);
    }

    #[test]
    fn test_update_quantity_unknown_id() {
        let mut cart = Cart::new();
        assert!(cart.update_quantity("missing", 1).is_none());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(line_for("R30", 1));
        cart.add(line_for("R45", 2));
        let first = cart.lines()[0].id.clone();

        cart.remove(&first);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 2);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }
}
