//! # Item Configuration Drafts
//!
//! Opening a product for ordering materializes a [`ConfigurationDraft`]: a
//! copy of the item, the modifier groups it references with their current
//! options, defaulted selections, and a snapshot of the derived topping
//! lists. All later selections resolve against this snapshot, so catalog
//! edits made while a customer is configuring cannot shift what their
//! choices refer to.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::CartLine;
use crate::menu::{Catalog, ItemPath, MenuItem, PricedOption};
use crate::modifiers::{is_virtual_group, ModifierRegistry};
use crate::pricing::parse_price;
use crate::toppings::{burger_toppings, pizza_toppings, Topping};

/// A cross-group defaulting rule: selecting into `trigger` also defaults
/// `dependent`, using `fallback` options when the dependent group is not in
/// the registry.
pub struct CompanionRule {
    pub trigger: &'static str,
    pub dependent: &'static str,
    pub fallback: &'static [&'static str],
}

/// The one hardcoded pairing the menu has: eggs cooked to a style also ask
/// for a doneness. Kept as a table so the special case stays visible.
pub const COMPANION_RULES: &[CompanionRule] = &[CompanionRule {
    trigger: "Egg Style",
    dependent: "Egg Doneness",
    fallback: &["Soft", "Medium", "Hard"],
}];

/// A modifier group as shown in the configuration view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierGroupView {
    pub name: String,
    /// Empty means the group renders as "no selectable options" and
    /// contributes nothing to the price.
    pub options: Vec<String>,
}

/// Customer choices applied to a draft.
///
/// Extras are indexed into the draft item's own extras list (fixed for the
/// life of the draft); toppings are referenced by the stable ids stamped at
/// derivation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selections {
    pub quantity: u32,
    /// Index into the item's variants; `None` falls back to the first
    /// variant when the item has any.
    #[serde(default)]
    pub variant: Option<usize>,
    #[serde(default)]
    pub extras: Vec<usize>,
    #[serde(default)]
    pub pizza_toppings: Vec<String>,
    #[serde(default)]
    pub burger_toppings: Vec<String>,
    /// Overrides merged over the draft's defaults, keyed by group name.
    #[serde(default)]
    pub modifiers: HashMap<String, String>,
    #[serde(default)]
    pub special_instructions: String,
}

impl Default for Selections {
    fn default() -> Self {
        Self {
            quantity: 1,
            variant: None,
            extras: Vec::new(),
            pizza_toppings: Vec::new(),
            burger_toppings: Vec::new(),
            modifiers: HashMap::new(),
            special_instructions: String::new(),
        }
    }
}

/// Per-session snapshot of one item being configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationDraft {
    pub id: String,
    pub path: ItemPath,
    pub item: MenuItem,
    /// Referenced non-virtual groups (plus companion groups), with the
    /// options they had when the draft opened.
    pub modifier_groups: Vec<ModifierGroupView>,
    /// Initial single-select choice per group: the first listed option.
    pub default_modifiers: IndexMap<String, String>,
    /// Populated only when the item references "Pizza Toppings".
    pub pizza_toppings: Vec<Topping>,
    /// Populated only when the item references "Burger Extras".
    pub burger_toppings: Vec<Topping>,
    pub opened_at: DateTime<Utc>,
}

impl ConfigurationDraft {
    /// Open a draft for the item at `path`.
    pub fn open(
        path: ItemPath,
        item: &MenuItem,
        registry: &ModifierRegistry,
        catalog: &Catalog,
    ) -> Self {
        let mut modifier_groups = Vec::new();
        let mut default_modifiers = IndexMap::new();

        for group in item.modifiers.iter().filter(|g| !is_virtual_group(g)) {
            let options = registry.options(group).to_vec();
            if let Some(first) = options.first() {
                default_modifiers.insert(group.clone(), first.clone());
            }
            modifier_groups.push(ModifierGroupView {
                name: group.clone(),
                options,
            });

            for rule in COMPANION_RULES.iter().filter(|r| r.trigger == group) {
                if modifier_groups.iter().any(|g| g.name == rule.dependent) {
                    continue;
                }
                let options: Vec<String> = {
                    let stored = registry.options(rule.dependent);
                    if stored.is_empty() && !registry.is_known(rule.dependent) {
                        rule.fallback.iter().map(|o| o.to_string()).collect()
                    } else {
                        stored.to_vec()
                    }
                };
                if let Some(first) = options.first() {
                    default_modifiers.insert(rule.dependent.to_string(), first.clone());
                }
                modifier_groups.push(ModifierGroupView {
                    name: rule.dependent.to_string(),
                    options,
                });
            }
        }

        let wants_pizza = item.modifiers.iter().any(|m| m == "Pizza Toppings");
        let wants_burger = item.modifiers.iter().any(|m| m == "Burger Extras");

        Self {
            id: Uuid::new_v4().to_string(),
            path,
            item: item.clone(),
            modifier_groups,
            default_modifiers,
            pizza_toppings: if wants_pizza {
                pizza_toppings(catalog)
            } else {
                Vec::new()
            },
            burger_toppings: if wants_burger {
                burger_toppings(catalog)
            } else {
                Vec::new()
            },
            opened_at: Utc::now(),
        }
    }

    /// The variant the given selections resolve to: the chosen index, else
    /// the first variant when the item has any.
    pub fn resolved_variant(&self, selections: &Selections) -> Option<&PricedOption> {
        match selections.variant {
            Some(idx) => self.item.variants.get(idx),
            None => self.item.variants.first(),
        }
    }

    /// Price for one unit under the given selections: base price (variant
    /// if resolved, else the item price) plus every selected extra and
    /// topping.
    pub fn unit_price(&self, selections: &Selections) -> u64 {
        let base = match self.resolved_variant(selections) {
            Some(variant) => parse_price(&variant.price),
            None => parse_price(&self.item.price),
        };
        let extras: u64 = self
            .selected_extras(selections)
            .iter()
            .map(|e| parse_price(&e.price))
            .sum();
        base + extras
    }

    /// Defaults overlaid with the customer's explicit choices.
    pub fn effective_modifiers(&self, selections: &Selections) -> IndexMap<String, String> {
        let mut chosen = self.default_modifiers.clone();
        for (group, option) in &selections.modifiers {
            chosen.insert(group.clone(), option.clone());
        }
        chosen
    }

    /// Build the priced cart line for these selections. The line owns a
    /// copy of everything; the draft can be discarded afterwards.
    pub fn build_line(&self, selections: &Selections) -> CartLine {
        let quantity = selections.quantity.max(1);
        let unit_price = self.unit_price(selections);

        CartLine {
            id: Uuid::new_v4().to_string(),
            item: self.item.clone(),
            quantity,
            selected_variant: self.resolved_variant(selections).cloned(),
            selected_extras: self.selected_extras(selections),
            selected_modifiers: self.effective_modifiers(selections),
            special_instructions: selections.special_instructions.clone(),
            unit_price,
            total_price: unit_price * u64::from(quantity),
            added_at: Utc::now(),
        }
    }

    /// All priced add-ons in display order: item extras, then pizza
    /// toppings, then burger extras. Unknown ids and out-of-range extra
    /// indices resolve to nothing.
    fn selected_extras(&self, selections: &Selections) -> Vec<PricedOption> {
        let mut flattened = Vec::new();
        let mut seen_extra = Vec::new();
        for &idx in &selections.extras {
            if seen_extra.contains(&idx) {
                continue;
            }
            seen_extra.push(idx);
            if let Some(extra) = self.item.extras.get(idx) {
                flattened.push(extra.clone());
            }
        }
        for (ids, pool) in [
            (&selections.pizza_toppings, &self.pizza_toppings),
            (&selections.burger_toppings, &self.burger_toppings),
        ] {
            let mut seen = Vec::new();
            for id in ids {
                if seen.contains(&id) {
                    continue;
                }
                seen.push(id);
                if let Some(topping) = pool.iter().find(|t| &t.id == id) {
                    flattened.push(PricedOption {
                        label: topping.label.clone(),
                        price: topping.price.clone(),
                    });
                }
            }
        }
        flattened
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Catalog;

    fn draft_for(item: MenuItem) -> ConfigurationDraft {
        let catalog = Catalog::seed();
        let registry = ModifierRegistry::seed();
        ConfigurationDraft::open(
            ItemPath {
                section: 0,
                sub: 0,
                item: 0,
            },
            &item,
            &registry,
            &catalog,
        )
    }

    #[test]
    fn test_modifiers_default_to_first_option() {
        let draft = draft_for(
            MenuItem::new("Steak", "R230").with_modifiers(&["Temperature", "Select Sauce"]),
        );
        assert_eq!(draft.default_modifiers["Temperature"], "Bleu");
        assert_eq!(draft.default_modifiers["Select Sauce"], "Pepper");
    }

    #[test]
    fn test_egg_style_pulls_in_egg_doneness() {
        let draft = draft_for(MenuItem::new("The Basic", "R95").with_modifiers(&["Egg Style"]));
        assert_eq!(draft.default_modifiers["Egg Style"], "Fried");
        assert_eq!(draft.default_modifiers["Egg Doneness"], "Soft");
        assert!(draft.modifier_groups.iter().any(|g| g.name == "Egg Doneness"));
    }

    #[test]
    fn test_egg_doneness_falls_back_when_group_missing() {
        let catalog = Catalog::seed();
        let mut registry = ModifierRegistry::seed();
        registry.delete_group("Egg Doneness");
        let item = MenuItem::new("Lucy", "R135").with_modifiers(&["Egg Style"]);
        let draft = ConfigurationDraft::open(
            ItemPath {
                section: 0,
                sub: 0,
                item: 2,
            },
            &item,
            &registry,
            &catalog,
        );
        assert_eq!(draft.default_modifiers["Egg Doneness"], "Soft");
        let doneness = draft
            .modifier_groups
            .iter()
            .find(|g| g.name == "Egg Doneness")
            .unwrap();
        assert_eq!(doneness.options, ["Soft", "Medium", "Hard"]);
    }

    #[test]
    fn test_deleted_group_shows_no_options_and_no_default() {
        let catalog = Catalog::seed();
        let mut registry = ModifierRegistry::seed();
        registry.delete_group("Select Patty");
        let item = MenuItem::new("The Caprese", "R160").with_modifiers(&["Select Patty"]);
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
        let group = draft
            .modifier_groups
            .iter()
            .find(|g| g.name == "Select Patty")
            .unwrap();
        assert!(group.options.is_empty());
        assert!(!draft.default_modifiers.contains_key("Select Patty"));
        // And it contributes nothing to price.
        assert_eq!(draft.unit_price(&Selections::default()), 160);
    }

    #[test]
    fn test_virtual_groups_are_not_registry_groups_in_draft() {
        let draft =
            draft_for(MenuItem::new("Margherita", "R110").with_modifiers(&["Pizza Toppings"]));
        assert!(draft.modifier_groups.is_empty());
        assert!(!draft.pizza_toppings.is_empty());
        assert!(draft.burger_toppings.is_empty());
    }

    #[test]
    fn test_unit_price_with_extra_and_quantity() {
        let draft = draft_for(MenuItem::new("Chef's Salad", "R135").with_extra("Add pulled chicken", "+R20"));
        let selections = Selections {
            extras: vec![0],
            quantity: 2,
            ..Selections::default()
        };
        assert_eq!(draft.unit_price(&selections), 155);
        let line = draft.build_line(&selections);
        assert_eq!(line.total_price, 310);
    }

    #[test]
    fn test_topping_selection_by_id() {
        let draft =
            draft_for(MenuItem::new("Margherita", "R110").with_modifiers(&["Pizza Toppings"]));
        let basil = draft
            .pizza_toppings
            .iter()
            .find(|t| t.label == "Basil")
            .unwrap();
        let selections = Selections {
            pizza_toppings: vec![basil.id.clone(), "no-such-topping".to_string()],
            ..Selections::default()
        };
        // Herbs are R10; the unknown id adds nothing.
        assert_eq!(draft.unit_price(&selections), 120);
        let line = draft.build_line(&selections);
        assert_eq!(line.selected_extras.len(), 1);
        assert_eq!(line.selected_extras[0].label, "Basil");
    }

    #[test]
    fn test_duplicate_selections_count_once() {
        let draft = draft_for(MenuItem::new("Iced Coffee", "R45").with_extra("Decaf", "+R10"));
        let selections = Selections {
            extras: vec![0, 0, 0],
            ..Selections::default()
        };
        assert_eq!(draft.unit_price(&selections), 55);
    }

    #[test]
    fn test_zero_quantity_clamps_to_one_on_build() {
        let draft = draft_for(MenuItem::new("Tea", "R30"));
        let line = draft.build_line(&Selections {
            quantity: 0,
            ..Selections::default()
        });
        assert_eq!(line.quantity, 1);
        assert_eq!(line.total_price, 30);
    }

    #[test]
    fn test_modifier_override_replaces_default() {
        let draft = draft_for(MenuItem::new("Steak", "R230").with_modifiers(&["Temperature"]));
        let mut selections = Selections::default();
        selections
            .modifiers
            .insert("Temperature".to_string(), "Medium".to_string());
        let chosen = draft.effective_modifiers(&selections);
        assert_eq!(chosen["Temperature"], "Medium");
    }
}
