//! # Modifier Registry
//!
//! Named groups of mutually exclusive option labels ("Temperature" →
//! Rare, Medium, ...). Items reference groups by name; a reference to a
//! deleted group is not an error and simply reads as having no options.
//!
//! Two names are reserved and never stored here: "Pizza Toppings" and
//! "Burger Extras" resolve dynamically from the catalog (see
//! [`crate::toppings`]), so the editor must treat them as known without
//! creating registry entries for them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Group names resolved from catalog content instead of this registry.
pub const VIRTUAL_GROUPS: [&str; 2] = ["Pizza Toppings", "Burger Extras"];

/// Returns true for the two catalog-derived group names.
pub fn is_virtual_group(name: &str) -> bool {
    VIRTUAL_GROUPS.contains(&name)
}

/// Ordered mapping from modifier group name to its option labels.
///
/// Group order and option order are both insertion order, which is the
/// order the admin screens display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierRegistry {
    groups: IndexMap<String, Vec<String>>,
}

impl ModifierRegistry {
    /// The built-in modifier groups.
    pub fn seed() -> Self {
        let mut registry = Self::default();
        for (name, options) in [
            (
                "Temperature",
                &["Bleu", "Rare", "Medium Rare", "Medium", "Medium Well", "Well Done"][..],
            ),
            (
                "Select Sauce",
                &[
                    "Pepper",
                    "Mushroom",
                    "Cheese",
                    "Chimichurri",
                    "Garlic Butter",
                    "Peri-Peri",
                    "Garlic Sauce",
                ][..],
            ),
            ("Select Patty", &["Beef", "Chicken"][..]),
            ("Egg Style", &["Fried", "Scrambled", "Poached"][..]),
            ("Egg Doneness", &["Soft", "Medium", "Hard"][..]),
        ] {
            registry
                .groups
                .insert(name.to_string(), options.iter().map(|o| o.to_string()).collect());
        }
        registry
    }

    /// Create an empty group. Silently ignored if the name already exists
    /// or is one of the reserved virtual names.
    pub fn create_group(&mut self, name: &str) {
        if name.is_empty() || is_virtual_group(name) || self.groups.contains_key(name) {
            return;
        }
        tracing::info!(group = %name, "Modifier group created");
        self.groups.insert(name.to_string(), Vec::new());
    }

    /// Remove a group entirely. Items still referencing the name keep their
    /// dangling reference; lookups resolve to no options.
    pub fn delete_group(&mut self, name: &str) {
        if self.groups.shift_remove(name).is_some() {
            tracing::info!(group = %name, "Modifier group deleted");
        }
    }

    /// Append an option to a group if it is not already present.
    pub fn add_option(&mut self, group: &str, option: &str) {
        let Some(options) = self.groups.get_mut(group) else {
            return;
        };
        if !options.iter().any(|o| o == option) {
            options.push(option.to_string());
        }
    }

    /// Remove an option from a group.
    pub fn remove_option(&mut self, group: &str, option: &str) {
        if let Some(options) = self.groups.get_mut(group) {
            options.retain(|o| o != option);
        }
    }

    /// Options for a group, in display order. Missing groups (including the
    /// virtual names, which are never stored here) yield an empty slice.
    pub fn options(&self, group: &str) -> &[String] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a name needs no auto-creation when attached to an item:
    /// either a stored group or one of the virtual names.
    pub fn is_known(&self, name: &str) -> bool {
        is_virtual_group(name) || self.groups.contains_key(name)
    }

    /// Stored group names, in display order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// All groups with their options, for the admin modifiers tab.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// The item editor's suggestion list: stored groups followed by the two
    /// virtual names.
    pub fn suggested_for_items(&self) -> Vec<String> {
        self.group_names()
            .map(String::from)
            .chain(VIRTUAL_GROUPS.iter().map(|g| g.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_groups_in_order() {
        let registry = ModifierRegistry::seed();
        let names: Vec<&str> = registry.group_names().collect();
        assert_eq!(
            names,
            vec!["Temperature", "Select Sauce", "Select Patty", "Egg Style", "Egg Doneness"]
        );
    }

    #[test]
    fn test_create_group_ignores_duplicates() {
        let mut registry = ModifierRegistry::seed();
        registry.add_option("Temperature", "Extra Well");
        let before = registry.options("Temperature").to_vec();
        registry.create_group("Temperature");
        assert_eq!(registry.options("Temperature"), before.as_slice());
    }

    #[test]
    fn test_virtual_groups_never_stored() {
        let mut registry = ModifierRegistry::default();
        registry.create_group("Pizza Toppings");
        registry.create_group("Burger Extras");
        assert_eq!(registry.group_names().count(), 0);
        // They still count as known so the editor never auto-creates them.
        assert!(registry.is_known("Pizza Toppings"));
        assert!(registry.is_known("Burger Extras"));
    }

    #[test]
    fn test_add_option_deduplicates() {
        let mut registry = ModifierRegistry::default();
        registry.create_group("Bread");
        registry.add_option("Bread", "Sourdough");
        registry.add_option("Bread", "Rye");
        registry.add_option("Bread", "Sourdough");
        assert_eq!(registry.options("Bread"), ["Sourdough", "Rye"]);
    }

    #[test]
    fn test_deleted_group_reads_as_empty() {
        let mut registry = ModifierRegistry::seed();
        registry.delete_group("Select Sauce");
        assert!(registry.options("Select Sauce").is_empty());
        assert!(!registry.is_known("Select Sauce"));
    }

    #[test]
    fn test_options_on_missing_group_is_empty_not_error() {
        let registry = ModifierRegistry::default();
        assert!(registry.options("Nope").is_empty());
    }

    #[test]
    fn test_suggestions_end_with_virtual_groups() {
        let registry = ModifierRegistry::seed();
        let suggestions = registry.suggested_for_items();
        assert_eq!(
            &suggestions[suggestions.len() - 2..],
            ["Pizza Toppings", "Burger Extras"]
        );
    }
}
