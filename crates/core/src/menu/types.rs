//! Menu catalog data model.
//!
//! These shapes mirror what the admin panel edits and the ordering views
//! render. Prices stay display strings end to end; see [`crate::pricing`].

use serde::{Deserialize, Serialize};

/// A labelled price row, used for both item variants and paid extras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedOption {
    pub label: String,
    pub price: String,
}

/// A single orderable menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: String,
    /// Mutually exclusive size/preparation choices; the first one is
    /// preselected when the item is configured.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<PricedOption>,
    /// Paid add-ons specific to this item.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<PricedOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Admin-only reference code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Whether the item can be ordered for collection/delivery.
    #[serde(default = "default_true")]
    pub available_for_delivery: bool,
    /// Names of modifier groups attached to this item. May reference the
    /// virtual groups "Pizza Toppings" and "Burger Extras".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// A plain named item with only a price, the most common menu row.
    pub fn new(name: &str, price: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            price: price.to_string(),
            variants: Vec::new(),
            extras: Vec::new(),
            note: None,
            code: None,
            available_for_delivery: true,
            modifiers: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_extra(mut self, label: &str, price: &str) -> Self {
        self.extras.push(PricedOption {
            label: label.to_string(),
            price: price.to_string(),
        });
        self
    }

    pub fn with_modifiers(mut self, groups: &[&str]) -> Self {
        self.modifiers = groups.iter().map(|g| g.to_string()).collect();
        self
    }
}

/// A titled grouping of items within a section ("Gourmet Burgers", "On Tap").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<MenuItem>,
}

impl SubSection {
    pub fn untitled(items: Vec<MenuItem>) -> Self {
        Self {
            title: None,
            description: None,
            items,
        }
    }

    pub fn titled(title: &str, items: Vec<MenuItem>) -> Self {
        Self {
            title: Some(title.to_string()),
            description: None,
            items,
        }
    }
}

/// A top-level menu section (Breakfast, Mains, Pizza, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    /// Unique key, referenced by the derived topping projections.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub content: Vec<SubSection>,
}

/// Address of one item inside the catalog, as used by admin edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPath {
    pub section: usize,
    pub sub: usize,
    pub item: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_for_delivery_defaults_true() {
        let item: MenuItem = serde_json::from_str(r#"{"name":"Tea","price":"R30"}"#).unwrap();
        assert!(item.available_for_delivery);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let item = MenuItem::new("Steak", "R230");
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("availableForDelivery").is_some());
        assert!(json.get("available_for_delivery").is_none());
    }
}
