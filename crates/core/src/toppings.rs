//! # Derived Topping Lists
//!
//! The "Pizza Toppings" and "Burger Extras" virtual modifier groups are
//! projections over the catalog, not registry entries. Both are pure
//! functions of the current catalog and are recomputed on every read; a
//! configuration draft snapshots the result so selections stay consistent
//! if the catalog is edited mid-session.
//!
//! Selections reference toppings by the stable `id` stamped at derivation
//! time rather than by list position.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::menu::Catalog;

/// One selectable topping with its derivation-time id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    /// Stable within one derivation: a slug of the label, suffixed with a
    /// counter when labels repeat.
    pub id: String,
    pub label: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Pizza toppings, derived from the "Build Your Own" sub-section of the
/// `pizza` section.
///
/// Items with a comma-separated description fan out into one topping per
/// token (trimmed, trailing period stripped, empties dropped), all at the
/// item's price. Items without a description contribute themselves.
pub fn pizza_toppings(catalog: &Catalog) -> Vec<Topping> {
    let Some(section) = catalog.section("pizza") else {
        return Vec::new();
    };
    let Some(sub) = section
        .content
        .iter()
        .find(|s| s.title.as_deref() == Some("Build Your Own"))
    else {
        return Vec::new();
    };

    let mut ids = IdAllocator::default();
    let mut toppings = Vec::new();
    for group in &sub.items {
        match group.description.as_deref().filter(|d| !d.is_empty()) {
            Some(description) => {
                for token in description.split(',') {
                    let trimmed = token.trim();
                    let label = trimmed.strip_suffix('.').unwrap_or(trimmed);
                    if label.is_empty() {
                        continue;
                    }
                    toppings.push(Topping {
                        id: ids.allocate(label),
                        label: label.to_string(),
                        price: group.price.clone(),
                        description: None,
                    });
                }
            }
            None => toppings.push(Topping {
                id: ids.allocate(&group.name),
                label: group.name.clone(),
                price: group.price.clone(),
                description: None,
            }),
        }
    }
    toppings
}

/// Burger extras, derived 1:1 from the "Burger Toppings" sub-section of
/// the `mains` section.
pub fn burger_toppings(catalog: &Catalog) -> Vec<Topping> {
    let Some(section) = catalog.section("mains") else {
        return Vec::new();
    };
    let Some(sub) = section
        .content
        .iter()
        .find(|s| s.title.as_deref() == Some("Burger Toppings"))
    else {
        return Vec::new();
    };

    let mut ids = IdAllocator::default();
    sub.items
        .iter()
        .map(|item| Topping {
            id: ids.allocate(&item.name),
            label: item.name.clone(),
            price: item.price.clone(),
            description: item.description.clone(),
        })
        .collect()
}

/// Hands out label slugs, suffixing repeats so ids stay unique per list.
#[derive(Default)]
struct IdAllocator {
    seen: HashMap<String, usize>,
}

impl IdAllocator {
    fn allocate(&mut self, label: &str) -> String {
        let slug = slugify(label);
        let count = self.seen.entry(slug.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            slug
        } else {
            format!("{}-{}", slug, count)
        }
    }
}

fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for c in label.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("topping");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{MenuItem, MenuSection, SubSection};

    fn catalog_with_build_your_own(items: Vec<MenuItem>) -> Catalog {
        Catalog::new(vec![MenuSection {
            id: "pizza".to_string(),
            title: "Pizza".to_string(),
            subtitle: None,
            note: None,
            content: vec![SubSection::titled("Build Your Own", items)],
        }])
    }

    #[test]
    fn test_description_fans_out_per_token() {
        let catalog = catalog_with_build_your_own(vec![
            MenuItem::new("Herbs", "R10").with_description("Basil, Rocket, Parsley."),
        ]);
        let toppings = pizza_toppings(&catalog);
        let labels: Vec<&str> = toppings.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Basil", "Rocket", "Parsley"]);
        assert!(toppings.iter().all(|t| t.price == "R10"));
    }

    #[test]
    fn test_item_without_description_is_its_own_topping() {
        let catalog = catalog_with_build_your_own(vec![MenuItem::new("Extra Cheese", "R18")]);
        let toppings = pizza_toppings(&catalog);
        assert_eq!(toppings.len(), 1);
        assert_eq!(toppings[0].label, "Extra Cheese");
        assert_eq!(toppings[0].id, "extra-cheese");
    }

    #[test]
    fn test_empty_tokens_are_dropped() {
        let catalog = catalog_with_build_your_own(vec![
            MenuItem::new("Veg", "R15").with_description("Mushroom,, Olives, "),
        ]);
        let labels: Vec<String> = pizza_toppings(&catalog)
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, vec!["Mushroom", "Olives"]);
    }

    #[test]
    fn test_duplicate_labels_get_distinct_ids() {
        let catalog = catalog_with_build_your_own(vec![
            MenuItem::new("A", "R10").with_description("Bacon, Feta"),
            MenuItem::new("B", "R25").with_description("Bacon, Brie"),
        ]);
        let ids: Vec<String> = pizza_toppings(&catalog).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["bacon", "feta", "bacon-2", "brie"]);
    }

    #[test]
    fn test_missing_section_or_sub_yields_empty() {
        let empty = Catalog::new(Vec::new());
        assert!(pizza_toppings(&empty).is_empty());
        assert!(burger_toppings(&empty).is_empty());
    }

    #[test]
    fn test_burger_toppings_from_seed() {
        let catalog = Catalog::seed();
        let toppings = burger_toppings(&catalog);
        assert_eq!(toppings.len(), 4);
        assert_eq!(toppings[0].label, "Grilled mushroom");
        assert_eq!(toppings[0].price, "R15");
        // Descriptions carry through 1:1, unlike the pizza fan-out.
        assert!(toppings[1].description.is_some());
    }

    #[test]
    fn test_seed_pizza_toppings_reflect_catalog_edits() {
        let mut catalog = Catalog::seed();
        let before = pizza_toppings(&catalog).len();
        let sections = catalog.sections().to_vec();
        let mut edited = sections.clone();
        let pizza_idx = edited.iter().position(|s| s.id == "pizza").unwrap();
        let byo = edited[pizza_idx]
            .content
            .iter_mut()
            .find(|s| s.title.as_deref() == Some("Build Your Own"))
            .unwrap();
        byo.items.push(MenuItem::new("Truffle Oil", "R30"));
        catalog.replace(edited);
        assert_eq!(pizza_toppings(&catalog).len(), before + 1);
    }
}
