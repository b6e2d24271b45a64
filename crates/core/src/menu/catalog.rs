//! # Catalog Store
//!
//! The ordered list of menu sections, held entirely in memory and replaced
//! wholesale (or along one item path) on every admin edit. Readers get
//! clones; nothing downstream mutates the store directly.

use anyhow::{bail, Result};

use super::types::{ItemPath, MenuItem, MenuSection};

/// In-memory menu catalog.
///
/// Edits are accepted as-is: an admin may save an empty name or a malformed
/// price string, and both round-trip unchanged.
#[derive(Debug, Clone)]
pub struct Catalog {
    sections: Vec<MenuSection>,
}

impl Catalog {
    /// Build a catalog from an explicit section list.
    pub fn new(sections: Vec<MenuSection>) -> Self {
        Self { sections }
    }

    /// The built-in Lucy Blu menu used at process start.
    pub fn seed() -> Self {
        Self::new(super::seed::default_menu())
    }

    /// All sections, in display order.
    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    /// Look up a section by its id.
    pub fn section(&self, id: &str) -> Option<&MenuSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Replace the whole catalog with an edited copy.
    pub fn replace(&mut self, sections: Vec<MenuSection>) {
        tracing::info!(sections = sections.len(), "Catalog replaced");
        self.sections = sections;
    }

    /// Fetch the item at `path`, if the path is in range.
    pub fn item(&self, path: ItemPath) -> Option<&MenuItem> {
        self.sections
            .get(path.section)?
            .content
            .get(path.sub)?
            .items
            .get(path.item)
    }

    /// Overwrite a single item addressed by `(section, sub, item)` indices.
    ///
    /// Only the path to the edited item is re-allocated; every untouched
    /// section and sub-section keeps its prior contents verbatim.
    pub fn update_item(&mut self, path: ItemPath, item: MenuItem) -> Result<()> {
        let Some(section) = self.sections.get_mut(path.section) else {
            bail!("No section at index {}", path.section);
        };
        let section_id = section.id.clone();
        let Some(sub) = section.content.get_mut(path.sub) else {
            bail!("No sub-section at index {} in '{}'", path.sub, section_id);
        };
        let Some(slot) = sub.items.get_mut(path.item) else {
            bail!("No item at index {} in '{}'", path.item, section_id);
        };

        tracing::info!(section = %section_id, item = %item.name, "Menu item updated");
        *slot = item;
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::types::SubSection;

    fn tiny_catalog() -> Catalog {
        Catalog::new(vec![MenuSection {
            id: "drinks".to_string(),
            title: "Drinks".to_string(),
            subtitle: None,
            note: None,
            content: vec![SubSection::untitled(vec![
                MenuItem::new("Americano", "R35"),
                MenuItem::new("Tea", "R30"),
            ])],
        }])
    }

    #[test]
    fn test_update_item_in_place() {
        let mut catalog = tiny_catalog();
        let path = ItemPath {
            section: 0,
            sub: 0,
            item: 1,
        };
        let edited = MenuItem::new("Rooibos Tea", "R32");
        catalog.update_item(path, edited).unwrap();

        assert_eq!(catalog.item(path).unwrap().name, "Rooibos Tea");
        // The sibling item is untouched.
        assert_eq!(
            catalog
                .item(ItemPath {
                    section: 0,
                    sub: 0,
                    item: 0
                })
                .unwrap()
                .name,
            "Americano"
        );
    }

    #[test]
    fn test_update_item_rejects_out_of_range_path() {
        let mut catalog = tiny_catalog();
        let path = ItemPath {
            section: 3,
            sub: 0,
            item: 0,
        };
        assert!(catalog.update_item(path, MenuItem::new("x", "R1")).is_err());
    }

    #[test]
    fn test_unvalidated_edits_round_trip() {
        let mut catalog = tiny_catalog();
        let path = ItemPath {
            section: 0,
            sub: 0,
            item: 0,
        };
        catalog.update_item(path, MenuItem::new("", "not a price")).unwrap();
        let saved = catalog.item(path).unwrap();
        assert_eq!(saved.name, "");
        assert_eq!(saved.price, "not a price");
    }

    #[test]
    fn test_seed_has_expected_sections() {
        let catalog = Catalog::seed();
        for id in ["breakfast", "mains", "pizza", "desserts", "drinks", "bar", "wine"] {
            assert!(catalog.section(id).is_some(), "missing section {id}");
        }
    }
}
