use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::models::{GalleryItem, MenuItem, Special, StoreError, StoreResult, Testimonial};

pub const MENU_DOCUMENT: &str = "menu.json";
pub const SPECIALS_DOCUMENT: &str = "specials.json";
pub const GALLERY_DOCUMENT: &str = "gallery.json";
pub const TESTIMONIALS_DOCUMENT: &str = "testimonials.json";

// Each fixture document wraps a single named array of records.
#[derive(Debug, Deserialize)]
struct MenuDocument {
    #[serde(rename = "menuItems")]
    menu_items: Vec<MenuItem>,
}

#[derive(Debug, Deserialize)]
struct SpecialsDocument {
    specials: Vec<Special>,
}

#[derive(Debug, Deserialize)]
struct GalleryDocument {
    gallery: Vec<GalleryItem>,
}

#[derive(Debug, Deserialize)]
struct TestimonialsDocument {
    testimonials: Vec<Testimonial>,
}

/// The four read-only fixture collections, loaded once at startup
///
/// The store is constructed explicitly and handed to the repositories that
/// read from it; nothing here is a process-wide singleton. Collections are
/// immutable for the lifetime of the process, so readers share it via `Arc`
/// without locking.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    menu: Vec<MenuItem>,
    specials: Vec<Special>,
    gallery: Vec<GalleryItem>,
    testimonials: Vec<Testimonial>,
}

impl FixtureStore {
    /// Load the fixture documents bundled into the binary
    pub fn bundled() -> StoreResult<Self> {
        Self::from_documents(
            include_str!("../../fixtures/menu.json"),
            include_str!("../../fixtures/specials.json"),
            include_str!("../../fixtures/gallery.json"),
            include_str!("../../fixtures/testimonials.json"),
        )
    }

    /// Load the four fixture documents from a directory on disk
    pub fn load_from_dir(dir: &Path) -> StoreResult<Self> {
        let read = |name: &str| {
            fs::read_to_string(dir.join(name)).map_err(|source| StoreError::DocumentUnavailable {
                document: name.to_string(),
                source,
            })
        };

        Self::from_documents(
            &read(MENU_DOCUMENT)?,
            &read(SPECIALS_DOCUMENT)?,
            &read(GALLERY_DOCUMENT)?,
            &read(TESTIMONIALS_DOCUMENT)?,
        )
    }

    /// Parse the four raw JSON documents into a validated store
    pub fn from_documents(
        menu_json: &str,
        specials_json: &str,
        gallery_json: &str,
        testimonials_json: &str,
    ) -> StoreResult<Self> {
        let menu: MenuDocument = parse_document(MENU_DOCUMENT, menu_json)?;
        let specials: SpecialsDocument = parse_document(SPECIALS_DOCUMENT, specials_json)?;
        let gallery: GalleryDocument = parse_document(GALLERY_DOCUMENT, gallery_json)?;
        let testimonials: TestimonialsDocument =
            parse_document(TESTIMONIALS_DOCUMENT, testimonials_json)?;

        Self::from_collections(
            menu.menu_items,
            specials.specials,
            gallery.gallery,
            testimonials.testimonials,
        )
    }

    /// Build a store from already-parsed collections, running the same
    /// load-time contract checks as the document loaders
    pub fn from_collections(
        menu: Vec<MenuItem>,
        specials: Vec<Special>,
        gallery: Vec<GalleryItem>,
        testimonials: Vec<Testimonial>,
    ) -> StoreResult<Self> {
        let store = Self {
            menu,
            specials,
            gallery,
            testimonials,
        };
        store.check_contract()?;

        info!(
            menu_items = store.menu.len(),
            specials = store.specials.len(),
            gallery_items = store.gallery.len(),
            testimonials = store.testimonials.len(),
            "Fixture store loaded"
        );

        Ok(store)
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn specials(&self) -> &[Special] {
        &self.specials
    }

    pub fn gallery_items(&self) -> &[GalleryItem] {
        &self.gallery
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    fn check_contract(&self) -> StoreResult<()> {
        check_unique_ids(MENU_DOCUMENT, self.menu.iter().map(|item| item.id))?;
        check_unique_ids(SPECIALS_DOCUMENT, self.specials.iter().map(|s| s.id))?;
        check_unique_ids(GALLERY_DOCUMENT, self.gallery.iter().map(|item| item.id))?;
        check_unique_ids(TESTIMONIALS_DOCUMENT, self.testimonials.iter().map(|t| t.id))?;

        for item in &self.menu {
            if item.price.is_sign_negative() {
                return Err(contract_violation(
                    MENU_DOCUMENT,
                    format!("negative price on item {}", item.id),
                ));
            }
        }

        for special in &self.specials {
            if special.price.is_sign_negative() {
                return Err(contract_violation(
                    SPECIALS_DOCUMENT,
                    format!("negative price on special {}", special.id),
                ));
            }
            if special.available_days.is_empty() {
                return Err(contract_violation(
                    SPECIALS_DOCUMENT,
                    format!("availableDays must not be empty on special {}", special.id),
                ));
            }
        }

        Ok(())
    }
}

fn parse_document<'a, T: Deserialize<'a>>(document: &str, json: &'a str) -> StoreResult<T> {
    serde_json::from_str(json).map_err(|source| StoreError::Malformed {
        document: document.to_string(),
        source,
    })
}

fn check_unique_ids(document: &str, ids: impl Iterator<Item = u32>) -> StoreResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(contract_violation(document, format!("duplicate id {}", id)));
        }
    }
    Ok(())
}

fn contract_violation(document: &str, message: String) -> StoreError {
    StoreError::Contract {
        document: document.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MenuCategory, Weekday};
    use rust_decimal_macros::dec;

    fn menu_item(id: u32) -> MenuItem {
        MenuItem {
            id,
            name: format!("Dish {}", id),
            category: MenuCategory::Appetizers,
            price: dec!(10.00),
            description: "A dish".to_string(),
            image_url: "dish.jpg".to_string(),
            is_special: false,
            is_vegetarian: false,
            allergens: vec![],
        }
    }

    fn special(id: u32, days: Vec<Weekday>) -> Special {
        Special {
            id,
            name: format!("Special {}", id),
            short_description: "short".to_string(),
            full_description: "full".to_string(),
            price: dec!(40.00),
            image_url: "special.jpg".to_string(),
            is_popular: false,
            available_days: days,
        }
    }

    #[test]
    fn test_bundled_fixtures_load() {
        let store = FixtureStore::bundled().unwrap();

        assert!(!store.menu_items().is_empty());
        assert!(!store.specials().is_empty());
        assert!(!store.gallery_items().is_empty());
        assert!(!store.testimonials().is_empty());
    }

    #[test]
    fn test_duplicate_menu_id_rejected() {
        let result =
            FixtureStore::from_collections(vec![menu_item(1), menu_item(1)], vec![], vec![], vec![]);

        match result {
            Err(StoreError::Contract { document, message }) => {
                assert_eq!(document, MENU_DOCUMENT);
                assert!(message.contains("duplicate id 1"));
            }
            other => panic!("Expected contract violation, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_available_days_rejected() {
        let result = FixtureStore::from_collections(
            vec![],
            vec![special(1, vec![])],
            vec![],
            vec![],
        );

        match result {
            Err(StoreError::Contract { document, message }) => {
                assert_eq!(document, SPECIALS_DOCUMENT);
                assert!(message.contains("availableDays"));
            }
            other => panic!("Expected contract violation, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_document_rejected() {
        let result = FixtureStore::from_documents("not json", "{}", "{}", "{}");

        match result {
            Err(StoreError::Malformed { document, .. }) => {
                assert_eq!(document, MENU_DOCUMENT);
            }
            other => panic!("Expected malformed document error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_field_is_load_time_violation() {
        // Document shape is right but a record is missing its name
        let menu_json = r#"{"menuItems": [{
            "id": 1,
            "category": "Soups",
            "price": 8.5,
            "description": "soup",
            "imageURL": "soup.jpg",
            "isSpecial": false,
            "isVegetarian": true,
            "allergens": []
        }]}"#;

        let result = FixtureStore::from_documents(
            menu_json,
            r#"{"specials": []}"#,
            r#"{"gallery": []}"#,
            r#"{"testimonials": []}"#,
        );

        assert!(matches!(result, Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_load_from_missing_dir_is_unavailable() {
        let result = FixtureStore::load_from_dir(Path::new("/nonexistent/fixtures"));

        match result {
            Err(StoreError::DocumentUnavailable { document, .. }) => {
                assert_eq!(document, MENU_DOCUMENT);
            }
            other => panic!("Expected unavailable document error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_collections_accepted() {
        let store = FixtureStore::from_collections(
            vec![menu_item(1), menu_item(2)],
            vec![special(1, vec![Weekday::Friday])],
            vec![],
            vec![],
        )
        .unwrap();

        assert_eq!(store.menu_items().len(), 2);
        assert_eq!(store.specials()[0].available_days, vec![Weekday::Friday]);
    }
}
