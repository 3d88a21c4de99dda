use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{MenuCategory, MenuCategoryFilter};

/// A dish on the restaurant menu
///
/// Field names follow the fixture document contract; unknown extra fields in a
/// fixture are ignored, missing required fields fail at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub category: MenuCategory,
    pub price: Decimal,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(rename = "isSpecial")]
    pub is_special: bool,
    #[serde(rename = "isVegetarian")]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub allergens: Vec<String>,
}

impl MenuItem {
    /// Check whether this item falls under the given category selector
    pub fn matches(&self, filter: MenuCategoryFilter) -> bool {
        match filter {
            MenuCategoryFilter::All => true,
            MenuCategoryFilter::Category(category) => self.category == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_item() -> MenuItem {
        MenuItem {
            id: 7,
            name: "Garlic Butter Prawns".to_string(),
            category: MenuCategory::Seafood,
            price: dec!(24.50),
            description: "Tiger prawns sautéed in garlic butter".to_string(),
            image_url: "prawns.jpg".to_string(),
            is_special: true,
            is_vegetarian: false,
            allergens: vec!["shellfish".to_string(), "dairy".to_string()],
        }
    }

    #[test]
    fn test_matches_category_filter() {
        let item = sample_item();

        assert!(item.matches(MenuCategoryFilter::All));
        assert!(item.matches(MenuCategoryFilter::Category(MenuCategory::Seafood)));
        assert!(!item.matches(MenuCategoryFilter::Category(MenuCategory::Desserts)));
    }

    #[test]
    fn test_deserialize_fixture_shape() {
        let json = r#"{
            "id": 1,
            "name": "Bruschetta Trio",
            "category": "Appetizers",
            "price": 9.75,
            "description": "Grilled ciabatta",
            "imageURL": "bruschetta.jpg",
            "isSpecial": false,
            "isVegetarian": true,
            "allergens": ["gluten", "dairy"],
            "chefNote": "ignored extra field"
        }"#;

        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, MenuCategory::Appetizers);
        assert_eq!(item.price, dec!(9.75));
        assert!(item.is_vegetarian);
        assert_eq!(item.allergens.len(), 2);
    }

    #[test]
    fn test_deserialize_missing_required_field_fails() {
        // No name
        let json = r#"{
            "id": 1,
            "category": "Soups",
            "price": 8.50,
            "description": "soup",
            "imageURL": "soup.jpg",
            "isSpecial": false,
            "isVegetarian": true,
            "allergens": []
        }"#;

        assert!(serde_json::from_str::<MenuItem>(json).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let item = sample_item();
        let json = serde_json::to_string(&item).unwrap();
        let back: MenuItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }
}
