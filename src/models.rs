//! Frontend Models
//!
//! Data structures matching the menu API payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Restaurant info (`GET /restaurant`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Menu category (`GET /categories`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

/// Menu item (`GET /menuItems`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub spicy_level: u8,
    #[serde(default)]
    pub preparation_time: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_from_api_json() {
        let json = r#"{
            "id": "7",
            "name": "Margherita",
            "description": "Tomato, mozzarella, basil",
            "price": 12.99,
            "category": "mains",
            "image": "/img/margherita.jpg",
            "dietary": ["vegetarian"],
            "popular": true,
            "spicyLevel": 0,
            "preparationTime": 15
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "7");
        assert_eq!(item.price, Decimal::new(1299, 2));
        assert_eq!(item.dietary, vec!["vegetarian".to_string()]);
        assert!(item.popular);
        assert_eq!(item.preparation_time, 15);
    }

    #[test]
    fn test_category_list_from_api_json() {
        let json = r#"[
            {"id": "desserts", "name": "Desserts", "icon": "🍰", "description": "Sweet"},
            {"id": "drinks", "name": "Drinks"}
        ]"#;
        let categories: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].icon, "");
    }
}
