//! Menu catalog model
//!
//! Menu items live in the backend; the analytics counters are read-only
//! mirrors and are never computed locally.

use serde::{Deserialize, Serialize};

/// Menu item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Coffee,
    Pastries,
    Drinks,
    Bundles,
    Vegetarian,
    Instant,
    Combo,
}

impl ItemType {
    /// Wire value for the `type` query param
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Coffee => "coffee",
            ItemType::Pastries => "pastries",
            ItemType::Drinks => "drinks",
            ItemType::Bundles => "bundles",
            ItemType::Vegetarian => "vegetarian",
            ItemType::Instant => "instant",
            ItemType::Combo => "combo",
        }
    }
}

/// A catalog menu item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub image: Option<String>,
    pub rating: f64,
    pub reviews_count: u32,
    pub weekly_buys: u32,
    pub monthly_buys: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub in_stock: bool,
    #[serde(default)]
    pub is_on_sale: bool,
    #[serde(default)]
    pub is_combo: bool,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub in_stock: bool,
}

/// Update payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub in_stock: Option<bool>,
    pub is_on_sale: Option<bool>,
}

/// Categorical filters accepted by the menu list endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuFilter {
    pub item_type: Option<ItemType>,
    pub promo_type: Option<String>,
    pub in_stock: Option<bool>,
    pub is_on_sale: Option<bool>,
    pub is_combo: Option<bool>,
}

impl MenuFilter {
    /// Render as backend query params
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(t) = self.item_type {
            params.push(("type".to_string(), t.as_str().to_string()));
        }
        if let Some(p) = &self.promo_type {
            params.push(("promoType".to_string(), p.clone()));
        }
        if let Some(v) = self.in_stock {
            params.push(("inStock".to_string(), v.to_string()));
        }
        if let Some(v) = self.is_on_sale {
            params.push(("isOnSale".to_string(), v.to_string()));
        }
        if let Some(v) = self.is_combo {
            params.push(("isCombo".to_string(), v.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_wire_format() {
        let json = r#"{
            "id": 7,
            "name": "Flat White",
            "description": "Double ristretto with silky milk",
            "price": 4.2,
            "type": "coffee",
            "image": "/images/flat-white.jpg",
            "rating": 4.7,
            "reviewsCount": 120,
            "weeklyBuys": 85,
            "monthlyBuys": 340,
            "tags": ["espresso"],
            "inStock": true
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::Coffee);
        assert_eq!(item.weekly_buys, 85);
        assert!(!item.is_on_sale);
    }

    #[test]
    fn test_filter_params_only_set_fields() {
        let filter = MenuFilter {
            item_type: Some(ItemType::Pastries),
            in_stock: Some(true),
            ..Default::default()
        };
        let params = filter.to_query_params();
        assert_eq!(
            params,
            vec![
                ("type".to_string(), "pastries".to_string()),
                ("inStock".to_string(), "true".to_string()),
            ]
        );
    }
}
