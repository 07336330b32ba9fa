//! Customer model
//!
//! Customers are backend entities. `total_orders` / `total_spent` are
//! enriched aggregates filled in from the purchase-history service; they
//! stay zero until enrichment runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub loyalty_points: i64,
    pub is_active: bool,
    pub notes: Option<String>,
    /// Enriched aggregate, zero until stats are fetched
    #[serde(default)]
    pub total_orders: u64,
    /// Enriched aggregate, zero until stats are fetched
    #[serde(default)]
    pub total_spent: f64,
}

impl Customer {
    /// Apply fetched stats to the enriched fields
    pub fn apply_stats(&mut self, stats: &CustomerStats) {
        self.total_orders = stats.total_orders;
        self.total_spent = stats.total_spent;
    }
}

/// Aggregate purchase stats for one customer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    pub total_orders: u64,
    pub total_spent: f64,
    pub average_order_value: f64,
    pub last_order_date: Option<NaiveDate>,
}

/// One purchase-history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub id: i64,
    pub order_id: String,
    pub customer_id: i64,
    pub total_amount: f64,
    pub items_count: u32,
    pub order_date: NaiveDate,
    pub status: String,
    pub payment_method: String,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// Update payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrichment_defaults_to_zero() {
        let json = r#"{
            "id": 3,
            "name": "John Doe",
            "email": "john@example.com",
            "phone": "+1234567890",
            "joinDate": "2023-05-12",
            "loyaltyPoints": 120,
            "isActive": true,
            "notes": null
        }"#;
        let mut customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.total_orders, 0);

        customer.apply_stats(&CustomerStats {
            total_orders: 45,
            total_spent: 675.5,
            average_order_value: 15.01,
            last_order_date: Some("2024-08-18".parse().unwrap()),
        });
        assert_eq!(customer.total_orders, 45);
        assert!((customer.total_spent - 675.5).abs() < f64::EPSILON);
    }
}
