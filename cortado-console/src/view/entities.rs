//! List-view wiring for the domain models
//!
//! Which fields each entity exposes to search, filtering, and sorting,
//! and how entities identify themselves to edit sessions. Filter values
//! reuse the serde wire names so criteria built from UI state and from
//! query params agree.

use serde::Serialize;

use super::engine::{Listable, SortValue};
use crate::session::Identify;
use shared::models::{
    Customer, Employee, Equipment, KitchenOrder, MenuItem, Order, Priority, Reservation, Staff,
    Supply,
};

/// Wire name of an enum value ("low-stock", "dine-in", ...)
fn wire<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_value(value).ok()? {
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn priority_rank(priority: Priority) -> f64 {
    match priority {
        Priority::Low => 0.0,
        Priority::Normal => 1.0,
        Priority::High => 2.0,
        Priority::Urgent => 3.0,
    }
}

// ── Orders ──────────────────────────────────────────────────────────

impl Listable for Order {
    fn search_text(&self) -> Vec<String> {
        let mut fields = vec![self.id.clone(), self.customer_name.clone()];
        if let Some(phone) = &self.customer_phone {
            fields.push(phone.clone());
        }
        fields
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => wire(&self.status),
            "kind" => wire(&self.kind),
            "payment" => wire(&self.payment),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "placedAt" => Some(SortValue::Text(self.placed_at.to_string())),
            "total" => Some(SortValue::Number(self.total)),
            "customerName" => Some(SortValue::Text(self.customer_name.clone())),
            _ => None,
        }
    }
}

impl Identify for Order {
    fn ident(&self) -> String {
        self.id.clone()
    }
}

impl Listable for KitchenOrder {
    fn search_text(&self) -> Vec<String> {
        let mut fields = vec![self.id.clone(), self.customer_name.clone()];
        if let Some(table) = &self.table_number {
            fields.push(table.clone());
        }
        fields
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => wire(&self.status),
            "priority" => wire(&self.priority),
            "kind" => wire(&self.kind),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "placedAt" => Some(SortValue::Text(self.placed_at.to_string())),
            "priority" => Some(SortValue::Number(priority_rank(self.priority))),
            "customerName" => Some(SortValue::Text(self.customer_name.clone())),
            _ => None,
        }
    }
}

impl Identify for KitchenOrder {
    fn ident(&self) -> String {
        self.id.clone()
    }
}

// ── Reservations ────────────────────────────────────────────────────

impl Listable for Reservation {
    fn search_text(&self) -> Vec<String> {
        let mut fields = vec![self.id.clone(), self.customer_name.clone()];
        if let Some(phone) = &self.customer_phone {
            fields.push(phone.clone());
        }
        fields
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => wire(&self.status),
            "date" => Some(self.date.to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "date" => Some(SortValue::Text(format!("{} {}", self.date, self.time))),
            "partySize" => Some(SortValue::Number(self.party_size as f64)),
            "customerName" => Some(SortValue::Text(self.customer_name.clone())),
            _ => None,
        }
    }
}

impl Identify for Reservation {
    fn ident(&self) -> String {
        self.id.clone()
    }
}

// ── Inventory ───────────────────────────────────────────────────────

impl Listable for Supply {
    fn search_text(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "category" => wire(&self.category),
            "status" => wire(&self.status),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::Text(self.name.clone())),
            "currentStock" => Some(SortValue::Number(self.current_stock)),
            _ => None,
        }
    }
}

impl Identify for Supply {
    fn ident(&self) -> String {
        self.id.clone()
    }
}

impl Listable for Equipment {
    fn search_text(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone(), self.location.clone()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "kind" => wire(&self.kind),
            "status" => wire(&self.status),
            "location" => Some(self.location.clone()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::Text(self.name.clone())),
            "lastMaintenance" => self
                .last_maintenance
                .map(|d| SortValue::Text(d.to_string())),
            _ => None,
        }
    }
}

impl Identify for Equipment {
    fn ident(&self) -> String {
        self.id.clone()
    }
}

// ── People ──────────────────────────────────────────────────────────

impl Listable for Staff {
    fn search_text(&self) -> Vec<String> {
        let mut fields = vec![self.employee_id.clone(), self.full_name()];
        if let Some(email) = &self.email {
            fields.push(email.clone());
        }
        if let Some(phone) = &self.phone {
            fields.push(phone.clone());
        }
        fields
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "department" => Some(self.department.clone()),
            "role" => Some(self.role.clone()),
            "status" => Some(if self.is_active { "active" } else { "inactive" }.to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::Text(self.full_name())),
            "hireDate" => self.hire_date.map(|d| SortValue::Text(d.to_string())),
            "hourlyRate" => self.hourly_rate.map(SortValue::Number),
            _ => None,
        }
    }
}

impl Identify for Staff {
    fn ident(&self) -> String {
        self.id.to_string()
    }
}

impl Listable for Customer {
    fn search_text(&self) -> Vec<String> {
        let mut fields = vec![self.name.clone()];
        if let Some(email) = &self.email {
            fields.push(email.clone());
        }
        if let Some(phone) = &self.phone {
            fields.push(phone.clone());
        }
        fields
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(if self.is_active { "active" } else { "inactive" }.to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::Text(self.name.clone())),
            "totalSpent" => Some(SortValue::Number(self.total_spent)),
            "totalOrders" => Some(SortValue::Number(self.total_orders as f64)),
            "joinDate" => self.join_date.map(|d| SortValue::Text(d.to_string())),
            _ => None,
        }
    }
}

impl Identify for Customer {
    fn ident(&self) -> String {
        self.id.to_string()
    }
}

impl Listable for Employee {
    fn search_text(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone(), self.position.clone()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "paymentStatus" => wire(&self.payment_status),
            "reviewStatus" => wire(&self.review_status),
            "position" => Some(self.position.clone()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::Text(self.name.clone())),
            "netPay" => Some(SortValue::Number(self.net_pay)),
            "hoursWorked" => Some(SortValue::Number(self.hours_worked)),
            "performanceScore" => Some(SortValue::Number(self.performance_score)),
            _ => None,
        }
    }
}

impl Identify for Employee {
    fn ident(&self) -> String {
        self.id.clone()
    }
}

impl Identify for MenuItem {
    fn ident(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{StockReference, SupplyCategory};

    #[test]
    fn test_wire_names_match_serde_renames() {
        let supply = Supply::new(
            "KSP-001",
            "Oat Milk",
            SupplyCategory::Milk,
            "L",
            2.0,
            StockReference::Minimum(6.0),
        );
        assert_eq!(supply.filter_value("status").as_deref(), Some("low-stock"));
        assert_eq!(supply.filter_value("category").as_deref(), Some("milk"));
    }
}
