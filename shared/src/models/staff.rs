//! Staff Model
//!
//! Staff records live in the backend; deactivation is a soft delete
//! (the `is_active` flag flips, nothing is removed).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: i64,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: String,
    pub department: String,
    pub role: String,
    pub hire_date: Option<NaiveDate>,
    pub hourly_rate: Option<f64>,
    pub is_active: bool,
    pub notes: Option<String>,
}

impl Staff {
    /// Display name for list views
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreate {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: String,
    pub department: String,
    pub role: String,
    pub hire_date: Option<NaiveDate>,
    pub hourly_rate: Option<f64>,
}

/// Update staff payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub hourly_rate: Option<f64>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}
