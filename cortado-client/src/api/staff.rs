//! Staff API
//!
//! Endpoints under `/api/v1/secure/staff`.

use async_trait::async_trait;

use crate::backend::StaffBackend;
use crate::{ClientResult, HttpClient};
use shared::models::{Staff, StaffCreate, StaffUpdate};

const BASE: &str = "api/v1/secure/staff";

/// Typed wrapper for the staff endpoints
#[derive(Debug, Clone)]
pub struct StaffApi {
    http: HttpClient,
}

impl StaffApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /api/v1/secure/staff/employee/:employeeId
    pub async fn get_by_employee_id(&self, employee_id: &str) -> ClientResult<Staff> {
        self.http.get(&format!("{BASE}/employee/{employee_id}")).await
    }

    /// GET /api/v1/secure/staff/department/:department
    pub async fn list_by_department(&self, department: &str) -> ClientResult<Vec<Staff>> {
        self.http.get(&format!("{BASE}/department/{department}")).await
    }

    /// GET /api/v1/secure/staff/role/:role
    pub async fn list_by_role(&self, role: &str) -> ClientResult<Vec<Staff>> {
        self.http.get(&format!("{BASE}/role/{role}")).await
    }
}

#[async_trait]
impl StaffBackend for StaffApi {
    async fn list_staff(&self, active_only: bool) -> ClientResult<Vec<Staff>> {
        if active_only {
            self.http
                .get_query(BASE, &[("active".to_string(), "true".to_string())])
                .await
        } else {
            self.http.get(BASE).await
        }
    }

    async fn get_staff(&self, id: i64) -> ClientResult<Staff> {
        self.http.get(&format!("{BASE}/{id}")).await
    }

    async fn create_staff(&self, payload: StaffCreate) -> ClientResult<Staff> {
        self.http.post(BASE, &payload).await
    }

    async fn update_staff(&self, id: i64, payload: StaffUpdate) -> ClientResult<Staff> {
        self.http.put(&format!("{BASE}/{id}"), &payload).await
    }

    async fn deactivate_staff(&self, id: i64) -> ClientResult<()> {
        let _: serde_json::Value = self.http.put_empty(&format!("{BASE}/{id}/deactivate")).await?;
        Ok(())
    }
}
