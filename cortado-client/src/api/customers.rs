//! Customer API
//!
//! Endpoints under `/api/v1/secure/customers`. The backend wraps
//! customer payloads in a `{success, data}` envelope.

use async_trait::async_trait;

use crate::backend::CustomerBackend;
use crate::{ClientError, ClientResult, HttpClient};
use shared::models::{Customer, CustomerCreate, CustomerStats, CustomerUpdate};
use shared::query::Envelope;

const BASE: &str = "api/v1/secure/customers";

/// Typed wrapper for the customer endpoints
#[derive(Debug, Clone)]
pub struct CustomerApi {
    http: HttpClient,
}

impl CustomerApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /api/v1/secure/customers/:id/stats — single-customer
    /// aggregate. Prefer the batched call on
    /// [`crate::backend::PurchaseHistoryBackend`] when enriching a page.
    pub async fn stats(&self, id: i64) -> ClientResult<CustomerStats> {
        let envelope: Envelope<CustomerStats> =
            self.http.get(&format!("{BASE}/{id}/stats")).await?;
        envelope.into_data().map_err(ClientError::InvalidResponse)
    }

    /// PUT /api/v1/secure/customers/:id/activate
    pub async fn activate(&self, id: i64) -> ClientResult<()> {
        let envelope: Envelope<serde_json::Value> =
            self.http.put_empty(&format!("{BASE}/{id}/activate")).await?;
        envelope
            .into_data()
            .map(|_| ())
            .map_err(ClientError::InvalidResponse)
    }
}

#[async_trait]
impl CustomerBackend for CustomerApi {
    async fn list_customers(&self, active_only: bool) -> ClientResult<Vec<Customer>> {
        let path = if active_only {
            format!("{BASE}/active")
        } else {
            BASE.to_string()
        };
        let envelope: Envelope<Vec<Customer>> = self.http.get(&path).await?;
        envelope.into_data().map_err(ClientError::InvalidResponse)
    }

    async fn get_customer(&self, id: i64) -> ClientResult<Customer> {
        let envelope: Envelope<Customer> = self.http.get(&format!("{BASE}/{id}")).await?;
        envelope.into_data().map_err(ClientError::InvalidResponse)
    }

    async fn create_customer(&self, payload: CustomerCreate) -> ClientResult<Customer> {
        let envelope: Envelope<Customer> = self.http.post(BASE, &payload).await?;
        envelope.into_data().map_err(ClientError::InvalidResponse)
    }

    async fn update_customer(&self, id: i64, payload: CustomerUpdate) -> ClientResult<Customer> {
        let envelope: Envelope<Customer> =
            self.http.put(&format!("{BASE}/{id}"), &payload).await?;
        envelope.into_data().map_err(ClientError::InvalidResponse)
    }

    async fn deactivate_customer(&self, id: i64) -> ClientResult<()> {
        let envelope: Envelope<serde_json::Value> =
            self.http.put_empty(&format!("{BASE}/{id}/deactivate")).await?;
        envelope
            .into_data()
            .map(|_| ())
            .map_err(ClientError::InvalidResponse)
    }
}
