//! Purchase-history API
//!
//! Endpoints under `/api/v1/secure/purchase-history`. Stats enrichment
//! goes through the batch endpoint: one call per visible page, never one
//! call per row.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;

use crate::backend::PurchaseHistoryBackend;
use crate::{ClientError, ClientResult, HttpClient};
use shared::models::{CustomerStats, PurchaseRecord};
use shared::query::{Envelope, Page, PageRequest};

const BASE: &str = "api/v1/secure/purchase-history";

/// Typed wrapper for the purchase-history endpoints
#[derive(Debug, Clone)]
pub struct PurchaseHistoryApi {
    http: HttpClient,
}

impl PurchaseHistoryApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /api/v1/secure/purchase-history/order/:orderId
    pub async fn by_order(&self, order_id: &str) -> ClientResult<PurchaseRecord> {
        let envelope: Envelope<PurchaseRecord> =
            self.http.get(&format!("{BASE}/order/{order_id}")).await?;
        envelope.into_data().map_err(ClientError::InvalidResponse)
    }
}

#[async_trait]
impl PurchaseHistoryBackend for PurchaseHistoryApi {
    async fn history_for(
        &self,
        customer_id: i64,
        request: &PageRequest,
    ) -> ClientResult<Page<PurchaseRecord>> {
        self.http
            .get_query(
                &format!("{BASE}/customer/{customer_id}/paginated"),
                &request.to_query_params(),
            )
            .await
    }

    async fn stats_for(&self, customer_ids: &[i64]) -> ClientResult<HashMap<i64, CustomerStats>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct BatchBody<'a> {
            customer_ids: &'a [i64],
        }
        let envelope: Envelope<HashMap<i64, CustomerStats>> = self
            .http
            .post(
                &format!("{BASE}/stats/batch"),
                &BatchBody {
                    customer_ids,
                },
            )
            .await?;
        envelope.into_data().map_err(ClientError::InvalidResponse)
    }
}
