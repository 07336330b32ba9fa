//! Menu API
//!
//! Catalog endpoints under `/api/v1/secure/menu`. Listing is
//! server-delegated: the backend does the filtering, sorting, and
//! slicing and its totals are authoritative.

use async_trait::async_trait;
use serde::Serialize;

use crate::backend::MenuBackend;
use crate::{ClientResult, HttpClient};
use shared::models::{MenuFilter, MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::query::{Page, PageRequest};

const BASE: &str = "api/v1/secure/menu";

/// Typed wrapper for the menu endpoints
#[derive(Debug, Clone)]
pub struct MenuApi {
    http: HttpClient,
}

impl MenuApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /api/v1/secure/menu/by-type/:type
    pub async fn list_by_type(&self, item_type: &str) -> ClientResult<Vec<MenuItem>> {
        self.http.get(&format!("{BASE}/by-type/{item_type}")).await
    }

    /// GET /api/v1/secure/menu/analytics/top-bought
    pub async fn top_bought(&self, limit: u32) -> ClientResult<Vec<MenuItem>> {
        self.http
            .get_query(
                &format!("{BASE}/analytics/top-bought"),
                &[("limit".to_string(), limit.to_string())],
            )
            .await
    }
}

#[async_trait]
impl MenuBackend for MenuApi {
    async fn list_menu_items(
        &self,
        filter: &MenuFilter,
        request: &PageRequest,
    ) -> ClientResult<Page<MenuItem>> {
        let mut params = request.to_query_params();
        params.extend(filter.to_query_params());
        self.http.get_query(BASE, &params).await
    }

    async fn get_menu_item(&self, id: i64) -> ClientResult<MenuItem> {
        self.http.get(&format!("{BASE}/{id}")).await
    }

    async fn create_menu_item(&self, payload: MenuItemCreate) -> ClientResult<MenuItem> {
        self.http.post(BASE, &payload).await
    }

    async fn update_menu_item(&self, id: i64, payload: MenuItemUpdate) -> ClientResult<MenuItem> {
        self.http.put(&format!("{BASE}/{id}"), &payload).await
    }

    async fn delete_menu_item(&self, id: i64) -> ClientResult<()> {
        let _: serde_json::Value = self.http.delete(&format!("{BASE}/{id}")).await?;
        Ok(())
    }

    async fn set_in_stock(&self, id: i64, in_stock: bool) -> ClientResult<MenuItem> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct StockBody {
            in_stock: bool,
        }
        self.http
            .patch(&format!("{BASE}/{id}/stock"), &StockBody { in_stock })
            .await
    }
}
