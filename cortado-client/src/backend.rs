//! Backend traits
//!
//! Seams between the console and the backend API. The typed wrappers in
//! [`crate::api`] implement them over HTTP; console tests implement them
//! in memory.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::ClientResult;
use shared::models::{
    Customer, CustomerCreate, CustomerStats, CustomerUpdate, MenuFilter, MenuItem, MenuItemCreate,
    MenuItemUpdate, PurchaseRecord, Staff, StaffCreate, StaffUpdate,
};
use shared::query::{Page, PageRequest};

/// Staff directory operations
#[async_trait]
pub trait StaffBackend: Send + Sync {
    /// List staff, optionally only active records
    async fn list_staff(&self, active_only: bool) -> ClientResult<Vec<Staff>>;

    async fn get_staff(&self, id: i64) -> ClientResult<Staff>;

    async fn create_staff(&self, payload: StaffCreate) -> ClientResult<Staff>;

    async fn update_staff(&self, id: i64, payload: StaffUpdate) -> ClientResult<Staff>;

    /// Soft delete: flips `is_active`, the record stays
    async fn deactivate_staff(&self, id: i64) -> ClientResult<()>;
}

/// Customer directory operations
#[async_trait]
pub trait CustomerBackend: Send + Sync {
    async fn list_customers(&self, active_only: bool) -> ClientResult<Vec<Customer>>;

    async fn get_customer(&self, id: i64) -> ClientResult<Customer>;

    async fn create_customer(&self, payload: CustomerCreate) -> ClientResult<Customer>;

    async fn update_customer(&self, id: i64, payload: CustomerUpdate) -> ClientResult<Customer>;

    /// Soft delete: flips `is_active`, the record stays
    async fn deactivate_customer(&self, id: i64) -> ClientResult<()>;
}

/// Menu catalog operations (server-delegated paging)
#[async_trait]
pub trait MenuBackend: Send + Sync {
    /// One page of the catalog; the returned totals are authoritative
    async fn list_menu_items(
        &self,
        filter: &MenuFilter,
        request: &PageRequest,
    ) -> ClientResult<Page<MenuItem>>;

    async fn get_menu_item(&self, id: i64) -> ClientResult<MenuItem>;

    async fn create_menu_item(&self, payload: MenuItemCreate) -> ClientResult<MenuItem>;

    async fn update_menu_item(&self, id: i64, payload: MenuItemUpdate) -> ClientResult<MenuItem>;

    async fn delete_menu_item(&self, id: i64) -> ClientResult<()>;

    async fn set_in_stock(&self, id: i64, in_stock: bool) -> ClientResult<MenuItem>;
}

/// Purchase-history operations
#[async_trait]
pub trait PurchaseHistoryBackend: Send + Sync {
    /// Paged purchase history for one customer
    async fn history_for(
        &self,
        customer_id: i64,
        request: &PageRequest,
    ) -> ClientResult<Page<PurchaseRecord>>;

    /// Aggregate stats for a batch of customers in one call. Customers
    /// the backend has no data for are simply absent from the map.
    async fn stats_for(&self, customer_ids: &[i64]) -> ClientResult<HashMap<i64, CustomerStats>>;
}
