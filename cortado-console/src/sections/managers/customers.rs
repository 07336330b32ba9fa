//! Customer directory
//!
//! Backend-backed customer profiles with client-side list paging.
//! Purchase stats are enriched per visible page through one batched
//! call; customers missing from the batch keep zero stats rather than
//! failing the page.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{ConsoleError, ConsoleResult};
use crate::notify::Notifier;
use crate::session::EditSession;
use crate::view::ListView;
use cortado_client::{CustomerBackend, PurchaseHistoryBackend};
use shared::Capabilities;
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

/// Customer management screen state
pub struct CustomerSection {
    caps: Capabilities,
    notifier: Arc<dyn Notifier>,
    customers: Arc<dyn CustomerBackend>,
    history: Arc<dyn PurchaseHistoryBackend>,
    pub list: ListView<Customer>,
    editing: Option<EditSession<Customer>>,
}

impl CustomerSection {
    pub fn new(
        caps: Capabilities,
        notifier: Arc<dyn Notifier>,
        customers: Arc<dyn CustomerBackend>,
        history: Arc<dyn PurchaseHistoryBackend>,
        page_size: u32,
    ) -> Self {
        Self {
            caps,
            notifier,
            customers,
            history,
            list: ListView::new(page_size),
            editing: None,
        }
    }

    /// Reload the directory. On failure the last-known list stays on
    /// screen and the failure is surfaced as a notice.
    pub async fn refresh(&mut self, active_only: bool) {
        match self.customers.list_customers(active_only).await {
            Ok(customers) => {
                info!(count = customers.len(), "Customer directory loaded");
                self.list.set_items(customers);
            }
            Err(e) => {
                warn!(error = %e, "Customer directory refresh failed");
                self.notifier
                    .error("Could not load customers; showing last known data");
            }
        }
    }

    /// Fill purchase stats for the customers on the visible page with a
    /// single batched call. Customers absent from the response keep
    /// zero stats (partial success, logged, never fatal).
    pub async fn enrich_visible(&mut self) -> ConsoleResult<()> {
        let ids: Vec<i64> = self.list.visible().items.iter().map(|c| c.id).collect();
        if ids.is_empty() {
            return Ok(());
        }
        let stats = self.history.stats_for(&ids).await?;

        let missing = ids.iter().filter(|id| !stats.contains_key(id)).count();
        if missing > 0 {
            warn!(missing, "Stats batch left customers without data; defaulting to zero");
            self.notifier
                .warn(&format!("Purchase stats unavailable for {missing} customer(s)"));
        }

        for customer in self.list.items_mut() {
            if let Some(s) = stats.get(&customer.id) {
                customer.apply_stats(s);
            }
        }
        Ok(())
    }

    /// Register a new customer
    pub async fn create(&mut self, payload: CustomerCreate) -> ConsoleResult<Customer> {
        if !self.caps.manage_customers {
            return Err(ConsoleError::Forbidden("create customer"));
        }
        let created = self.customers.create_customer(payload).await?;
        self.list.push(created.clone());
        Ok(created)
    }

    /// Open the edit dialog for a customer
    pub fn begin_edit(&mut self, id: i64) -> ConsoleResult<()> {
        let customer = self
            .list
            .items()
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ConsoleError::NotFound(format!("customer {id}")))?;
        self.editing = Some(EditSession::open(customer));
        Ok(())
    }

    pub fn edit_draft(&mut self, f: impl FnOnce(&mut Customer)) -> bool {
        self.editing.as_mut().is_some_and(|session| session.edit(f))
    }

    pub fn draft(&self) -> Option<&Customer> {
        self.editing.as_ref().and_then(EditSession::draft)
    }

    pub fn dialog_open(&self) -> bool {
        self.editing.as_ref().is_some_and(EditSession::is_open)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the open draft through the backend; close only on success
    pub async fn save_edit(&mut self) -> ConsoleResult<Customer> {
        if !self.caps.manage_customers {
            return Err(ConsoleError::Forbidden("update customer"));
        }
        let session = self
            .editing
            .as_mut()
            .ok_or_else(|| ConsoleError::Validation("no customer edit in progress".into()))?;

        let backend = Arc::clone(&self.customers);
        let outcome = session
            .save_with(|draft| async move {
                let payload = CustomerUpdate {
                    name: Some(draft.name.clone()),
                    email: draft.email.clone(),
                    phone: draft.phone.clone(),
                    notes: draft.notes.clone(),
                    is_active: Some(draft.is_active),
                };
                backend.update_customer(draft.id, payload).await
            })
            .await;

        match outcome {
            Ok(saved) => {
                if let Some(slot) = self.list.items_mut().iter_mut().find(|c| c.id == saved.id) {
                    // Keep enriched aggregates; the update response
                    // carries profile fields only
                    let (orders, spent) = (slot.total_orders, slot.total_spent);
                    *slot = saved.clone();
                    slot.total_orders = orders;
                    slot.total_spent = spent;
                }
                self.editing = None;
                Ok(saved)
            }
            Err(e) => {
                self.notifier.error("Save failed; your changes are still in the form");
                Err(e)
            }
        }
    }

    /// Soft-delete a customer
    pub async fn deactivate(&mut self, id: i64) -> ConsoleResult<()> {
        if !self.caps.manage_customers {
            return Err(ConsoleError::Forbidden("deactivate customer"));
        }
        self.customers.deactivate_customer(id).await?;
        if let Some(customer) = self.list.items_mut().iter_mut().find(|c| c.id == id) {
            customer.is_active = false;
        }
        Ok(())
    }
}
