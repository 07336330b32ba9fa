//! Staff directory
//!
//! Backend-backed staff records with client-side list paging over the
//! fetched set. Deactivation is a soft delete; the row stays visible
//! with its flag flipped.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{ConsoleError, ConsoleResult};
use crate::notify::Notifier;
use crate::session::EditSession;
use crate::view::ListView;
use cortado_client::StaffBackend;
use shared::Capabilities;
use shared::models::{Staff, StaffCreate, StaffUpdate};

/// Staff management screen state
pub struct StaffSection {
    caps: Capabilities,
    notifier: Arc<dyn Notifier>,
    backend: Arc<dyn StaffBackend>,
    pub list: ListView<Staff>,
    editing: Option<EditSession<Staff>>,
}

impl StaffSection {
    pub fn new(
        caps: Capabilities,
        notifier: Arc<dyn Notifier>,
        backend: Arc<dyn StaffBackend>,
        page_size: u32,
    ) -> Self {
        Self {
            caps,
            notifier,
            backend,
            list: ListView::new(page_size),
            editing: None,
        }
    }

    /// Reload the directory. On failure the last-known list stays on
    /// screen and the failure is surfaced as a notice.
    pub async fn refresh(&mut self, active_only: bool) {
        match self.backend.list_staff(active_only).await {
            Ok(staff) => {
                info!(count = staff.len(), "Staff directory loaded");
                self.list.set_items(staff);
            }
            Err(e) => {
                warn!(error = %e, "Staff directory refresh failed");
                self.notifier.error("Could not load staff; showing last known data");
            }
        }
    }

    /// Hire a new staff member
    pub async fn create(&mut self, payload: StaffCreate) -> ConsoleResult<Staff> {
        if !self.caps.manage_staff {
            return Err(ConsoleError::Forbidden("create staff"));
        }
        let created = self.backend.create_staff(payload).await?;
        self.list.push(created.clone());
        self.notifier.success(&format!("{} added", created.full_name()));
        Ok(created)
    }

    /// Open the edit dialog for a staff member
    pub fn begin_edit(&mut self, id: i64) -> ConsoleResult<()> {
        let staff = self
            .list
            .items()
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| ConsoleError::NotFound(format!("staff {id}")))?;
        self.editing = Some(EditSession::open(staff));
        Ok(())
    }

    /// Mutate the open draft
    pub fn edit_draft(&mut self, f: impl FnOnce(&mut Staff)) -> bool {
        self.editing.as_mut().is_some_and(|session| session.edit(f))
    }

    pub fn draft(&self) -> Option<&Staff> {
        self.editing.as_ref().and_then(EditSession::draft)
    }

    pub fn dialog_open(&self) -> bool {
        self.editing.as_ref().is_some_and(EditSession::is_open)
    }

    /// Discard the draft
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the open draft through the backend. The dialog closes only
    /// on confirmed success; a failed save keeps the draft alive.
    pub async fn save_edit(&mut self) -> ConsoleResult<Staff> {
        if !self.caps.manage_staff {
            return Err(ConsoleError::Forbidden("update staff"));
        }
        let session = self
            .editing
            .as_mut()
            .ok_or_else(|| ConsoleError::Validation("no staff edit in progress".into()))?;

        let backend = Arc::clone(&self.backend);
        let outcome = session
            .save_with(|draft| async move {
                let payload = StaffUpdate {
                    first_name: Some(draft.first_name.clone()),
                    last_name: Some(draft.last_name.clone()),
                    email: draft.email.clone(),
                    phone: draft.phone.clone(),
                    position: Some(draft.position.clone()),
                    department: Some(draft.department.clone()),
                    role: Some(draft.role.clone()),
                    hourly_rate: draft.hourly_rate,
                    notes: draft.notes.clone(),
                    is_active: Some(draft.is_active),
                };
                backend.update_staff(draft.id, payload).await
            })
            .await;

        match outcome {
            Ok(saved) => {
                if let Some(slot) = self.list.items_mut().iter_mut().find(|s| s.id == saved.id) {
                    *slot = saved.clone();
                }
                self.editing = None;
                self.notifier.success(&format!("{} updated", saved.full_name()));
                Ok(saved)
            }
            Err(e) => {
                self.notifier.error("Save failed; your changes are still in the form");
                Err(e)
            }
        }
    }

    /// Soft-delete a staff member
    pub async fn deactivate(&mut self, id: i64) -> ConsoleResult<()> {
        if !self.caps.manage_staff {
            return Err(ConsoleError::Forbidden("deactivate staff"));
        }
        self.backend.deactivate_staff(id).await?;
        if let Some(staff) = self.list.items_mut().iter_mut().find(|s| s.id == id) {
            staff.is_active = false;
        }
        Ok(())
    }
}
