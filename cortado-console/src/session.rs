//! Dialog edit sessions
//!
//! Opening an edit dialog copies the entity into a transient buffer;
//! edits touch only the buffer. Cancel discards it, save commits it.
//! The source list is never modified until a save succeeds, and a failed
//! backend save keeps the buffer (and the dialog) alive so the user's
//! input survives.

use crate::error::{ConsoleError, ConsoleResult};
use cortado_client::ClientResult;

/// Entities that can be addressed by identity in a list
pub trait Identify {
    fn ident(&self) -> String;
}

/// A transient edit buffer for one entity
#[derive(Debug, Clone)]
pub struct EditSession<T> {
    target_id: String,
    buffer: Option<T>,
}

impl<T: Clone + Identify> EditSession<T> {
    /// Open a session on a copy of the entity
    pub fn open(entity: &T) -> Self {
        Self {
            target_id: entity.ident(),
            buffer: Some(entity.clone()),
        }
    }

    /// Identity of the entity being edited
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Whether the dialog is still open
    pub fn is_open(&self) -> bool {
        self.buffer.is_some()
    }

    /// The current draft, if the dialog is open
    pub fn draft(&self) -> Option<&T> {
        self.buffer.as_ref()
    }

    /// Mutate the draft. Returns false if the dialog is closed.
    pub fn edit(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match self.buffer.as_mut() {
            Some(draft) => {
                f(draft);
                true
            }
            None => false,
        }
    }

    /// Discard the draft and close the dialog
    pub fn cancel(&mut self) {
        self.buffer = None;
    }

    /// Commit the draft into a local list by replacing the entry with
    /// the matching identity. The list is untouched on error.
    pub fn save_local(&mut self, list: &mut [T]) -> ConsoleResult<T> {
        let draft = self
            .buffer
            .clone()
            .ok_or_else(|| ConsoleError::Validation("no open edit session".into()))?;
        let slot = list
            .iter_mut()
            .find(|entry| entry.ident() == self.target_id)
            .ok_or_else(|| ConsoleError::NotFound(self.target_id.clone()))?;
        *slot = draft.clone();
        self.buffer = None;
        Ok(draft)
    }

    /// Commit the draft through a backend call. The dialog closes only
    /// on confirmed success; on failure the buffer is preserved so the
    /// user does not lose input.
    pub async fn save_with<F, Fut>(&mut self, commit: F) -> ConsoleResult<T>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let draft = self
            .buffer
            .clone()
            .ok_or_else(|| ConsoleError::Validation("no open edit session".into()))?;
        match commit(draft).await {
            Ok(saved) => {
                self.buffer = None;
                Ok(saved)
            }
            Err(e) => Err(ConsoleError::Backend(e)),
        }
    }
}
