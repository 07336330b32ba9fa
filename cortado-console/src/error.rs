//! Console error type

use cortado_client::ClientError;
use shared::ErrorCode;
use shared::models::reservation::TransitionError;
use shared::models::order::UnknownItem;
use thiserror::Error;

/// Errors surfaced by console operations
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The session's capabilities do not allow the action
    #[error("Permission denied: {0}")]
    Forbidden(&'static str),

    /// Referenced entity does not exist in the view
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Status transition outside the allowed set
    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    /// Backend call failed
    #[error("Backend error: {0}")]
    Backend(#[from] ClientError),

    /// A newer request superseded this one; its result was discarded
    #[error("Superseded by a newer request")]
    Stale,
}

impl ConsoleError {
    /// Wire error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            ConsoleError::Forbidden(_) => ErrorCode::Forbidden,
            ConsoleError::NotFound(_) => ErrorCode::NotFound,
            ConsoleError::Validation(_) => ErrorCode::Validation,
            ConsoleError::InvalidTransition(_) => ErrorCode::InvalidTransition,
            ConsoleError::Backend(_) => ErrorCode::Backend,
            ConsoleError::Stale => ErrorCode::Internal,
        }
    }
}

impl From<UnknownItem> for ConsoleError {
    fn from(e: UnknownItem) -> Self {
        ConsoleError::NotFound(format!("order item {}", e.0))
    }
}

/// Result type for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;
