//! Shared types for the Cortado front-of-house suite
//!
//! Domain models, derived-status rules, query types, and role
//! capabilities used across the client and console crates.

pub mod capability;
pub mod error;
pub mod models;
pub mod query;

// Re-exports
pub use capability::{Capabilities, Role};
pub use error::ErrorCode;
pub use query::{Envelope, Page, PageRequest, SortDir};
pub use serde::{Deserialize, Serialize};
