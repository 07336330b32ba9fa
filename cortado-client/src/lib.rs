//! Cortado Client - HTTP client for the backend REST API
//!
//! Typed network calls to the coffee-shop backend: staff, customers,
//! menu catalog, and purchase history. The console consumes these
//! through the [`backend`] traits so tests can swap in a fake.

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod http;

pub use backend::{CustomerBackend, MenuBackend, PurchaseHistoryBackend, StaffBackend};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::query::{Envelope, Page, PageRequest};
