//! Console configuration

use cortado_client::ClientConfig;
use shared::query::DEFAULT_PAGE_SIZE;

/// Console configuration
///
/// # Environment variables
///
/// | Variable  | Default | Description          |
/// |-----------|---------|----------------------|
/// | PAGE_SIZE | 10      | List view page size  |
/// | LOG_LEVEL | info    | Tracing level        |
/// | LOG_DIR   | (none)  | Rolling log file dir |
///
/// Backend connection settings are read by [`ClientConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Items per list-view page
    pub page_size: u32,
    /// Tracing level
    pub log_level: String,
    /// Rolling log file directory
    pub log_dir: Option<String>,
    /// Backend client settings
    pub client: ClientConfig,
}

impl ConsoleConfig {
    /// Load configuration from the environment (and `.env` if present),
    /// falling back to defaults for anything unset
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            client: ClientConfig::from_env(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "info".into(),
            log_dir: None,
            client: ClientConfig::default(),
        }
    }
}
