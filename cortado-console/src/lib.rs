//! Cortado Console - front-of-house management core
//!
//! Role-scoped sections over the backend API: order queues, inventory,
//! reservations, staff, customers, menu, and payroll. Each list view
//! runs on the shared pagination/filter/sort machinery; edits go through
//! isolated dialog sessions that only commit on confirmed success.

pub mod config;
pub mod error;
pub mod logger;
pub mod notify;
pub mod sections;
pub mod session;
pub mod view;

pub use config::ConsoleConfig;
pub use error::{ConsoleError, ConsoleResult};
pub use notify::{BufferNotifier, Notice, NoticeLevel, Notifier, TracingNotifier};
pub use session::EditSession;
pub use view::{
    ListCriteria, ListView, PageFetcher, PaginationStrategy, ServerListView, VisiblePage,
};
