//! Typed endpoint wrappers, one module per backend resource

pub mod customers;
pub mod menu;
pub mod purchase_history;
pub mod staff;

pub use customers::CustomerApi;
pub use menu::MenuApi;
pub use purchase_history::PurchaseHistoryApi;
pub use staff::StaffApi;
