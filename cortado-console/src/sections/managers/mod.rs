//! Manager screens

pub mod customers;
pub mod menu;
pub mod performance;
pub mod staff;

pub use customers::CustomerSection;
pub use menu::MenuSection;
pub use performance::PerformanceSection;
pub use staff::StaffSection;
