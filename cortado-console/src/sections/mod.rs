//! Role-scoped console sections
//!
//! One module per console area: front desk (orders, reservations,
//! house inventory), kitchen (preparation queue, kitchen inventory),
//! and the manager screens (staff, customers, menu, payroll).

pub mod front_desk;
pub mod kitchen;
pub mod managers;

pub use front_desk::FrontDeskSection;
pub use kitchen::KitchenSection;
pub use managers::{CustomerSection, MenuSection, PerformanceSection, StaffSection};
