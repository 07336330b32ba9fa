//! Domain models

pub mod customer;
pub mod employee;
pub mod inventory;
pub mod menu;
pub mod order;
pub mod reservation;
pub mod staff;

pub use customer::{Customer, CustomerCreate, CustomerStats, CustomerUpdate, PurchaseRecord};
pub use employee::{Employee, PaymentStatus, ReviewStatus};
pub use inventory::{
    Equipment, EquipmentKind, EquipmentStatus, StockReference, StockStatus, Supply, SupplyCategory,
    classify_stock,
};
pub use menu::{ItemType, MenuFilter, MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{
    ItemStatus, KitchenOrder, KitchenStatus, Order, OrderItem, OrderKind, OrderStatus,
    PaymentState, Priority, UnknownItem, roll_up,
};
pub use reservation::{Reservation, ReservationStatus, TransitionError};
pub use staff::{Staff, StaffCreate, StaffUpdate};
