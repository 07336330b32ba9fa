//! Roles and capabilities
//!
//! Every mutating console operation takes an explicit [`Capabilities`]
//! value instead of trusting an ambient flag. Denied actions surface as
//! errors at the call site, they are never silently dropped.

use serde::{Deserialize, Serialize};

/// Console role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    FrontDesk,
    Kitchen,
    Manager,
}

/// Explicit per-action permissions for a console session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub view_orders: bool,
    pub update_orders: bool,
    pub manage_inventory: bool,
    pub manage_reservations: bool,
    pub manage_staff: bool,
    pub manage_customers: bool,
    pub manage_menu: bool,
    pub manage_payroll: bool,
}

impl Capabilities {
    /// Capabilities granted to a role
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::FrontDesk => Self {
                view_orders: true,
                update_orders: true,
                manage_inventory: true,
                manage_reservations: true,
                manage_staff: false,
                manage_customers: false,
                manage_menu: false,
                manage_payroll: false,
            },
            Role::Kitchen => Self {
                view_orders: true,
                update_orders: true,
                manage_inventory: true,
                manage_reservations: false,
                manage_staff: false,
                manage_customers: false,
                manage_menu: false,
                manage_payroll: false,
            },
            Role::Manager => Self {
                view_orders: true,
                update_orders: true,
                manage_inventory: true,
                manage_reservations: true,
                manage_staff: true,
                manage_customers: true,
                manage_menu: true,
                manage_payroll: true,
            },
        }
    }

    /// No permissions at all (useful in tests)
    pub fn none() -> Self {
        Self {
            view_orders: false,
            update_orders: false,
            manage_inventory: false,
            manage_reservations: false,
            manage_staff: false,
            manage_customers: false,
            manage_menu: false,
            manage_payroll: false,
        }
    }
}
