//! Order models
//!
//! Front-desk orders and the kitchen queue view of them. Kitchen order
//! status is derived from its items with [`roll_up`]; the derivation only
//! runs when an item status is explicitly updated.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Preparation status of a single order item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    Pending,
    Preparing,
    Ready,
}

/// A line item on an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    /// Preparation notes ("extra hot, oat milk")
    pub specifications: Option<String>,
    pub status: ItemStatus,
}

impl OrderItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
            specifications: None,
            status: ItemStatus::Pending,
        }
    }

    /// Line total
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Front-desk order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

/// How the order is fulfilled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderKind {
    DineIn,
    Takeaway,
    Delivery,
}

/// Payment state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentState {
    Pending,
    Paid,
    Refunded,
}

/// A front-desk order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub kind: OrderKind,
    pub payment: PaymentState,
    pub table_number: Option<String>,
    pub placed_at: NaiveDateTime,
    pub estimated_ready: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl Order {
    /// Recompute the total from the line items
    pub fn recompute_total(&mut self) {
        self.total = self.items.iter().map(OrderItem::subtotal).sum();
    }
}

/// Kitchen queue order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KitchenStatus {
    Received,
    Preparing,
    Ready,
    Delivered,
}

/// Kitchen queue priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// An order as seen by the kitchen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenOrder {
    pub id: String,
    pub customer_name: String,
    pub table_number: Option<String>,
    pub kind: OrderKind,
    pub items: Vec<OrderItem>,
    pub status: KitchenStatus,
    pub priority: Priority,
    pub placed_at: NaiveDateTime,
    pub special_requests: Option<String>,
}

impl KitchenOrder {
    /// Update one item's preparation status and re-derive the order
    /// status from the item set. Returns the new order status, or an
    /// error if the item does not exist.
    ///
    /// The derivation is a one-way ratchet: once the order has advanced
    /// past `received` it never moves back, even if every item is reset
    /// to pending.
    pub fn set_item_status(
        &mut self,
        item_id: &str,
        status: ItemStatus,
    ) -> Result<KitchenStatus, UnknownItem> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| UnknownItem(item_id.to_string()))?;
        item.status = status;

        if let Some(derived) = roll_up(self.items.iter().map(|i| i.status)) {
            self.status = derived;
        }
        Ok(self.status)
    }
}

/// Item referenced in a status update does not exist on the order
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order item: {0}")]
pub struct UnknownItem(pub String);

/// Derive a kitchen order's status from its item statuses.
///
/// All items ready yields `Ready`; otherwise any preparing item yields
/// `Preparing`; otherwise `None`, meaning the order keeps whatever
/// status it already has. An empty item set also yields `None`.
pub fn roll_up(items: impl IntoIterator<Item = ItemStatus>) -> Option<KitchenStatus> {
    let mut any = false;
    let mut all_ready = true;
    let mut any_preparing = false;
    for status in items {
        any = true;
        match status {
            ItemStatus::Ready => {}
            ItemStatus::Preparing => {
                all_ready = false;
                any_preparing = true;
            }
            ItemStatus::Pending => all_ready = false,
        }
    }
    if !any {
        return None;
    }
    if all_ready {
        Some(KitchenStatus::Ready)
    } else if any_preparing {
        Some(KitchenStatus::Preparing)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_with(statuses: &[ItemStatus]) -> KitchenOrder {
        KitchenOrder {
            id: "KO-001".to_string(),
            customer_name: "John Doe".to_string(),
            table_number: Some("5".to_string()),
            kind: OrderKind::DineIn,
            items: statuses
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let mut item = OrderItem::new(format!("{}", i + 1), "Cappuccino", 1, 4.5);
                    item.status = *s;
                    item
                })
                .collect(),
            status: KitchenStatus::Received,
            priority: Priority::Normal,
            placed_at: "2024-08-20T10:30:00".parse().unwrap(),
            special_requests: None,
        }
    }

    #[test]
    fn test_roll_up_all_ready() {
        let derived = roll_up([ItemStatus::Ready, ItemStatus::Ready]);
        assert_eq!(derived, Some(KitchenStatus::Ready));
    }

    #[test]
    fn test_roll_up_any_preparing() {
        let derived = roll_up([ItemStatus::Ready, ItemStatus::Preparing]);
        assert_eq!(derived, Some(KitchenStatus::Preparing));
    }

    #[test]
    fn test_roll_up_all_pending_changes_nothing() {
        assert_eq!(roll_up([ItemStatus::Pending, ItemStatus::Pending]), None);
        assert_eq!(roll_up([]), None);
    }

    #[test]
    fn test_item_update_derives_order_status() {
        let mut order = order_with(&[ItemStatus::Ready, ItemStatus::Pending]);
        let status = order.set_item_status("2", ItemStatus::Preparing).unwrap();
        assert_eq!(status, KitchenStatus::Preparing);

        let status = order.set_item_status("2", ItemStatus::Ready).unwrap();
        assert_eq!(status, KitchenStatus::Ready);
    }

    #[test]
    fn test_status_ratchet_never_regresses() {
        // Intentional preserved behavior: resetting an item to pending
        // does not demote an order that already started preparing.
        let mut order = order_with(&[ItemStatus::Preparing, ItemStatus::Pending]);
        order.set_item_status("1", ItemStatus::Preparing).unwrap();
        assert_eq!(order.status, KitchenStatus::Preparing);

        order.set_item_status("1", ItemStatus::Pending).unwrap();
        assert_eq!(order.status, KitchenStatus::Preparing);
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let mut order = order_with(&[ItemStatus::Pending]);
        let err = order.set_item_status("99", ItemStatus::Ready).unwrap_err();
        assert_eq!(err, UnknownItem("99".to_string()));
        assert_eq!(order.status, KitchenStatus::Received);
    }

    #[test]
    fn test_order_total_recompute() {
        let mut order = Order {
            id: "ORD-001".to_string(),
            customer_name: "Jane Smith".to_string(),
            customer_phone: Some("+1234567891".to_string()),
            items: vec![
                OrderItem::new("1", "Cappuccino", 2, 4.5),
                OrderItem::new("2", "Croissant", 1, 3.25),
            ],
            total: 0.0,
            status: OrderStatus::Pending,
            kind: OrderKind::Takeaway,
            payment: PaymentState::Pending,
            table_number: None,
            placed_at: "2024-08-20T10:30:00".parse().unwrap(),
            estimated_ready: None,
            notes: None,
        };
        order.recompute_total();
        assert!((order.total - 12.25).abs() < f64::EPSILON);
    }
}
