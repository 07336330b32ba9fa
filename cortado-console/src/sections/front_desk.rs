//! Front-desk section
//!
//! Order queue, reservations, and house inventory. Orders and
//! reservations are session state; supplies carry the expected-stock
//! reference so the classifier flags anything below 80% of the restock
//! target.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::error::{ConsoleError, ConsoleResult};
use crate::notify::Notifier;
use crate::view::ListView;
use shared::Capabilities;
use shared::models::{
    Equipment, EquipmentStatus, Order, OrderItem, OrderKind, OrderStatus, PaymentState,
    Reservation, ReservationStatus, Supply,
};

/// Per-status reservation counts for the dashboard strip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservationCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub seated: usize,
}

/// Front-desk console state
pub struct FrontDeskSection {
    caps: Capabilities,
    notifier: Arc<dyn Notifier>,
    pub orders: ListView<Order>,
    pub reservations: ListView<Reservation>,
    pub supplies: ListView<Supply>,
    pub equipment: ListView<Equipment>,
}

impl FrontDeskSection {
    pub fn new(caps: Capabilities, notifier: Arc<dyn Notifier>, page_size: u32) -> Self {
        Self {
            caps,
            notifier,
            orders: ListView::new(page_size),
            reservations: ListView::new(page_size),
            supplies: ListView::new(page_size),
            equipment: ListView::new(page_size),
        }
    }

    // ── Orders ──────────────────────────────────────────────────────

    /// Take a new walk-in order
    pub fn place_order(
        &mut self,
        customer_name: impl Into<String>,
        customer_phone: Option<String>,
        items: Vec<OrderItem>,
        kind: OrderKind,
        table_number: Option<String>,
        placed_at: chrono::NaiveDateTime,
    ) -> ConsoleResult<String> {
        if !self.caps.update_orders {
            return Err(ConsoleError::Forbidden("place order"));
        }
        if items.is_empty() {
            return Err(ConsoleError::Validation("order has no items".into()));
        }
        let mut order = Order {
            id: format!("ORD-{}", Uuid::new_v4()),
            customer_name: customer_name.into(),
            customer_phone,
            items,
            total: 0.0,
            status: OrderStatus::Pending,
            kind,
            payment: PaymentState::Pending,
            table_number,
            placed_at,
            estimated_ready: None,
            notes: None,
        };
        order.recompute_total();
        let id = order.id.clone();
        info!(order_id = %id, total = order.total, "Order placed");
        self.orders.push(order);
        Ok(id)
    }

    /// Move an order to a new status
    pub fn update_order_status(&mut self, id: &str, status: OrderStatus) -> ConsoleResult<()> {
        if !self.caps.update_orders {
            return Err(ConsoleError::Forbidden("update order status"));
        }
        let order = self
            .orders
            .items_mut()
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ConsoleError::NotFound(format!("order {id}")))?;
        order.status = status;
        Ok(())
    }

    /// Cancel an order
    pub fn cancel_order(&mut self, id: &str) -> ConsoleResult<()> {
        self.update_order_status(id, OrderStatus::Cancelled)
    }

    /// Mark an order as paid
    pub fn mark_paid(&mut self, id: &str) -> ConsoleResult<()> {
        if !self.caps.update_orders {
            return Err(ConsoleError::Forbidden("update order payment"));
        }
        let order = self
            .orders
            .items_mut()
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ConsoleError::NotFound(format!("order {id}")))?;
        order.payment = PaymentState::Paid;
        Ok(())
    }

    // ── Reservations ────────────────────────────────────────────────

    /// Book a reservation
    pub fn book_reservation(&mut self, reservation: Reservation) -> ConsoleResult<()> {
        if !self.caps.manage_reservations {
            return Err(ConsoleError::Forbidden("book reservation"));
        }
        self.reservations.push(reservation);
        Ok(())
    }

    /// Move a reservation through its lifecycle
    pub fn transition_reservation(
        &mut self,
        id: &str,
        to: ReservationStatus,
    ) -> ConsoleResult<()> {
        if !self.caps.manage_reservations {
            return Err(ConsoleError::Forbidden("update reservation"));
        }
        let reservation = self
            .reservations
            .items_mut()
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ConsoleError::NotFound(format!("reservation {id}")))?;
        reservation.transition(to)?;
        Ok(())
    }

    pub fn reservation_counts(&self) -> ReservationCounts {
        let mut counts = ReservationCounts::default();
        for reservation in self.reservations.items() {
            match reservation.status {
                ReservationStatus::Pending => counts.pending += 1,
                ReservationStatus::Confirmed => counts.confirmed += 1,
                ReservationStatus::Seated => counts.seated += 1,
                _ => {}
            }
        }
        counts
    }

    // ── Inventory ───────────────────────────────────────────────────

    /// Receive a delivery into a supply
    pub fn receive_supply(&mut self, id: &str, quantity: f64, today: NaiveDate) -> ConsoleResult<()> {
        if !self.caps.manage_inventory {
            return Err(ConsoleError::Forbidden("receive supply"));
        }
        let supply = self.find_supply(id)?;
        supply.receive(quantity, today);
        Ok(())
    }

    /// Deduct used stock from a supply
    pub fn consume_supply(&mut self, id: &str, quantity: f64) -> ConsoleResult<()> {
        if !self.caps.manage_inventory {
            return Err(ConsoleError::Forbidden("consume supply"));
        }
        let notifier = Arc::clone(&self.notifier);
        let supply = self.find_supply(id)?;
        supply.consume(quantity);
        if supply.status == shared::models::StockStatus::OutOfStock {
            notifier.warn(&format!("{} is out of stock", supply.name));
        }
        Ok(())
    }

    /// Flag a restock order as placed
    pub fn mark_supply_incoming(&mut self, id: &str) -> ConsoleResult<()> {
        if !self.caps.manage_inventory {
            return Err(ConsoleError::Forbidden("mark supply incoming"));
        }
        let supply = self.find_supply(id)?;
        supply.mark_incoming();
        Ok(())
    }

    /// Update a piece of equipment
    pub fn set_equipment_status(&mut self, id: &str, status: EquipmentStatus) -> ConsoleResult<()> {
        if !self.caps.manage_inventory {
            return Err(ConsoleError::Forbidden("update equipment"));
        }
        let equipment = self
            .equipment
            .items_mut()
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ConsoleError::NotFound(format!("equipment {id}")))?;
        equipment.status = status;
        Ok(())
    }

    /// Supplies at or below their low threshold
    pub fn low_stock_count(&self) -> usize {
        use shared::models::StockStatus;
        self.supplies
            .items()
            .iter()
            .filter(|s| matches!(s.status, StockStatus::LowStock | StockStatus::OutOfStock))
            .count()
    }

    fn find_supply(&mut self, id: &str) -> ConsoleResult<&mut Supply> {
        self.supplies
            .items_mut()
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ConsoleError::NotFound(format!("supply {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::BufferNotifier;
    use shared::Role;
    use shared::models::{StockReference, StockStatus, SupplyCategory};

    fn section(caps: Capabilities) -> FrontDeskSection {
        FrontDeskSection::new(caps, Arc::new(BufferNotifier::new()), 10)
    }

    fn front_desk() -> FrontDeskSection {
        section(Capabilities::for_role(Role::FrontDesk))
    }

    fn when() -> chrono::NaiveDateTime {
        "2024-08-20T10:30:00".parse().unwrap()
    }

    #[test]
    fn test_place_order_totals_and_lists() {
        let mut section = front_desk();
        let id = section
            .place_order(
                "John Doe",
                Some("+1234567890".into()),
                vec![
                    OrderItem::new("1", "Cappuccino", 2, 4.5),
                    OrderItem::new("2", "Croissant", 1, 3.25),
                ],
                OrderKind::DineIn,
                Some("5".into()),
                when(),
            )
            .unwrap();

        let page = section.orders.visible();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].id, id);
        assert!((page.items[0].total - 12.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_order_rejected() {
        let mut section = front_desk();
        let err = section
            .place_order("Jane", None, vec![], OrderKind::Takeaway, None, when())
            .unwrap_err();
        assert!(matches!(err, ConsoleError::Validation(_)));
    }

    #[test]
    fn test_denied_caps_surface_forbidden() {
        let mut section = section(Capabilities::none());
        let err = section
            .place_order(
                "Jane",
                None,
                vec![OrderItem::new("1", "Latte", 1, 5.0)],
                OrderKind::Takeaway,
                None,
                when(),
            )
            .unwrap_err();
        assert!(matches!(err, ConsoleError::Forbidden(_)));
        assert!(section.orders.is_empty());
    }

    #[test]
    fn test_reservation_flow_and_counts() {
        let mut section = front_desk();
        section
            .book_reservation(Reservation {
                id: "RES-001".into(),
                customer_name: "Alice".into(),
                customer_phone: None,
                party_size: 2,
                date: "2024-08-21".parse().unwrap(),
                time: "18:00:00".parse().unwrap(),
                duration_minutes: 60,
                table_preference: None,
                status: ReservationStatus::Pending,
                notes: None,
            })
            .unwrap();

        section
            .transition_reservation("RES-001", ReservationStatus::Confirmed)
            .unwrap();
        assert_eq!(
            section.reservation_counts(),
            ReservationCounts { pending: 0, confirmed: 1, seated: 0 }
        );

        let err = section
            .transition_reservation("RES-001", ReservationStatus::Completed)
            .unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidTransition(_)));
    }

    #[test]
    fn test_equipment_status_update() {
        use shared::models::EquipmentKind;
        let mut section = front_desk();
        section.equipment.set_items(vec![Equipment {
            id: "FEQ-001".into(),
            name: "Espresso Machine #1".into(),
            kind: EquipmentKind::EspressoMachine,
            status: EquipmentStatus::Working,
            location: "Main Bar".into(),
            last_maintenance: Some("2024-08-01".parse().unwrap()),
            next_maintenance: None,
            notes: None,
        }]);

        section
            .set_equipment_status("FEQ-001", EquipmentStatus::Maintenance)
            .unwrap();
        assert_eq!(
            section.equipment.items()[0].status,
            EquipmentStatus::Maintenance
        );

        let err = section
            .set_equipment_status("FEQ-999", EquipmentStatus::Broken)
            .unwrap_err();
        assert!(matches!(err, ConsoleError::NotFound(_)));
    }

    #[test]
    fn test_supply_receive_keeps_classifier_invariant() {
        let mut section = front_desk();
        section.supplies.set_items(vec![Supply::new(
            "FSP-001",
            "Espresso Beans",
            SupplyCategory::CoffeeBeans,
            "kg",
            4.0,
            StockReference::Expected(10.0),
        )]);
        assert_eq!(section.supplies.items()[0].status, StockStatus::LowStock);

        section
            .receive_supply("FSP-001", 5.0, "2024-08-20".parse().unwrap())
            .unwrap();
        assert_eq!(section.supplies.items()[0].status, StockStatus::InStock);
        assert_eq!(section.low_stock_count(), 0);
    }
}
