//! Kitchen section
//!
//! The preparation queue and kitchen inventory. Updating an item's
//! preparation status re-derives the order status from the item set;
//! supplies carry the minimum-stock reference.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{ConsoleError, ConsoleResult};
use crate::notify::Notifier;
use crate::view::ListView;
use shared::Capabilities;
use shared::models::{
    Equipment, EquipmentStatus, ItemStatus, KitchenOrder, KitchenStatus, StockStatus, Supply,
};

/// Kitchen console state
pub struct KitchenSection {
    caps: Capabilities,
    notifier: Arc<dyn Notifier>,
    pub queue: ListView<KitchenOrder>,
    pub supplies: ListView<Supply>,
    pub equipment: ListView<Equipment>,
}

impl KitchenSection {
    pub fn new(caps: Capabilities, notifier: Arc<dyn Notifier>, page_size: u32) -> Self {
        Self {
            caps,
            notifier,
            queue: ListView::new(page_size),
            supplies: ListView::new(page_size),
            equipment: ListView::new(page_size),
        }
    }

    // ── Preparation queue ───────────────────────────────────────────

    /// Update one item's preparation status. The order status is
    /// re-derived from the item set (all ready wins, any preparing
    /// next, and it never falls back once advanced).
    pub fn set_item_status(
        &mut self,
        order_id: &str,
        item_id: &str,
        status: ItemStatus,
    ) -> ConsoleResult<KitchenStatus> {
        if !self.caps.update_orders {
            return Err(ConsoleError::Forbidden("update item status"));
        }
        let order = self
            .queue
            .items_mut()
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ConsoleError::NotFound(format!("kitchen order {order_id}")))?;
        let derived = order.set_item_status(item_id, status)?;
        if derived == KitchenStatus::Ready {
            self.notifier
                .success(&format!("Order {order_id} is ready for pickup"));
        }
        Ok(derived)
    }

    /// Hand a finished order to the front of house
    pub fn mark_delivered(&mut self, order_id: &str) -> ConsoleResult<()> {
        if !self.caps.update_orders {
            return Err(ConsoleError::Forbidden("update order status"));
        }
        let order = self
            .queue
            .items_mut()
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ConsoleError::NotFound(format!("kitchen order {order_id}")))?;
        order.status = KitchenStatus::Delivered;
        info!(order_id = %order_id, "Kitchen order delivered");
        Ok(())
    }

    /// Orders still being worked (everything not yet delivered)
    pub fn open_order_count(&self) -> usize {
        self.queue
            .items()
            .iter()
            .filter(|o| o.status != KitchenStatus::Delivered)
            .count()
    }

    // ── Kitchen inventory ───────────────────────────────────────────

    pub fn receive_supply(&mut self, id: &str, quantity: f64, today: NaiveDate) -> ConsoleResult<()> {
        if !self.caps.manage_inventory {
            return Err(ConsoleError::Forbidden("receive supply"));
        }
        let supply = self.find_supply(id)?;
        supply.receive(quantity, today);
        Ok(())
    }

    pub fn consume_supply(&mut self, id: &str, quantity: f64) -> ConsoleResult<()> {
        if !self.caps.manage_inventory {
            return Err(ConsoleError::Forbidden("consume supply"));
        }
        let notifier = Arc::clone(&self.notifier);
        let supply = self.find_supply(id)?;
        supply.consume(quantity);
        if supply.status == StockStatus::OutOfStock {
            notifier.warn(&format!("{} is out of stock", supply.name));
        }
        Ok(())
    }

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

    fn find_supply(&mut self, id: &str) -> ConsoleResult<&mut Supply> {
        self.supplies
            .items_mut()
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ConsoleError::NotFound(format!("supply {id}")))
    }
}
