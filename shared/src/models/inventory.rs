//! Inventory models
//!
//! Equipment and consumable supplies. A supply's `status` is always the
//! classifier output for its current stock pair; the mutating methods
//! recompute it so no call site can leave it stale.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Equipment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentKind {
    EspressoMachine,
    Grinder,
    Blender,
    Oven,
    Refrigerator,
    Other,
}

/// Equipment condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentStatus {
    Working,
    Maintenance,
    Broken,
    Replaced,
}

/// A piece of kitchen or front-of-house equipment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub kind: EquipmentKind,
    pub status: EquipmentStatus,
    pub location: String,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Supply category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupplyCategory {
    CoffeeBeans,
    Milk,
    Syrups,
    FoodIngredients,
    CupsLids,
    NapkinsUtensils,
    Cleaning,
    Other,
}

/// Stock level label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    /// A restock order is on its way. Set manually, cleared on receipt;
    /// never produced by the classifier.
    Incoming,
}

/// Reference level a supply is classified against
///
/// Front-desk supplies carry a restock target (`Expected`); kitchen
/// supplies carry a reorder floor (`Minimum`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockReference {
    Expected(f64),
    Minimum(f64),
}

/// Fraction of the expected stock below which a supply counts as low
const LOW_STOCK_RATIO: f64 = 0.8;

/// Map a stock pair to its status.
///
/// `Expected` variant: `current <= 0` is out of stock, below 80% of the
/// expected level is low, otherwise in stock. `Minimum` variant: at or
/// below the floor is low.
///
/// A zero (or negative) reference level never divides: anything on hand
/// counts as in stock, nothing on hand is out of stock.
pub fn classify_stock(current: f64, reference: StockReference) -> StockStatus {
    if current <= 0.0 {
        return StockStatus::OutOfStock;
    }
    match reference {
        StockReference::Expected(expected) => {
            if expected <= 0.0 {
                StockStatus::InStock
            } else if current < expected * LOW_STOCK_RATIO {
                StockStatus::LowStock
            } else {
                StockStatus::InStock
            }
        }
        StockReference::Minimum(minimum) => {
            if current <= minimum {
                StockStatus::LowStock
            } else {
                StockStatus::InStock
            }
        }
    }
}

/// A consumable supply
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    pub id: String,
    pub name: String,
    pub category: SupplyCategory,
    /// Unit of measure (kg, L, pcs, ...)
    pub unit: String,
    pub current_stock: f64,
    pub reference: StockReference,
    pub status: StockStatus,
    pub last_received: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Supply {
    /// Create a supply with its status derived from the stock pair
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: SupplyCategory,
        unit: impl Into<String>,
        current_stock: f64,
        reference: StockReference,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            unit: unit.into(),
            current_stock,
            reference,
            status: classify_stock(current_stock, reference),
            last_received: None,
            notes: None,
        }
    }

    /// Replace the stock level and reclassify
    pub fn set_stock(&mut self, quantity: f64) {
        self.current_stock = quantity.max(0.0);
        self.reclassify();
    }

    /// Receive a delivery: add stock, stamp the receipt date, reclassify.
    /// Quantities of zero or less are ignored.
    pub fn receive(&mut self, quantity: f64, today: NaiveDate) {
        if quantity <= 0.0 {
            return;
        }
        self.current_stock += quantity;
        self.last_received = Some(today);
        self.reclassify();
    }

    /// Consume stock, flooring at zero. Quantities of zero or less are
    /// ignored.
    pub fn consume(&mut self, quantity: f64) {
        if quantity <= 0.0 {
            return;
        }
        self.current_stock = (self.current_stock - quantity).max(0.0);
        self.reclassify();
    }

    /// Flag a restock order as on its way
    pub fn mark_incoming(&mut self) {
        self.status = StockStatus::Incoming;
    }

    fn reclassify(&mut self) {
        self.status = classify_stock(self.current_stock, self.reference);
    }
}
