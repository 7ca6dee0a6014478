//! Aggregate reports over the inventory table.
//!
//! All reports are pure reads.

use stockroom_core::{Entity, Money, ProductCode};

use crate::table::InventoryTable;

/// Stock level at or below which a product is flagged on the dashboard.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 3;

/// A product flagged as low on stock, annotated with its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockEntry {
    pub code: ProductCode,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u64,
}

impl Entity for LowStockEntry {
    type Id = ProductCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

/// Dashboard aggregate for the whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    pub product_count: usize,
    pub total_items: u64,
    pub total_value: Money,
    pub low_stock_threshold: u64,
    pub low_stock: Vec<LowStockEntry>,
}

impl InventoryTable {
    /// Σ `unit_price × quantity` over all records. Zero for an empty table.
    pub fn total_value(&self) -> Money {
        self.products().map(|(_, record)| record.line_total()).sum()
    }

    /// Σ `quantity` over all records.
    pub fn total_item_count(&self) -> u64 {
        self.products()
            .fold(0u64, |acc, (_, record)| acc.saturating_add(record.quantity()))
    }

    /// Products with `quantity <= threshold`, ascending by quantity.
    ///
    /// Ties keep ascending code order (the sort is stable over the table's
    /// iteration order).
    pub fn low_stock_products(&self, threshold: u64) -> Vec<LowStockEntry> {
        let mut low: Vec<LowStockEntry> = self
            .products()
            .filter(|(_, record)| record.quantity() <= threshold)
            .map(|(code, record)| LowStockEntry {
                code,
                name: record.name().to_string(),
                unit_price: record.unit_price(),
                quantity: record.quantity(),
            })
            .collect();
        low.sort_by_key(|entry| entry.quantity);
        low
    }

    pub fn summary(&self, low_stock_threshold: u64) -> InventorySummary {
        InventorySummary {
            product_count: self.len(),
            total_items: self.total_item_count(),
            total_value: self.total_value(),
            low_stock_threshold,
            low_stock: self.low_stock_products(low_stock_threshold),
        }
    }
}
