//! Inventory domain module.
//!
//! This crate contains the business rules for the product catalog and its
//! stock levels, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod input;
pub mod record;
pub mod report;
pub mod seed;
pub mod table;

pub use input::{MovementRequest, NewProduct, parse_code, parse_movement, parse_new_product};
pub use record::ProductRecord;
pub use report::{DEFAULT_LOW_STOCK_THRESHOLD, InventorySummary, LowStockEntry};
pub use table::{InventoryTable, MovementKind, StockMovement};
