use serde::Deserialize;

use stockroom_core::ProductCode;
use stockroom_inventory::{InventorySummary, LowStockEntry, ProductRecord, StockMovement};

// -------------------------
// Request DTOs
// -------------------------
//
// Fields arrive as raw form text and are parsed by `stockroom_inventory::input`
// so that malformed values produce domain messages instead of extractor
// rejections. Missing fields read as empty text.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddProductForm {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MovementForm {
    pub quantity: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LowStockQuery {
    pub threshold: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(code: ProductCode, record: &ProductRecord) -> serde_json::Value {
    serde_json::json!({
        "code": code,
        "name": record.name(),
        "unit_price": record.unit_price(),
        "quantity": record.quantity(),
        "total": record.line_total(),
    })
}

pub fn low_stock_to_json(entry: &LowStockEntry) -> serde_json::Value {
    serde_json::json!({
        "code": entry.code,
        "name": entry.name,
        "unit_price": entry.unit_price,
        "quantity": entry.quantity,
    })
}

pub fn movement_to_json(movement: &StockMovement) -> serde_json::Value {
    serde_json::json!({
        "code": movement.code,
        "name": movement.name,
        "quantity": movement.quantity,
        "stock_after": movement.stock_after,
        "message": movement.to_string(),
    })
}

pub fn summary_to_json(summary: &InventorySummary) -> serde_json::Value {
    serde_json::json!({
        "product_count": summary.product_count,
        "total_items": summary.total_items,
        "total_value": summary.total_value,
        "low_stock_threshold": summary.low_stock_threshold,
        "low_stock": summary.low_stock.iter().map(low_stock_to_json).collect::<Vec<_>>(),
    })
}
