//! HTTP API application wiring (Axum router + shared inventory).
//!
//! - `services.rs`: the shared, lock-protected inventory table
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: form DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use stockroom_core::DomainResult;
use stockroom_inventory::InventoryTable;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> DomainResult<Router> {
    let table = if config.seed {
        InventoryTable::seeded()?
    } else {
        InventoryTable::new()
    };
    tracing::info!(
        products = table.len(),
        low_stock_threshold = config.low_stock_threshold,
        "inventory loaded"
    );

    let services = Arc::new(AppServices::new(table, config.low_stock_threshold));
    Ok(router(services))
}

/// Router over an already-built inventory.
pub fn router(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}
