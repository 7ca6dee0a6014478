use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/total", get(total))
        .route("/low-stock", get(low_stock))
}

/// Counts, totals and low-stock alerts in one payload.
pub async fn dashboard(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let threshold = services.low_stock_threshold();
    let summary = services.read(|table| table.summary(threshold));
    (StatusCode::OK, Json(dto::summary_to_json(&summary))).into_response()
}

pub async fn total(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let (total_value, total_items) = services.read(|table| (table.total_value(), table.total_item_count()));
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "total_value": total_value,
            "total_items": total_items,
        })),
    )
        .into_response()
}

pub async fn low_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::LowStockQuery>,
) -> axum::response::Response {
    let threshold = match query.threshold.as_deref().map(str::trim) {
        None | Some("") => services.low_stock_threshold(),
        Some(raw) => match raw.parse::<u64>() {
            Ok(t) => t,
            Err(_) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_threshold",
                    "threshold must be a non-negative integer",
                );
            }
        },
    };

    let items = services.read(|table| table.low_stock_products(threshold));
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "threshold": threshold,
            "items": items.iter().map(dto::low_stock_to_json).collect::<Vec<_>>(),
        })),
    )
        .into_response()
}
