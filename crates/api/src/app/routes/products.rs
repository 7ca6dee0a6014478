use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use stockroom_inventory::{MovementKind, input};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_product).get(list_products))
        .route("/:code", get(find_product))
        .route("/:code/sell", post(sell_product))
        .route("/:code/restock", post(restock_product))
}

pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<dto::AddProductForm>,
) -> axum::response::Response {
    let new_product = match input::parse_new_product(&form.name, &form.price, &form.quantity) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "add product rejected");
            return errors::domain_error_to_response(e);
        }
    };

    let added = services.write(|table| {
        table.add_product(&new_product.name, new_product.unit_price, new_product.quantity)
    });
    let (code, record) = match added {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "add product rejected");
            return errors::domain_error_to_response(e);
        }
    };

    tracing::info!(%code, name = record.name(), quantity = record.quantity(), "product added");

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "code": code,
            "product": dto::product_to_json(code, &record),
        })),
    )
        .into_response()
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let items = services.read(|table| {
        table
            .products()
            .map(|(code, record)| dto::product_to_json(code, record))
            .collect::<Vec<_>>()
    });
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn find_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    let code = match input::parse_code(&code) {
        Ok(c) => c,
        Err(e) if e.is_not_found() => {
            return errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found");
        }
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.read(|table| table.find_product(code).map(|r| dto::product_to_json(code, r))) {
        Some(body) => (StatusCode::OK, Json(body)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

pub async fn sell_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
    Form(form): Form<dto::MovementForm>,
) -> axum::response::Response {
    record_movement(&services, MovementKind::Sale, &code, &form.quantity)
}

pub async fn restock_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
    Form(form): Form<dto::MovementForm>,
) -> axum::response::Response {
    record_movement(&services, MovementKind::Restock, &code, &form.quantity)
}

fn record_movement(
    services: &AppServices,
    kind: MovementKind,
    raw_code: &str,
    raw_quantity: &str,
) -> axum::response::Response {
    let result = input::parse_movement(raw_code, raw_quantity).and_then(|req| {
        services.write(|table| match kind {
            MovementKind::Sale => table.sell_product(req.code, req.quantity),
            MovementKind::Restock => table.restock_product(req.code, req.quantity),
        })
    });

    match result {
        Ok(movement) => {
            tracing::info!(
                kind = ?movement.kind,
                code = %movement.code,
                quantity = movement.quantity,
                stock_after = movement.stock_after,
                "stock movement recorded"
            );
            (StatusCode::OK, Json(dto::movement_to_json(&movement))).into_response()
        }
        Err(e) => {
            tracing::warn!(?kind, code = raw_code, error = %e, "stock movement rejected");
            errors::domain_error_to_response(e)
        }
    }
}
