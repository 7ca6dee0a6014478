use axum::{Router, routing::get};

pub mod products;
pub mod reports;
pub mod system;

/// Router for all inventory endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/dashboard", get(reports::dashboard))
        .nest("/products", products::router())
        .nest("/reports", reports::router())
}
