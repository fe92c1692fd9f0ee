use std::sync::Arc;

use axum::{routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    error::HttpError,
    handler::{listings::listings_handler, locales::locales_handler},
    AppState,
};

// Health check handler
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

async fn route_not_found() -> HttpError {
    HttpError::not_found("Route not found")
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new().merge(listings_handler());

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
        .nest("/locales", locales_handler())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}
