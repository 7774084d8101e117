//! API handlers for the circulation REST endpoints

pub mod checkables;
pub mod health;
pub mod libraries;
pub mod openapi;

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Catalog
        .route(
            "/checkables",
            get(checkables::list_checkables).post(checkables::create_checkable),
        )
        .route("/checkables/:code", get(checkables::get_checkable))
        .route("/checkables/:code/availability", get(checkables::get_availability))
        .route("/checkable-variants/:variant", get(checkables::get_checkable_by_variant))
        // Libraries
        .route(
            "/libraries",
            get(libraries::list_libraries).post(libraries::create_library),
        )
        .route("/libraries/:name", get(libraries::get_library))
        .route("/libraries/:name/checkables/:code", get(libraries::get_checkable_amount))
        .route("/libraries/:name/overdue", get(libraries::get_overdue_checkouts))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
