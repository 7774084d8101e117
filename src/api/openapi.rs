//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{checkables, health, libraries};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Circulation API",
        version = "0.1.0",
        description = "Branch inventory availability and overdue checkout reporting"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        checkables::list_checkables,
        checkables::get_checkable,
        checkables::get_checkable_by_variant,
        checkables::create_checkable,
        checkables::get_availability,
        // Libraries
        libraries::list_libraries,
        libraries::get_library,
        libraries::create_library,
        libraries::get_checkable_amount,
        libraries::get_overdue_checkouts,
    ),
    components(
        schemas(
            // Catalog
            crate::models::Checkable,
            crate::models::CheckableKind,
            crate::models::CheckableVariant,
            crate::models::MediaType,
            // Libraries
            crate::models::Library,
            crate::models::CheckableAmount,
            crate::models::LibraryCard,
            crate::models::Checkout,
            crate::models::Patron,
            crate::models::library::CreateLibrary,
            crate::models::library::CreateStock,
            crate::models::library::CreateLibraryCard,
            crate::models::library::CreateCheckout,
            // Reports
            crate::models::LibraryAvailableCheckouts,
            crate::models::OverdueCheckout,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "checkables", description = "Catalog and availability"),
        (name = "libraries", description = "Branches, stock and overdue loans")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
