//! Catalog endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{Checkable, CheckableVariant, LibraryAvailableCheckouts},
};

/// List all catalog items
#[utoipa::path(
    get,
    path = "/checkables",
    tag = "checkables",
    responses(
        (status = 200, description = "Catalog items", body = Vec<Checkable>)
    )
)]
pub async fn list_checkables(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Arc<Checkable>>>> {
    let checkables = state.services.catalog.list()?;
    Ok(Json(checkables))
}

/// Get a catalog item by code
#[utoipa::path(
    get,
    path = "/checkables/{code}",
    tag = "checkables",
    params(("code" = String, Path, description = "Catalog code")),
    responses(
        (status = 200, description = "Catalog item", body = Checkable),
        (status = 404, description = "Unknown code", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_checkable(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Arc<Checkable>>> {
    let checkable = state.services.catalog.get_by_code(&code)?;
    Ok(Json(checkable))
}

/// Get the first catalog item of a variant
#[utoipa::path(
    get,
    path = "/checkable-variants/{variant}",
    tag = "checkables",
    params(("variant" = String, Path, description = "media, science_kit or ticket")),
    responses(
        (status = 200, description = "Catalog item", body = Checkable),
        (status = 400, description = "Unknown variant name", body = crate::error::ErrorResponse),
        (status = 404, description = "No item of this variant", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_checkable_by_variant(
    State(state): State<crate::AppState>,
    Path(variant): Path<String>,
) -> AppResult<Json<Arc<Checkable>>> {
    let variant: CheckableVariant = variant.parse().map_err(AppError::BadRequest)?;
    let checkable = state.services.catalog.get_by_variant(variant)?;
    Ok(Json(checkable))
}

/// Add a catalog item
#[utoipa::path(
    post,
    path = "/checkables",
    tag = "checkables",
    request_body = Checkable,
    responses(
        (status = 201, description = "Catalog item created", body = Checkable),
        (status = 409, description = "Code already in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_checkable(
    State(state): State<crate::AppState>,
    Json(checkable): Json<Checkable>,
) -> AppResult<(StatusCode, Json<Arc<Checkable>>)> {
    let checkable = state.services.catalog.save(checkable)?;
    Ok((StatusCode::CREATED, Json(checkable)))
}

/// Branches with copies of an item available
#[utoipa::path(
    get,
    path = "/checkables/{code}/availability",
    tag = "checkables",
    params(("code" = String, Path, description = "Catalog code")),
    responses(
        (status = 200, description = "Branches with available copies", body = Vec<LibraryAvailableCheckouts>)
    )
)]
pub async fn get_availability(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Vec<LibraryAvailableCheckouts>>> {
    let available = state.services.inventory.get_libraries_with_available_checkout(&code)?;
    Ok(Json(available))
}
