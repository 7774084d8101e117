//! Branch endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::{AppError, AppResult},
    models::{library::CreateLibrary, CheckableAmount, Library, OverdueCheckout},
};

/// Overdue scan query
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OverdueQuery {
    /// Reference instant (RFC 3339); defaults to the time of the request
    pub at: Option<String>,
}

impl OverdueQuery {
    fn reference_time(&self) -> AppResult<DateTime<Utc>> {
        match &self.at {
            Some(at) => DateTime::parse_from_rfc3339(at)
                .map(|at| at.with_timezone(&Utc))
                .map_err(|e| AppError::BadRequest(format!("Invalid reference time {}: {}", at, e))),
            None => Ok(Utc::now()),
        }
    }
}

/// List all libraries
#[utoipa::path(
    get,
    path = "/libraries",
    tag = "libraries",
    responses(
        (status = 200, description = "Libraries", body = Vec<Library>)
    )
)]
pub async fn list_libraries(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Library>>> {
    let libraries = state.services.libraries.list()?;
    Ok(Json(libraries))
}

/// Get a library by name
#[utoipa::path(
    get,
    path = "/libraries/{name}",
    tag = "libraries",
    params(("name" = String, Path, description = "Library name (exact match)")),
    responses(
        (status = 200, description = "Library", body = Library),
        (status = 404, description = "Unknown library", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_library(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.get_by_name(&name)?;
    Ok(Json(library))
}

/// Create a library
#[utoipa::path(
    post,
    path = "/libraries",
    tag = "libraries",
    request_body = CreateLibrary,
    responses(
        (status = 201, description = "Library created", body = Library),
        (status = 404, description = "Stock references an unknown code", body = crate::error::ErrorResponse),
        (status = 409, description = "Name already in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_library(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateLibrary>,
) -> AppResult<(StatusCode, Json<Library>)> {
    let library = state.services.libraries.create(request)?;
    Ok((StatusCode::CREATED, Json(library)))
}

/// Stock of one item at a library
#[utoipa::path(
    get,
    path = "/libraries/{name}/checkables/{code}",
    tag = "libraries",
    params(
        ("name" = String, Path, description = "Library name"),
        ("code" = String, Path, description = "Catalog code")
    ),
    responses(
        (status = 200, description = "On-hand amount, 0 when not stocked", body = CheckableAmount),
        (status = 404, description = "Unknown library or code", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_checkable_amount(
    State(state): State<crate::AppState>,
    Path((name, code)): Path<(String, String)>,
) -> AppResult<Json<CheckableAmount>> {
    let amount = state.services.inventory.get_checkable_amount(&name, &code)?;
    Ok(Json(amount))
}

/// Overdue checkouts at a library
#[utoipa::path(
    get,
    path = "/libraries/{name}/overdue",
    tag = "libraries",
    params(
        ("name" = String, Path, description = "Library name"),
        OverdueQuery
    ),
    responses(
        (status = 200, description = "Overdue checkouts", body = Vec<OverdueCheckout>),
        (status = 400, description = "Malformed reference time", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown library", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_overdue_checkouts(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
    Query(query): Query<OverdueQuery>,
) -> AppResult<Json<Vec<OverdueCheckout>>> {
    let reference_time = query.reference_time()?;
    let overdue = state.services.overdue.get_overdue_checkouts(&name, reference_time)?;
    Ok(Json(overdue))
}
