//! Error types for the circulation server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes returned in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchLibrary = 2,
    NoSuchCheckable = 3,
    NoSuchVariant = 4,
    Duplicate = 5,
    BadValue = 6,
}

/// Kind of entity a lookup or insert was aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Checkable,
    Library,
    Variant,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EntityKind::Checkable => "Checkable",
            EntityKind::Library => "Library",
            EntityKind::Variant => "Checkable variant",
        };
        write!(f, "{}", label)
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: EntityKind, key: String },

    #[error("{entity} with key {key} already exists")]
    AlreadyExists { entity: EntityKind, key: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(entity: EntityKind, key: impl Into<String>) -> Self {
        AppError::NotFound { entity, key: key.into() }
    }

    pub fn already_exists(entity: EntityKind, key: impl Into<String>) -> Self {
        AppError::AlreadyExists { entity, key: key.into() }
    }
}

/// Render an optional catalog code for messages; an absent code is still a key.
pub fn display_code(code: Option<&str>) -> String {
    code.map(str::to_string).unwrap_or_else(|| "<none>".to_string())
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, code, message) = match &self {
            AppError::NotFound { entity, .. } => {
                let code = match entity {
                    EntityKind::Checkable => ErrorCode::NoSuchCheckable,
                    EntityKind::Library => ErrorCode::NoSuchLibrary,
                    EntityKind::Variant => ErrorCode::NoSuchVariant,
                };
                (StatusCode::NOT_FOUND, code, message)
            }
            AppError::AlreadyExists { .. } => (StatusCode::CONFLICT, ErrorCode::Duplicate, message),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, message),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
