//! Start-up seed document: initial catalog and branches

use std::path::Path;

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{library::CreateLibrary, Checkable},
};

/// Seed file layout. Branch stock and checkouts reference catalog items by code.
#[derive(Debug, Default, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub checkables: Vec<Checkable>,
    #[serde(default)]
    pub libraries: Vec<CreateLibrary>,
}

impl SeedDocument {
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::BadRequest(format!("Invalid seed document: {}", e)))
    }

    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::Internal(format!("Cannot read seed file {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }
}
