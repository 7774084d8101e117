//! Checkable catalog service

use std::sync::Arc;

use crate::{
    error::{display_code, AppError, AppResult, EntityKind},
    models::{Checkable, CheckableVariant},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All catalog items
    pub fn list(&self) -> AppResult<Vec<Arc<Checkable>>> {
        self.repository.checkables.find_all()
    }

    /// Get an item by catalog code
    pub fn get_by_code(&self, code: &str) -> AppResult<Arc<Checkable>> {
        tracing::debug!(code, "Catalog lookup");
        self.repository
            .checkables
            .find_by_code(Some(code))?
            .ok_or_else(|| AppError::not_found(EntityKind::Checkable, code))
    }

    /// Get the first item of a variant
    pub fn get_by_variant(&self, variant: CheckableVariant) -> AppResult<Arc<Checkable>> {
        self.repository
            .checkables
            .find_by_variant(variant)?
            .ok_or_else(|| AppError::not_found(EntityKind::Variant, variant.as_str()))
    }

    /// Insert a new item; the code, even when absent, must be unused
    pub fn save(&self, checkable: Checkable) -> AppResult<Arc<Checkable>> {
        let code = display_code(checkable.code());
        if self.repository.checkables.find_by_code(checkable.code())?.is_some() {
            tracing::warn!("Catalog save rejected: code {} already exists", code);
            return Err(AppError::already_exists(EntityKind::Checkable, code));
        }
        let saved = self.repository.checkables.save(checkable)?;
        tracing::info!("Catalog item {} saved", code);
        Ok(saved)
    }
}
