//! Storage collaborator contracts for the catalog and the branch registry

pub mod memory;
pub mod seed;

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Checkable, CheckableVariant, Library},
};

pub use memory::{InMemoryCheckableStore, InMemoryLibraryStore};

/// Catalog storage
#[cfg_attr(test, mockall::automock)]
pub trait CheckableStore: Send + Sync {
    fn find_all(&self) -> AppResult<Vec<Arc<Checkable>>>;

    fn find_by_code<'a>(&self, code: Option<&'a str>) -> AppResult<Option<Arc<Checkable>>>;

    /// First stored item of the given variant
    fn find_by_variant(&self, variant: CheckableVariant) -> AppResult<Option<Arc<Checkable>>>;

    /// Insert a new item.
    ///
    /// # Errors
    /// `AlreadyExists` when an item with the same code is present. The check and
    /// the insert happen atomically.
    fn save(&self, checkable: Checkable) -> AppResult<Arc<Checkable>>;
}

/// Branch registry storage
#[cfg_attr(test, mockall::automock)]
pub trait LibraryStore: Send + Sync {
    fn find_all(&self) -> AppResult<Vec<Library>>;

    fn find_by_name(&self, name: &str) -> AppResult<Option<Library>>;

    /// Insert a new branch.
    ///
    /// # Errors
    /// `AlreadyExists` when a branch with the same name is present. The check and
    /// the insert happen atomically.
    fn save(&self, library: Library) -> AppResult<()>;
}

/// Store handles shared by all services
#[derive(Clone)]
pub struct Repository {
    pub checkables: Arc<dyn CheckableStore>,
    pub libraries: Arc<dyn LibraryStore>,
}

impl Repository {
    pub fn new(checkables: Arc<dyn CheckableStore>, libraries: Arc<dyn LibraryStore>) -> Self {
        Self {
            checkables,
            libraries,
        }
    }

    /// Repository backed by empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCheckableStore::default()),
            Arc::new(InMemoryLibraryStore::default()),
        )
    }
}
