//! Business logic services

pub mod catalog;
pub mod inventory;
pub mod libraries;
pub mod overdue;

use crate::{error::AppResult, repository::seed::SeedDocument, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub libraries: libraries::LibraryService,
    pub inventory: inventory::InventoryService,
    pub overdue: overdue::OverdueService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        let catalog = catalog::CatalogService::new(repository.clone());
        let libraries = libraries::LibraryService::new(repository, catalog.clone());
        Self {
            inventory: inventory::InventoryService::new(libraries.clone(), catalog.clone()),
            overdue: overdue::OverdueService::new(libraries.clone()),
            catalog,
            libraries,
        }
    }

    /// Load a seed document through the regular save paths
    pub fn apply_seed(&self, seed: SeedDocument) -> AppResult<()> {
        let (items, branches) = (seed.checkables.len(), seed.libraries.len());
        for checkable in seed.checkables {
            self.catalog.save(checkable)?;
        }
        for library in seed.libraries {
            self.libraries.create(library)?;
        }
        tracing::info!("Seeded {} catalog items and {} libraries", items, branches);
        Ok(())
    }
}
