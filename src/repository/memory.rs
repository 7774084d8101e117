//! In-memory stores. Iteration order is insertion order.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;

use super::{CheckableStore, LibraryStore};
use crate::{
    error::{display_code, AppError, AppResult, EntityKind},
    models::{Checkable, CheckableVariant, Library},
};

fn poisoned<T>(_: T) -> AppError {
    AppError::Internal("store lock poisoned".to_string())
}

#[derive(Default)]
pub struct InMemoryCheckableStore {
    items: RwLock<Vec<Arc<Checkable>>>,
}

impl CheckableStore for InMemoryCheckableStore {
    fn find_all(&self) -> AppResult<Vec<Arc<Checkable>>> {
        Ok(self.items.read().map_err(poisoned)?.clone())
    }

    fn find_by_code(&self, code: Option<&str>) -> AppResult<Option<Arc<Checkable>>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.iter().find(|c| c.has_code(code)).cloned())
    }

    fn find_by_variant(&self, variant: CheckableVariant) -> AppResult<Option<Arc<Checkable>>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.iter().find(|c| c.variant() == variant).cloned())
    }

    fn save(&self, checkable: Checkable) -> AppResult<Arc<Checkable>> {
        let mut items = self.items.write().map_err(poisoned)?;
        if items.iter().any(|c| c.has_code(checkable.code())) {
            return Err(AppError::already_exists(
                EntityKind::Checkable,
                display_code(checkable.code()),
            ));
        }
        let checkable = Arc::new(checkable);
        items.push(checkable.clone());
        Ok(checkable)
    }
}

#[derive(Default)]
pub struct InMemoryLibraryStore {
    libraries: RwLock<IndexMap<String, Library>>,
}

impl LibraryStore for InMemoryLibraryStore {
    fn find_all(&self) -> AppResult<Vec<Library>> {
        let libraries = self.libraries.read().map_err(poisoned)?;
        Ok(libraries.values().cloned().collect())
    }

    fn find_by_name(&self, name: &str) -> AppResult<Option<Library>> {
        let libraries = self.libraries.read().map_err(poisoned)?;
        Ok(libraries.get(name).cloned())
    }

    fn save(&self, library: Library) -> AppResult<()> {
        let mut libraries = self.libraries.write().map_err(poisoned)?;
        if libraries.contains_key(&library.name) {
            return Err(AppError::already_exists(EntityKind::Library, library.name));
        }
        libraries.insert(library.name.clone(), library);
        Ok(())
    }
}
