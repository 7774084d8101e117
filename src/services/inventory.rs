//! Availability queries across branches

use crate::{
    error::AppResult,
    models::{CheckableAmount, LibraryAvailableCheckouts},
};

use super::{catalog::CatalogService, libraries::LibraryService};

#[derive(Clone)]
pub struct InventoryService {
    libraries: LibraryService,
    catalog: CatalogService,
}

impl InventoryService {
    pub fn new(libraries: LibraryService, catalog: CatalogService) -> Self {
        Self { libraries, catalog }
    }

    /// Stock of one item at one branch.
    ///
    /// Fails when the branch or the catalog code is unknown. A known code the
    /// branch does not stock yields an amount of 0.
    pub fn get_checkable_amount(&self, library_name: &str, code: &str) -> AppResult<CheckableAmount> {
        let library = self.libraries.get_by_name(library_name)?;
        let checkable = self.catalog.get_by_code(code)?;

        Ok(library
            .checkables
            .into_iter()
            .find(|ca| ca.checkable.has_code(Some(code)))
            .unwrap_or_else(|| CheckableAmount::new(checkable, 0)))
    }

    /// Branches holding at least one available copy of `code`, with the summed
    /// count per branch. An unknown code gives an empty list.
    pub fn get_libraries_with_available_checkout(&self, code: &str) -> AppResult<Vec<LibraryAvailableCheckouts>> {
        let libraries = self.libraries.list()?;

        let available = libraries
            .into_iter()
            .filter_map(|library| {
                let count: u64 = library
                    .checkables
                    .iter()
                    .filter(|ca| ca.amount > 0 && ca.checkable.has_code(Some(code)))
                    .map(|ca| u64::from(ca.amount))
                    .sum();
                (count > 0).then(|| LibraryAvailableCheckouts::new(count, library.name))
            })
            .collect::<Vec<_>>();

        tracing::debug!(code, branches = available.len(), "Availability query");
        Ok(available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, EntityKind};
    use crate::models::{Checkable, Library, MediaType};
    use crate::repository::Repository;

    struct Fixture {
        catalog: CatalogService,
        libraries: LibraryService,
        inventory: InventoryService,
    }

    fn fixture() -> Fixture {
        let repository = Repository::in_memory();
        let catalog = CatalogService::new(repository.clone());
        let libraries = LibraryService::new(repository, catalog.clone());
        let inventory = InventoryService::new(libraries.clone(), catalog.clone());

        let whale = catalog
            .save(Checkable::media("1-0", "The White Whale", "Melvin H", MediaType::Book))
            .unwrap();
        catalog.save(Checkable::science_kit("2-0", "Anatomy Model")).unwrap();

        let mut central = Library::new("Central");
        central.stock(whale.clone(), 3);
        libraries.save(central).unwrap();

        let mut east = Library::new("East");
        east.stock(whale, 0);
        libraries.save(east).unwrap();

        Fixture {
            catalog,
            libraries,
            inventory,
        }
    }

    #[test]
    fn test_amount_for_stocked_item() {
        let f = fixture();
        let amount = f.inventory.get_checkable_amount("Central", "1-0").unwrap();
        assert_eq!(amount.amount, 3);
        assert_eq!(amount.checkable.title.as_deref(), Some("The White Whale"));
    }

    #[test]
    fn test_amount_for_known_but_unstocked_item_is_zero() {
        let f = fixture();
        let amount = f.inventory.get_checkable_amount("Central", "2-0").unwrap();
        assert_eq!(amount.amount, 0);
        assert_eq!(amount.checkable.code(), Some("2-0"));

        let explicit_zero = f.inventory.get_checkable_amount("East", "1-0").unwrap();
        assert_eq!(explicit_zero.amount, 0);
    }

    #[test]
    fn test_amount_unknown_code_fails() {
        let f = fixture();
        assert!(matches!(
            f.inventory.get_checkable_amount("Central", "9-9"),
            Err(AppError::NotFound { entity: EntityKind::Checkable, .. })
        ));
    }

    #[test]
    fn test_amount_unknown_library_fails() {
        let f = fixture();
        assert!(matches!(
            f.inventory.get_checkable_amount("West", "1-0"),
            Err(AppError::NotFound { entity: EntityKind::Library, .. })
        ));
    }

    #[test]
    fn test_available_skips_empty_branches() {
        let f = fixture();
        let available = f.inventory.get_libraries_with_available_checkout("1-0").unwrap();
        assert_eq!(available, vec![LibraryAvailableCheckouts::new(3, "Central")]);
    }

    #[test]
    fn test_available_sums_split_entries() {
        let f = fixture();
        let whale = f.catalog.get_by_code("1-0").unwrap();
        let mut north = Library::new("North");
        north.checkables.push(CheckableAmount::new(whale.clone(), 2));
        north.checkables.push(CheckableAmount::new(whale, 4));
        f.libraries.save(north).unwrap();

        let available = f.inventory.get_libraries_with_available_checkout("1-0").unwrap();
        assert_eq!(
            available,
            vec![
                LibraryAvailableCheckouts::new(3, "Central"),
                LibraryAvailableCheckouts::new(6, "North"),
            ]
        );
        assert!(available.iter().all(|a| a.available > 0));
    }

    #[test]
    fn test_available_unknown_code_is_empty() {
        let f = fixture();
        assert!(f.inventory.get_libraries_with_available_checkout("9-9").unwrap().is_empty());
    }

    #[test]
    fn test_available_with_no_branches() {
        let repository = Repository::in_memory();
        let catalog = CatalogService::new(repository.clone());
        let inventory = InventoryService::new(LibraryService::new(repository, catalog.clone()), catalog);
        assert!(inventory.get_libraries_with_available_checkout("1-0").unwrap().is_empty());
    }
}
