//! Library registry service

use crate::{
    error::{AppError, AppResult, EntityKind},
    models::{library::CreateLibrary, Library, Patron},
    repository::Repository,
};

use super::catalog::CatalogService;

#[derive(Clone)]
pub struct LibraryService {
    repository: Repository,
    catalog: CatalogService,
}

impl LibraryService {
    pub fn new(repository: Repository, catalog: CatalogService) -> Self {
        Self { repository, catalog }
    }

    /// All branches, in registry order
    pub fn list(&self) -> AppResult<Vec<Library>> {
        self.repository.libraries.find_all()
    }

    /// Exact, case-sensitive lookup by name
    pub fn get_by_name(&self, name: &str) -> AppResult<Library> {
        tracing::debug!(name, "Library lookup");
        self.repository
            .libraries
            .find_by_name(name)?
            .ok_or_else(|| AppError::not_found(EntityKind::Library, name))
    }

    /// Insert a new branch
    pub fn save(&self, library: Library) -> AppResult<()> {
        if self.repository.libraries.find_by_name(&library.name)?.is_some() {
            tracing::warn!("Library save rejected: {} already exists", library.name);
            return Err(AppError::already_exists(EntityKind::Library, library.name));
        }
        let name = library.name.clone();
        self.repository.libraries.save(library)?;
        tracing::info!("Library {} saved", name);
        Ok(())
    }

    /// Build a branch from a create request, resolving item codes against the
    /// catalog, then save it. Nothing is stored if any code is unknown.
    pub fn create(&self, request: CreateLibrary) -> AppResult<Library> {
        let mut library = Library::new(request.name);

        for line in request.stock {
            let checkable = self.catalog.get_by_code(&line.code)?;
            library.stock(checkable, line.amount);
        }

        for card_request in request.library_cards {
            let mut checkouts = Vec::with_capacity(card_request.checkouts.len());
            for checkout in &card_request.checkouts {
                checkouts.push((self.catalog.get_by_code(&checkout.code)?, checkout));
            }
            let card = library.issue_card(Patron::new(card_request.patron_name));
            for (checkable, checkout) in checkouts {
                card.check_out(checkable, checkout.checkout_date, checkout.due_date);
            }
        }

        self.save(library.clone())?;
        Ok(library)
    }
}
