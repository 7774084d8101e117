//! Overdue checkout scanning

use chrono::{DateTime, Utc};

use crate::{error::AppResult, models::OverdueCheckout};

use super::libraries::LibraryService;

#[derive(Clone)]
pub struct OverdueService {
    libraries: LibraryService,
}

impl OverdueService {
    pub fn new(libraries: LibraryService) -> Self {
        Self { libraries }
    }

    /// Checkouts at a branch whose due date is strictly before `reference_time`,
    /// in card then checkout order
    pub fn get_overdue_checkouts(
        &self,
        library_name: &str,
        reference_time: DateTime<Utc>,
    ) -> AppResult<Vec<OverdueCheckout>> {
        let library = self.libraries.get_by_name(library_name)?;

        let overdue = library
            .library_cards
            .into_iter()
            .flat_map(|card| {
                let patron = card.patron;
                card.checkouts
                    .into_iter()
                    .filter(move |checkout| checkout.is_overdue_at(reference_time))
                    .map(move |checkout| OverdueCheckout {
                        patron: patron.clone(),
                        checkout,
                    })
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            library = library_name,
            %reference_time,
            overdue = overdue.len(),
            "Overdue scan"
        );
        Ok(overdue)
    }
}
