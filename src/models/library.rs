//! Branches, their stock, and issued library cards

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::checkable::Checkable;

/// On-hand copies of one catalog item at one branch.
/// A zero amount means "known but unavailable", distinct from not stocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckableAmount {
    pub checkable: Arc<Checkable>,
    pub amount: u32,
}

impl CheckableAmount {
    pub fn new(checkable: Arc<Checkable>, amount: u32) -> Self {
        Self { checkable, amount }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Patron {
    pub id: Uuid,
    pub name: String,
}

impl Patron {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// One active loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Checkout {
    pub checkable: Arc<Checkable>,
    pub checkout_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

impl Checkout {
    /// Overdue means due strictly before the reference instant
    pub fn is_overdue_at(&self, reference_time: DateTime<Utc>) -> bool {
        self.due_date < reference_time
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LibraryCard {
    pub id: Uuid,
    pub patron: Patron,
    pub checkouts: Vec<Checkout>,
}

impl LibraryCard {
    pub fn check_out(
        &mut self,
        checkable: Arc<Checkable>,
        checkout_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> &Checkout {
        self.checkouts.push(Checkout {
            checkable,
            checkout_date,
            due_date,
        });
        &self.checkouts[self.checkouts.len() - 1]
    }
}

/// A branch of the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Library {
    pub name: String,
    #[serde(default)]
    pub checkables: Vec<CheckableAmount>,
    #[serde(default)]
    pub library_cards: Vec<LibraryCard>,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checkables: Vec::new(),
            library_cards: Vec::new(),
        }
    }

    /// Add stock for an item, merging into the existing entry for its code
    pub fn stock(&mut self, checkable: Arc<Checkable>, amount: u32) {
        match self
            .checkables
            .iter_mut()
            .find(|ca| ca.checkable.code == checkable.code)
        {
            Some(existing) => existing.amount = existing.amount.saturating_add(amount),
            None => self.checkables.push(CheckableAmount::new(checkable, amount)),
        }
    }

    pub fn issue_card(&mut self, patron: Patron) -> &mut LibraryCard {
        self.library_cards.push(LibraryCard {
            id: Uuid::new_v4(),
            patron,
            checkouts: Vec::new(),
        });
        let last = self.library_cards.len() - 1;
        &mut self.library_cards[last]
    }
}

/// One stock line of a create request, referencing the catalog by code
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateStock {
    pub code: String,
    pub amount: u32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCheckout {
    pub code: String,
    pub checkout_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLibraryCard {
    pub patron_name: String,
    #[serde(default)]
    pub checkouts: Vec<CreateCheckout>,
}

/// Create library request; item references are resolved against the catalog
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLibrary {
    pub name: String,
    #[serde(default)]
    pub stock: Vec<CreateStock>,
    #[serde(default)]
    pub library_cards: Vec<CreateLibraryCard>,
}
