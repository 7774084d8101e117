//! Read-only reporting views

use serde::Serialize;
use utoipa::ToSchema;

use super::library::{Checkout, Patron};

/// A branch with copies of an item available to check out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LibraryAvailableCheckouts {
    pub available: u64,
    pub library_name: String,
}

impl LibraryAvailableCheckouts {
    pub fn new(available: u64, library_name: impl Into<String>) -> Self {
        Self {
            available,
            library_name: library_name.into(),
        }
    }
}

/// An overdue loan paired with its borrower
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OverdueCheckout {
    pub patron: Patron,
    pub checkout: Checkout,
}
