//! Data models for the circulation server

pub mod checkable;
pub mod library;
pub mod views;

// Re-export commonly used types
pub use checkable::{Checkable, CheckableKind, CheckableVariant, MediaType};
pub use library::{CheckableAmount, Checkout, Library, LibraryCard, Patron};
pub use views::{LibraryAvailableCheckouts, OverdueCheckout};
