//! Bookshelf Catalog - the in-memory record collection
//!
//! This module provides the [`Catalog`] contract, its plain in-memory
//! implementation, and a logging decorator that wraps any implementation
//! transparently.
//!
//! # Architecture
//!
//! ```text
//! CatalogManager
//!     │
//!     ▼
//! LoggingCatalog<C>   ← optional, forwards every call + emits one event
//!     │
//!     ▼
//! InMemoryCatalog     ← Vec<Record>, insertion order preserved
//! ```
//!
//! Absence of a match is never an error: removal reports `bool`, queries
//! report an empty `Vec`.

mod logging;
mod memory;

pub use logging::LoggingCatalog;
pub use memory::InMemoryCatalog;

use crate::record::Record;

/// The catalog contract. Both the plain collection and the logging decorator
/// implement it, so a decorator can wrap either the base implementation or
/// another decorator without callers noticing.
pub trait Catalog {
    /// Append a record to the end of the catalog. Never fails; duplicates
    /// are permitted.
    fn add(&mut self, record: Record);

    /// Remove the first record (in current order) whose title equals `title`
    /// exactly, case-sensitive. Returns `false` and leaves the catalog
    /// untouched when no title matches.
    fn remove_by_title(&mut self, title: &str) -> bool;

    /// A defensive copy of the current contents in insertion order. Callers
    /// may mutate the returned vec freely.
    fn list_all(&self) -> Vec<Record>;

    /// Every record for which `predicate` holds, relative order preserved.
    fn find(&self, predicate: &dyn Fn(&Record) -> bool) -> Vec<Record>;
}
