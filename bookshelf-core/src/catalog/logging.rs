//! Logging decorator - adds per-call observability on top of any [`Catalog`]
//!
//! The decorator forwards every operation unchanged; the only observable
//! difference to the wrapped component is one emitted `tracing` event per
//! call. Mutating operations log their argument before forwarding, queries
//! log the result count after.

use tracing::info;

use crate::catalog::Catalog;
use crate::record::Record;

/// Wraps any catalog-compatible component. Holds no record data of its own,
/// and because it implements [`Catalog`] itself, decorators can stack.
#[derive(Debug)]
pub struct LoggingCatalog<C> {
    inner: C,
}

impl<C> LoggingCatalog<C> {
    pub fn new(inner: C) -> Self {
        LoggingCatalog { inner }
    }

    /// Unwrap, returning the inner component.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Catalog> Catalog for LoggingCatalog<C> {
    fn add(&mut self, record: Record) {
        info!("add: {}", record);
        self.inner.add(record);
    }

    fn remove_by_title(&mut self, title: &str) -> bool {
        info!("remove_by_title: {}", title);
        self.inner.remove_by_title(title)
    }

    fn list_all(&self) -> Vec<Record> {
        let records = self.inner.list_all();
        info!("list_all: {} items", records.len());
        records
    }

    fn find(&self, predicate: &dyn Fn(&Record) -> bool) -> Vec<Record> {
        let results = self.inner.find(predicate);
        info!("find: {} items", results.len());
        results
    }
}
