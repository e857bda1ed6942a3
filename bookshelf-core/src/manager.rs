//! [`CatalogManager`] - façade translating primitive inputs into records.
//!
//! The manager depends on the [`Catalog`] trait, not a concrete type, so the
//! same call sites work whether the component underneath is the plain
//! in-memory catalog or a decorated one.

use crate::catalog::Catalog;
use crate::record::Record;

pub struct CatalogManager<C: Catalog> {
    catalog: C,
}

impl<C: Catalog> CatalogManager<C> {
    pub fn new(catalog: C) -> Self {
        CatalogManager { catalog }
    }

    /// Build a [`Record`] from primitives and store it. Input validation
    /// stays with the caller; the manager adds none of its own.
    pub fn add(&mut self, title: impl Into<String>, author: impl Into<String>, year: i32) {
        self.catalog.add(Record::new(title, author, year));
    }

    /// Remove the first record with exactly this title. `false` means no
    /// match, which is ordinary control flow here, not a failure.
    pub fn remove(&mut self, title: &str) -> bool {
        self.catalog.remove_by_title(title)
    }

    pub fn list_all(&self) -> Vec<Record> {
        self.catalog.list_all()
    }

    /// All records whose author matches `author` case-insensitively.
    pub fn search_by_author(&self, author: &str) -> Vec<Record> {
        let wanted = author.to_lowercase();
        self.catalog
            .find(&|r: &Record| r.author.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryCatalog, LoggingCatalog};
    use pretty_assertions::assert_eq;

    #[test]
    fn search_by_author_is_case_insensitive() {
        let mut manager = CatalogManager::new(InMemoryCatalog::new());
        manager.add("1984", "George Orwell", 1949);

        let hits = manager.search_by_author("george orwell");
        assert_eq!(hits, vec![Record::new("1984", "George Orwell", 1949)]);
        assert_eq!(manager.search_by_author("GEORGE ORWELL"), hits);
        assert_eq!(manager.search_by_author("Orwell"), Vec::<Record>::new());
    }

    #[test]
    fn works_identically_over_decorated_catalog() {
        let mut manager = CatalogManager::new(LoggingCatalog::new(InMemoryCatalog::new()));
        manager.add("Dune", "Frank Herbert", 1965);
        manager.add("Dune Messiah", "Frank Herbert", 1969);

        assert!(manager.remove("Dune"));
        assert_eq!(
            manager.list_all(),
            vec![Record::new("Dune Messiah", "Frank Herbert", 1969)]
        );
        assert_eq!(
            manager.search_by_author("frank herbert"),
            vec![Record::new("Dune Messiah", "Frank Herbert", 1969)]
        );
    }
}
