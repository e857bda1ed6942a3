//! Plain vec-backed catalog.

use crate::catalog::Catalog;
use crate::record::Record;

/// The base catalog: an ordered, growable sequence of records. Single-owner,
/// single-thread use; wrap it in an explicit lock if shared access is ever
/// needed.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    records: Vec<Record>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    fn remove_by_title(&mut self, title: &str) -> bool {
        match self.records.iter().position(|r| r.title == title) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    fn list_all(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn find(&self, predicate: &dyn Fn(&Record) -> bool) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }
}
