//! [`Record`] - one immutable catalog entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog entry. Equality is structural; two records with the same
/// fields are interchangeable and duplicates are permitted in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl Record {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Record {
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}",
            self.title, self.author, self.year
        )
    }
}
