//! Bookshelf library exports

pub mod catalog;
pub mod manager;
pub mod record;
pub mod vehicle;

pub use catalog::{Catalog, InMemoryCatalog, LoggingCatalog};
pub use manager::CatalogManager;
pub use record::Record;
pub use vehicle::{Vehicle, VehicleFactory};
