//! API clients for external services
//!
//! - Catalog: movie search, collections, movie detail and trailer keys

pub mod catalog;

pub use catalog::{CatalogClient, CatalogError, HttpCatalogClient};
