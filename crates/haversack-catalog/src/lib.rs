//! Haversack item catalog.
//!
//! Immutable item definitions keyed by a stable row key, the lookup seam the
//! inventory depends on, and loading of the YAML item data table.

pub mod application;
pub mod domain;

pub use application::loader::{load_catalog_from_path, load_catalog_from_str};
pub use domain::catalog::{InMemoryItemCatalog, ItemCatalog};
pub use domain::definition::{ItemAction, ItemDefinition};
pub use domain::error::CatalogError;
