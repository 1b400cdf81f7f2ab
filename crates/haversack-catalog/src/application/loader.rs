//! Loads the item data table from YAML.
//!
//! The table is a single document with an `items` list:
//!
//! ```yaml
//! items:
//!   - key: apple
//!     title: Apple
//!     plural_title: Apples
//!     max_stack_size: 2
//!     action: consume
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::catalog::InMemoryItemCatalog;
use crate::domain::definition::ItemDefinition;
use crate::domain::error::CatalogError;

#[derive(Debug, Deserialize)]
struct DataTable {
    #[serde(default)]
    items: Vec<ItemDefinition>,
}

/// Parses a YAML data table into a catalog.
///
/// # Errors
///
/// Returns `CatalogError::Parse` for malformed YAML, and the `register`
/// errors for duplicate keys or invalid rows.
pub fn load_catalog_from_str(source: &str) -> Result<InMemoryItemCatalog, CatalogError> {
    let table: DataTable = serde_yaml::from_str(source)?;
    debug!(rows = table.items.len(), "parsed item data table");
    InMemoryItemCatalog::from_definitions(table.items)
}

/// Reads and parses a YAML data table from disk.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, otherwise the
/// errors of [`load_catalog_from_str`].
pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<InMemoryItemCatalog, CatalogError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let catalog = load_catalog_from_str(&source)?;
    info!(path = %path.display(), items = catalog.len(), "loaded item catalog");
    Ok(catalog)
}
