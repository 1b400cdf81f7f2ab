//! Catalog error types.

use thiserror::Error;

/// Errors raised while building or loading an item catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data table file could not be read.
    #[error("could not read item data table: {0}")]
    Io(#[from] std::io::Error),

    /// The data table is not valid YAML for the expected shape.
    #[error("could not parse item data table: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Two rows share the same key.
    #[error("item '{0}' already registered")]
    DuplicateKey(String),

    /// A row violates a definition constraint.
    #[error("invalid item definition '{key}': {reason}")]
    InvalidDefinition {
        /// Key of the offending row (may be empty).
        key: String,
        /// What is wrong with it.
        reason: String,
    },
}
