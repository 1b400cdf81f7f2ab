//! The catalog lookup seam and its in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use super::definition::ItemDefinition;
use super::error::CatalogError;

/// Read-only lookup of item definitions by key.
///
/// The inventory never owns catalog data; it receives definitions through
/// this trait.
pub trait ItemCatalog: Send + Sync {
    /// Returns the definition registered under `key`.
    fn lookup(&self, key: &str) -> Option<Arc<ItemDefinition>>;

    /// Returns true if a definition is registered under `key`.
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// All registered keys, sorted.
    fn keys(&self) -> Vec<String>;
}

/// Catalog held entirely in memory, built once at startup.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemCatalog {
    items: HashMap<String, Arc<ItemDefinition>>,
}

impl InMemoryItemCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of definitions.
    ///
    /// # Errors
    ///
    /// Fails on the first duplicate key or invalid definition.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ItemDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.register(definition)?;
        }
        Ok(catalog)
    }

    /// Registers a new item definition.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateKey` if the key is taken, or
    /// `CatalogError::InvalidDefinition` if the definition fails validation.
    pub fn register(&mut self, definition: ItemDefinition) -> Result<(), CatalogError> {
        definition.validate()?;
        if self.items.contains_key(&definition.key) {
            return Err(CatalogError::DuplicateKey(definition.key));
        }
        self.items
            .insert(definition.key.clone(), Arc::new(definition));
        Ok(())
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemCatalog for InMemoryItemCatalog {
    fn lookup(&self, key: &str) -> Option<Arc<ItemDefinition>> {
        self.items.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.items.keys().cloned().collect();
        keys.sort();
        keys
    }
}
