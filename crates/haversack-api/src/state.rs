//! Shared application state.

use std::fmt;
use std::sync::Arc;

use haversack_catalog::ItemCatalog;
use haversack_core::clock::Clock;
use haversack_core::repository::EventRepository;
use haversack_inventory::application::observers::InventoryObservers;
use haversack_inventory::domain::config::InventoryConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock for event timestamps.
    pub clock: Arc<dyn Clock>,
    /// Event repository for loading and persisting domain events.
    pub event_repository: Arc<dyn EventRepository>,
    /// Item definitions, loaded once at startup.
    pub catalog: Arc<dyn ItemCatalog>,
    /// Observers notified after every committed inventory command.
    pub observers: InventoryObservers,
    /// Settings for inventories created without an explicit layout.
    pub inventory_config: InventoryConfig,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("catalog_items", &self.catalog.keys().len())
            .field("observers", &self.observers)
            .field("inventory_config", &self.inventory_config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        event_repository: Arc<dyn EventRepository>,
        catalog: Arc<dyn ItemCatalog>,
        observers: InventoryObservers,
        inventory_config: InventoryConfig,
    ) -> Self {
        Self {
            clock,
            event_repository,
            catalog,
            observers,
            inventory_config,
        }
    }
}
