//! Query handlers for the slot inventory context.
//!
//! This module contains query handlers that reconstitute aggregates
//! from stored events and return read-only view DTOs.

use haversack_catalog::ItemAction;
use haversack_core::aggregate::AggregateRoot;
use haversack_core::error::DomainError;
use haversack_core::repository::EventRepository;
use serde::Serialize;
use uuid::Uuid;

use crate::application::command_handlers;
use crate::domain::aggregates::Inventory;
use crate::domain::config::{FullnessRule, InventoryConfig};
use crate::domain::container::{InventoryContainer, SlotRecord};

/// Read-only view of one slot.
#[derive(Debug, Serialize)]
pub struct SlotView {
    /// Slot index.
    pub index: usize,
    /// Whether the slot belongs to the action bar.
    pub action_bar: bool,
    /// Catalog key, absent for an empty slot.
    pub item_key: Option<String>,
    /// Display name for the current quantity.
    pub display_name: Option<String>,
    /// Items in the slot.
    pub quantity: u32,
    /// The item's stack limit, 0 for an empty slot.
    pub max_stack_size: u32,
    /// The item's use action.
    pub action: Option<ItemAction>,
}

/// Read-only view of an inventory aggregate.
#[derive(Debug, Serialize)]
pub struct InventoryView {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Grid rows.
    pub rows: u16,
    /// Grid columns.
    pub columns: u16,
    /// Action-bar slots.
    pub action_bar_slots: u16,
    /// Whether items auto-stack.
    pub auto_stack: bool,
    /// The configured fullness rule.
    pub fullness_rule: FullnessRule,
    /// Whether the inventory reports full.
    pub is_full: bool,
    /// Combined weight of everything held.
    pub total_weight: f32,
    /// Every slot in index order.
    pub slots: Vec<SlotView>,
    /// Current version (event count).
    pub version: i64,
}

/// How much of one kind an inventory holds.
#[derive(Debug, Serialize)]
pub struct ItemCountView {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Catalog key.
    pub item_key: String,
    /// Number of slots holding the kind.
    pub slots: usize,
    /// Number of items across those slots.
    pub quantity: u32,
}

/// Serialized slot contents of an inventory.
#[derive(Debug, Serialize)]
pub struct InventorySnapshotView {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Settings needed to restore the snapshot.
    pub config: InventoryConfig,
    /// One record per slot in index order.
    pub slots: Vec<SlotRecord>,
    /// Version the snapshot was taken at.
    pub version: i64,
}

async fn load_created(
    inventory_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<(Inventory, InventoryContainer), DomainError> {
    let inventory = command_handlers::load(inventory_id, repo).await?;
    let container = inventory
        .container()
        .cloned()
        .ok_or(DomainError::AggregateNotFound(inventory_id))?;
    Ok((inventory, container))
}

/// Retrieves an inventory by its aggregate ID.
///
/// Loads all stored events for the aggregate, reconstitutes the inventory,
/// and returns a serializable view.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no events exist for the ID.
/// Returns `DomainError::Infrastructure` if event deserialization fails.
pub async fn get_inventory_by_id(
    inventory_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<InventoryView, DomainError> {
    let (inventory, container) = load_created(inventory_id, repo).await?;
    let config = container.config();

    let slots = container
        .slots()
        .enumerate()
        .map(|(index, slot)| SlotView {
            index,
            action_bar: container.is_action_bar_slot(index),
            item_key: slot.map(|s| s.key().to_owned()),
            display_name: slot.map(|s| s.display_name().to_owned()),
            quantity: slot.map_or(0, |s| s.quantity),
            max_stack_size: slot.map_or(0, |s| s.item.stack_limit()),
            action: slot.map(|s| s.item.action),
        })
        .collect();

    Ok(InventoryView {
        inventory_id,
        rows: config.layout.rows(),
        columns: config.layout.columns(),
        action_bar_slots: config.layout.action_bar_slots(),
        auto_stack: config.auto_stack,
        fullness_rule: config.fullness_rule,
        is_full: container.is_full(),
        total_weight: container.total_weight(),
        slots,
        version: inventory.version(),
    })
}

/// Counts one kind of item in an inventory.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no events exist for the ID.
pub async fn get_item_count(
    inventory_id: Uuid,
    item_key: &str,
    repo: &dyn EventRepository,
) -> Result<ItemCountView, DomainError> {
    let (_, container) = load_created(inventory_id, repo).await?;
    Ok(ItemCountView {
        inventory_id,
        item_key: item_key.to_owned(),
        slots: container.count_of(item_key),
        quantity: container.quantity_of(item_key),
    })
}

/// Takes a snapshot of an inventory's slots.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no events exist for the ID.
pub async fn get_inventory_snapshot(
    inventory_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<InventorySnapshotView, DomainError> {
    let (inventory, container) = load_created(inventory_id, repo).await?;
    Ok(InventorySnapshotView {
        inventory_id,
        config: *container.config(),
        slots: container.snapshot(),
        version: inventory.version(),
    })
}
