//! Command handlers for the slot inventory context.
//!
//! Each handler loads the aggregate, executes the command, persists the
//! resulting events and then notifies observers. Observers never hear about
//! events that failed to persist.

use haversack_catalog::ItemCatalog;
use haversack_core::aggregate::AggregateRoot;
use haversack_core::clock::Clock;
use haversack_core::error::DomainError;
use haversack_core::repository::{EventRepository, StoredEvent};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::application::observers::InventoryObservers;
use crate::domain::aggregates::Inventory;
use crate::domain::commands::{
    AddItem, CombineStacks, CreateInventory, DropItem, RemoveItem, RemoveSlot, SplitStack,
    SwapSlots, UseItem,
};
use crate::domain::container::{AddOutcome, DroppedItem};
use crate::domain::events::{InventoryEvent, InventoryEventKind, ItemUsed};
use crate::domain::stack::ItemStack;

/// Result of a successfully handled command.
#[derive(Debug)]
pub struct InventoryCommandResult<T = ()> {
    /// The aggregate ID affected by the command.
    pub aggregate_id: Uuid,
    /// The stored events produced and persisted. Empty for a no-op.
    pub stored_events: Vec<StoredEvent>,
    /// What the command did.
    pub outcome: T,
}

/// Reconstitutes an `Inventory` from stored events.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if event deserialization fails.
pub(crate) fn reconstitute(
    inventory_id: Uuid,
    existing_events: &[StoredEvent],
) -> Result<Inventory, DomainError> {
    let mut inventory = Inventory::new(inventory_id);
    for stored in existing_events {
        let kind: InventoryEventKind = stored.decode_payload()?;
        inventory.apply(&InventoryEvent {
            metadata: stored.metadata(),
            kind,
        });
    }
    Ok(inventory)
}

/// Loads and reconstitutes an existing inventory.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if the stream is empty.
pub(crate) async fn load(
    inventory_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<Inventory, DomainError> {
    let existing_events = repo.load_events(inventory_id).await?;
    if existing_events.is_empty() {
        return Err(DomainError::AggregateNotFound(inventory_id));
    }
    reconstitute(inventory_id, &existing_events)
}

async fn commit<T>(
    mut inventory: Inventory,
    outcome: T,
    repo: &dyn EventRepository,
    observers: &InventoryObservers,
) -> Result<InventoryCommandResult<T>, DomainError> {
    let stored_events = inventory.pending_stored_events();
    if stored_events.is_empty() {
        debug!(inventory_id = %inventory.id, "command changed nothing");
    } else {
        repo.append_events(inventory.id, inventory.version(), &stored_events)
            .await?;
        observers.notify(inventory.uncommitted_events());
        inventory.clear_uncommitted_events();
    }

    Ok(InventoryCommandResult {
        aggregate_id: inventory.id,
        stored_events,
        outcome,
    })
}

/// Handles the `CreateInventory` command.
///
/// # Errors
///
/// Returns `DomainError::Conflict` if the stream already has events, or
/// `DomainError` if loading or appending fails.
#[instrument(skip_all, fields(inventory_id = %command.inventory_id))]
pub async fn handle_create_inventory(
    command: &CreateInventory,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    observers: &InventoryObservers,
) -> Result<InventoryCommandResult, DomainError> {
    let existing_events = repo.load_events(command.inventory_id).await?;
    if !existing_events.is_empty() {
        return Err(DomainError::Conflict(format!(
            "inventory {} already exists",
            command.inventory_id
        )));
    }
    let mut inventory = Inventory::new(command.inventory_id);

    inventory.create(command.config, command.correlation_id, clock)?;

    commit(inventory, (), repo, observers).await
}

/// Handles the `AddItem` command: resolves the key through the catalog and
/// adds the items.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an unknown key,
/// `DomainError::Conflict` if the inventory is full, or `DomainError` if
/// loading or appending fails.
#[instrument(skip_all, fields(inventory_id = %command.inventory_id, item = %command.item_key))]
pub async fn handle_add_item(
    command: &AddItem,
    catalog: &dyn ItemCatalog,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    observers: &InventoryObservers,
) -> Result<InventoryCommandResult<AddOutcome>, DomainError> {
    let item = catalog.lookup(&command.item_key).ok_or_else(|| {
        DomainError::Validation(format!("unknown item '{}'", command.item_key))
    })?;
    let mut inventory = load(command.inventory_id, repo).await?;

    let outcome = inventory.add_item(
        item,
        command.quantity,
        command.origin,
        command.correlation_id,
        clock,
    )?;

    commit(inventory, outcome, repo, observers).await
}

/// Handles the `RemoveItem` command. The outcome is the number of units
/// removed.
///
/// # Errors
///
/// Returns `DomainError` if loading or appending fails.
#[instrument(skip_all, fields(inventory_id = %command.inventory_id, item = %command.item_key))]
pub async fn handle_remove_item(
    command: &RemoveItem,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    observers: &InventoryObservers,
) -> Result<InventoryCommandResult<u32>, DomainError> {
    let mut inventory = load(command.inventory_id, repo).await?;

    let removed = inventory.remove_item(
        &command.item_key,
        command.quantity,
        command.correlation_id,
        clock,
    )?;

    commit(inventory, removed, repo, observers).await
}

/// Handles the `RemoveSlot` command. The outcome is what the slot held.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an invalid slot, or `DomainError`
/// if loading or appending fails.
#[instrument(skip_all, fields(inventory_id = %command.inventory_id, slot = command.slot))]
pub async fn handle_remove_slot(
    command: &RemoveSlot,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    observers: &InventoryObservers,
) -> Result<InventoryCommandResult<Option<ItemStack>>, DomainError> {
    let mut inventory = load(command.inventory_id, repo).await?;

    let removed = inventory.remove_slot(command.slot, command.correlation_id, clock)?;

    commit(inventory, removed, repo, observers).await
}

/// Handles the `DropItem` command. The outcome describes what the world
/// spawner should create.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an invalid or empty slot, or
/// `DomainError` if loading or appending fails.
#[instrument(skip_all, fields(inventory_id = %command.inventory_id, slot = command.slot))]
pub async fn handle_drop_item(
    command: &DropItem,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    observers: &InventoryObservers,
) -> Result<InventoryCommandResult<DroppedItem>, DomainError> {
    let mut inventory = load(command.inventory_id, repo).await?;

    let dropped = inventory.drop_item(
        command.slot,
        command.quantity,
        command.correlation_id,
        clock,
    )?;

    commit(inventory, dropped, repo, observers).await
}

/// Handles the `SwapSlots` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an invalid slot, or `DomainError`
/// if loading or appending fails.
#[instrument(skip_all, fields(inventory_id = %command.inventory_id, from = command.from_slot, to = command.to_slot))]
pub async fn handle_swap_slots(
    command: &SwapSlots,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    observers: &InventoryObservers,
) -> Result<InventoryCommandResult, DomainError> {
    let mut inventory = load(command.inventory_id, repo).await?;

    inventory.swap_slots(
        command.from_slot,
        command.to_slot,
        command.correlation_id,
        clock,
    )?;

    commit(inventory, (), repo, observers).await
}

/// Handles the `CombineStacks` command. The outcome is the number of units
/// moved.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an invalid slot, or `DomainError`
/// if loading or appending fails.
#[instrument(skip_all, fields(inventory_id = %command.inventory_id, source = command.source_slot, target = command.target_slot))]
pub async fn handle_combine_stacks(
    command: &CombineStacks,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    observers: &InventoryObservers,
) -> Result<InventoryCommandResult<u32>, DomainError> {
    let mut inventory = load(command.inventory_id, repo).await?;

    let moved = inventory.combine_stacks(
        command.source_slot,
        command.target_slot,
        command.correlation_id,
        clock,
    )?;

    commit(inventory, moved, repo, observers).await
}

/// Handles the `SplitStack` command. The outcome is the slot of the new
/// stack.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a bad source or quantity,
/// `DomainError::Conflict` when no slot is empty, or `DomainError` if
/// loading or appending fails.
#[instrument(skip_all, fields(inventory_id = %command.inventory_id, source = command.source_slot))]
pub async fn handle_split_stack(
    command: &SplitStack,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    observers: &InventoryObservers,
) -> Result<InventoryCommandResult<usize>, DomainError> {
    let mut inventory = load(command.inventory_id, repo).await?;

    let target_slot = inventory.split_stack(
        command.source_slot,
        command.quantity,
        command.correlation_id,
        clock,
    )?;

    commit(inventory, target_slot, repo, observers).await
}

/// Handles the `UseItem` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an invalid or empty slot, or
/// `DomainError` if loading or appending fails.
#[instrument(skip_all, fields(inventory_id = %command.inventory_id, slot = command.slot))]
pub async fn handle_use_item(
    command: &UseItem,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    observers: &InventoryObservers,
) -> Result<InventoryCommandResult<ItemUsed>, DomainError> {
    let mut inventory = load(command.inventory_id, repo).await?;

    let used = inventory.use_item(command.slot, command.correlation_id, clock)?;

    commit(inventory, used, repo, observers).await
}
