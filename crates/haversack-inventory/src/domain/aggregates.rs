//! Aggregate roots for the slot inventory context.

use std::sync::Arc;

use haversack_catalog::ItemDefinition;
use haversack_core::aggregate::AggregateRoot;
use haversack_core::clock::Clock;
use haversack_core::error::DomainError;
use haversack_core::event::EventMetadata;
use tracing::{debug, warn};
use uuid::Uuid;

use super::config::InventoryConfig;
use super::container::{AddOutcome, DroppedItem, InventoryContainer};
use super::error::InventoryError;
use super::events::{
    InventoryCreated, InventoryEvent, InventoryEventKind, ItemAdded, ItemDropped, ItemMoved,
    ItemOrigin, ItemUsed, ItemsRemoved, SlotCleared, StackSplit, StacksCombined,
};
use super::stack::ItemStack;

/// The aggregate root for one character's inventory.
///
/// Command methods check the request against a copy of the current slots and
/// record an event describing the result. Slots only change in
/// [`AggregateRoot::apply`], which replays the same container operation.
#[derive(Debug)]
pub struct Inventory {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// Slot contents; `None` until the inventory is created.
    container: Option<InventoryContainer>,
    /// Uncommitted events pending persistence.
    uncommitted_events: Vec<InventoryEvent>,
}

impl Inventory {
    /// Creates an empty aggregate with no history.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            container: None,
            uncommitted_events: Vec::new(),
        }
    }

    /// The slots, once the inventory has been created.
    #[must_use]
    pub fn container(&self) -> Option<&InventoryContainer> {
        self.container.as_ref()
    }

    /// Creates the inventory, producing an `InventoryCreated` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Conflict` if the inventory already exists.
    pub fn create(
        &mut self,
        config: InventoryConfig,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        if self.container.is_some() || !self.uncommitted_events.is_empty() {
            return Err(DomainError::Conflict(format!(
                "inventory {} already exists",
                self.id
            )));
        }
        self.record(
            InventoryEventKind::InventoryCreated(InventoryCreated {
                inventory_id: self.id,
                config,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Adds `quantity` units of an item, producing an `ItemAdded` event.
    ///
    /// Adding zero units records nothing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Conflict` if the inventory is full, or
    /// `DomainError::AggregateNotFound` if it was never created.
    pub fn add_item(
        &mut self,
        item: Arc<ItemDefinition>,
        quantity: u32,
        origin: ItemOrigin,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<AddOutcome, DomainError> {
        let mut preview = self.preview()?;
        if quantity == 0 {
            return Ok(AddOutcome::default());
        }
        let outcome = preview.add(ItemStack::new(Arc::clone(&item), quantity))?;
        debug!(
            inventory_id = %self.id,
            item = %item.key,
            placed = outcome.placed(),
            overflow = outcome.overflow,
            "item add accepted"
        );

        self.record(
            InventoryEventKind::ItemAdded(ItemAdded {
                inventory_id: self.id,
                item: ItemDefinition::clone(&item),
                quantity,
                origin,
                placements: outcome.placements.clone(),
                overflow: outcome.overflow,
            }),
            correlation_id,
            clock,
        );
        Ok(outcome)
    }

    /// Removes up to `quantity` units of a kind, producing an `ItemsRemoved`
    /// event. Returns the number removed.
    ///
    /// Removing a kind the inventory does not hold records nothing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AggregateNotFound` if the inventory was never
    /// created.
    pub fn remove_item(
        &mut self,
        item_key: &str,
        quantity: u32,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<u32, DomainError> {
        let mut preview = self.preview()?;
        let removed = preview.remove_quantity_of(item_key, quantity);
        if removed == 0 {
            return Ok(0);
        }

        self.record(
            InventoryEventKind::ItemsRemoved(ItemsRemoved {
                inventory_id: self.id,
                item_key: item_key.to_owned(),
                requested: quantity,
                removed,
            }),
            correlation_id,
            clock,
        );
        Ok(removed)
    }

    /// Empties a slot, producing a `SlotCleared` event. Returns what the slot
    /// held.
    ///
    /// Clearing an empty slot records nothing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an invalid slot index.
    pub fn remove_slot(
        &mut self,
        slot: usize,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<Option<ItemStack>, DomainError> {
        let mut preview = self.preview()?;
        let Some(removed) = preview.remove_by_slot(slot)? else {
            return Ok(None);
        };

        self.record(
            InventoryEventKind::SlotCleared(SlotCleared {
                inventory_id: self.id,
                slot,
                item_key: removed.key().to_owned(),
                quantity: removed.quantity,
            }),
            correlation_id,
            clock,
        );
        Ok(Some(removed))
    }

    /// Takes up to `quantity` units out of a slot for the world spawner,
    /// producing an `ItemDropped` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an invalid or empty slot or a
    /// zero quantity.
    pub fn drop_item(
        &mut self,
        slot: usize,
        quantity: u32,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<DroppedItem, DomainError> {
        let mut preview = self.preview()?;
        let dropped = preview.drop_from_slot(slot, quantity)?;

        self.record(
            InventoryEventKind::ItemDropped(ItemDropped {
                inventory_id: self.id,
                slot,
                item_key: dropped.item_key.clone(),
                quantity: dropped.quantity,
                spawn_class: dropped.spawn_class.clone(),
            }),
            correlation_id,
            clock,
        );
        Ok(dropped)
    }

    /// Exchanges two slots, producing an `ItemMoved` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either index is invalid.
    pub fn swap_slots(
        &mut self,
        from_slot: usize,
        to_slot: usize,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        let mut preview = self.preview()?;
        preview.swap(from_slot, to_slot)?;
        if from_slot == to_slot {
            return Ok(());
        }

        self.record(
            InventoryEventKind::ItemMoved(ItemMoved {
                inventory_id: self.id,
                from_slot,
                to_slot,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Moves what fits from one stack onto another of the same kind,
    /// producing a `StacksCombined` event. Returns the number moved.
    ///
    /// When nothing can move no event is recorded.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either index is invalid.
    pub fn combine_stacks(
        &mut self,
        source_slot: usize,
        target_slot: usize,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<u32, DomainError> {
        let mut preview = self.preview()?;
        let moved = preview.combine(source_slot, target_slot)?;
        if moved == 0 {
            return Ok(0);
        }

        self.record(
            InventoryEventKind::StacksCombined(StacksCombined {
                inventory_id: self.id,
                source_slot,
                target_slot,
                moved,
            }),
            correlation_id,
            clock,
        );
        Ok(moved)
    }

    /// Splits `quantity` units off a stack into the lowest empty slot,
    /// producing a `StackSplit` event. Returns the new stack's slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an invalid, empty or too small
    /// source, and `DomainError::Conflict` when no slot is empty.
    pub fn split_stack(
        &mut self,
        source_slot: usize,
        quantity: u32,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<usize, DomainError> {
        let mut preview = self.preview()?;
        let target_slot = preview.split_stack(source_slot, quantity)?;

        self.record(
            InventoryEventKind::StackSplit(StackSplit {
                inventory_id: self.id,
                source_slot,
                target_slot,
                quantity,
            }),
            correlation_id,
            clock,
        );
        Ok(target_slot)
    }

    /// Uses the item in a slot, producing an `ItemUsed` event.
    ///
    /// The slot is left as it is; consumers of the event decide what using
    /// the item does.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an invalid or empty slot.
    pub fn use_item(
        &mut self,
        slot: usize,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<ItemUsed, DomainError> {
        let container = self.existing()?;
        container.check_index(slot)?;
        let stack = container
            .slot(slot)
            .ok_or(InventoryError::EmptySlot(slot))?;
        let used = ItemUsed {
            inventory_id: self.id,
            slot,
            item_key: stack.key().to_owned(),
            quantity: stack.quantity,
            action: stack.item.action,
        };

        self.record(
            InventoryEventKind::ItemUsed(used.clone()),
            correlation_id,
            clock,
        );
        Ok(used)
    }

    fn existing(&self) -> Result<&InventoryContainer, DomainError> {
        self.container
            .as_ref()
            .ok_or(DomainError::AggregateNotFound(self.id))
    }

    fn preview(&self) -> Result<InventoryContainer, DomainError> {
        self.existing().cloned()
    }

    fn record(&mut self, kind: InventoryEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let metadata = EventMetadata::for_command(
            kind.event_type(),
            self.id,
            self.next_sequence_number(),
            correlation_id,
            clock.now(),
        );
        self.uncommitted_events.push(InventoryEvent { metadata, kind });
    }
}

/// Replays one event against the slots. Any disagreement between the event
/// and the replayed operation is logged; the replayed result wins.
fn replay(inventory_id: Uuid, container: &mut InventoryContainer, kind: &InventoryEventKind) {
    match kind {
        InventoryEventKind::ItemAdded(payload) => {
            let stack = ItemStack::new(Arc::new(payload.item.clone()), payload.quantity);
            match container.add(stack) {
                Ok(outcome) if outcome.placements != payload.placements => {
                    warn!(%inventory_id, item = %payload.item.key, "replayed add placed items differently");
                }
                Ok(_) => {}
                Err(err) => warn!(%inventory_id, error = %err, "replayed add rejected"),
            }
        }
        InventoryEventKind::ItemsRemoved(payload) => {
            let removed = container.remove_quantity_of(&payload.item_key, payload.requested);
            if removed != payload.removed {
                warn!(
                    %inventory_id,
                    item = %payload.item_key,
                    expected = payload.removed,
                    removed,
                    "replayed removal differs"
                );
            }
        }
        InventoryEventKind::SlotCleared(payload) => {
            if let Err(err) = container.remove_by_slot(payload.slot) {
                warn!(%inventory_id, error = %err, "replayed slot clear rejected");
            }
        }
        InventoryEventKind::ItemDropped(payload) => {
            if let Err(err) = container.take_from_slot(payload.slot, payload.quantity) {
                warn!(%inventory_id, error = %err, "replayed drop rejected");
            }
        }
        InventoryEventKind::ItemMoved(payload) => {
            if let Err(err) = container.swap(payload.from_slot, payload.to_slot) {
                warn!(%inventory_id, error = %err, "replayed swap rejected");
            }
        }
        InventoryEventKind::StacksCombined(payload) => {
            match container.combine(payload.source_slot, payload.target_slot) {
                Ok(moved) if moved != payload.moved => {
                    warn!(%inventory_id, expected = payload.moved, moved, "replayed combine differs");
                }
                Ok(_) => {}
                Err(err) => warn!(%inventory_id, error = %err, "replayed combine rejected"),
            }
        }
        InventoryEventKind::StackSplit(payload) => {
            match container.split_stack(payload.source_slot, payload.quantity) {
                Ok(target) if target != payload.target_slot => {
                    warn!(
                        %inventory_id,
                        expected = payload.target_slot,
                        target,
                        "replayed split landed in a different slot"
                    );
                }
                Ok(_) => {}
                Err(err) => warn!(%inventory_id, error = %err, "replayed split rejected"),
            }
        }
        InventoryEventKind::InventoryCreated(_) | InventoryEventKind::ItemUsed(_) => {}
    }
}

impl AggregateRoot for Inventory {
    type Event = InventoryEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        if let InventoryEventKind::InventoryCreated(payload) = &event.kind {
            if self.container.is_some() {
                warn!(inventory_id = %self.id, "inventory created twice, ignoring");
            } else {
                self.container = Some(InventoryContainer::new(payload.config));
            }
        } else if let Some(container) = self.container.as_mut() {
            replay(self.id, container, &event.kind);
        } else {
            warn!(
                inventory_id = %self.id,
                event_type = event.kind.event_type(),
                "event for an inventory that was never created"
            );
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}

#[cfg(test)]
mod tests {
    use haversack_core::event::DomainEvent;
    use haversack_test_support::{FixedClock, apple, door_key, fixed_now, torch};

    use super::*;
    use crate::domain::config::InventoryLayout;
    use crate::domain::events::{ITEM_ADDED_EVENT_TYPE, ITEM_USED_EVENT_TYPE};

    fn commit(inventory: &mut Inventory) {
        for event in inventory.uncommitted_events().to_vec() {
            inventory.apply(&event);
        }
        inventory.clear_uncommitted_events();
    }

    fn created(rows: u16, columns: u16, action_bar_slots: u16) -> Inventory {
        let clock = FixedClock(fixed_now());
        let mut inventory = Inventory::new(Uuid::new_v4());
        let layout = InventoryLayout::new(rows, columns, action_bar_slots).unwrap();
        inventory
            .create(InventoryConfig::with_layout(layout), Uuid::new_v4(), &clock)
            .unwrap();
        commit(&mut inventory);
        inventory
    }

    fn give(inventory: &mut Inventory, item: ItemDefinition, quantity: u32) {
        let clock = FixedClock(fixed_now());
        inventory
            .add_item(Arc::new(item), quantity, ItemOrigin::Granted, Uuid::new_v4(), &clock)
            .unwrap();
        commit(inventory);
    }

    fn quantities(inventory: &Inventory) -> Vec<u32> {
        inventory
            .container()
            .unwrap()
            .slots()
            .map(|slot| slot.map_or(0, |s| s.quantity))
            .collect()
    }

    #[test]
    fn test_create_produces_inventory_created_event() {
        // Arrange
        let inventory_id = Uuid::new_v4();
        let correlation_id = Uuid::new_v4();
        let clock = FixedClock(fixed_now());
        let mut inventory = Inventory::new(inventory_id);

        // Act
        inventory
            .create(InventoryConfig::default(), correlation_id, &clock)
            .unwrap();

        // Assert
        let events = inventory.uncommitted_events();
        assert_eq!(events.len(), 1);
        let meta = events[0].metadata();
        assert_eq!(meta.aggregate_id, inventory_id);
        assert_eq!(meta.sequence_number, 1);
        assert_eq!(meta.correlation_id, correlation_id);
        assert_eq!(meta.causation_id, correlation_id);
        assert_eq!(meta.occurred_at, fixed_now());
        assert!(inventory.container().is_none());

        commit(&mut inventory);
        assert_eq!(inventory.container().unwrap().slot_count(), 35);
        assert_eq!(inventory.version(), 1);
    }

    #[test]
    fn test_create_twice_is_conflict() {
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 1, 0);

        let result = inventory.create(InventoryConfig::default(), Uuid::new_v4(), &clock);

        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert!(inventory.uncommitted_events().is_empty());
    }

    #[test]
    fn test_add_item_records_placements_without_mutating_slots() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 2, 0);

        // Act
        let outcome = inventory
            .add_item(Arc::new(apple()), 3, ItemOrigin::PickedUp, Uuid::new_v4(), &clock)
            .unwrap();

        // Assert
        assert_eq!(outcome.placed(), 3);
        assert_eq!(quantities(&inventory), vec![0, 0]);

        let event = &inventory.uncommitted_events()[0];
        assert_eq!(event.event_type(), ITEM_ADDED_EVENT_TYPE);
        assert_eq!(event.metadata().sequence_number, 2);
        match &event.kind {
            InventoryEventKind::ItemAdded(payload) => {
                assert_eq!(payload.item.key, "apple");
                assert_eq!(payload.quantity, 3);
                assert_eq!(payload.origin, ItemOrigin::PickedUp);
                assert_eq!(payload.placements, outcome.placements);
            }
            other => panic!("expected ItemAdded, got {other:?}"),
        }

        commit(&mut inventory);
        assert_eq!(quantities(&inventory), vec![2, 1]);
    }

    #[test]
    fn test_add_item_when_full_returns_conflict_and_records_nothing() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 1, 0);
        give(&mut inventory, door_key(), 1);

        // Act
        let result =
            inventory.add_item(Arc::new(door_key()), 1, ItemOrigin::Granted, Uuid::new_v4(), &clock);

        // Assert
        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert!(inventory.uncommitted_events().is_empty());
    }

    #[test]
    fn test_add_zero_units_records_nothing() {
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 1, 0);

        let outcome = inventory
            .add_item(Arc::new(apple()), 0, ItemOrigin::Granted, Uuid::new_v4(), &clock)
            .unwrap();

        assert_eq!(outcome, AddOutcome::default());
        assert!(inventory.uncommitted_events().is_empty());
    }

    #[test]
    fn test_command_before_create_is_not_found() {
        let clock = FixedClock(fixed_now());
        let inventory_id = Uuid::new_v4();
        let mut inventory = Inventory::new(inventory_id);

        let result = inventory.swap_slots(0, 1, Uuid::new_v4(), &clock);

        assert!(matches!(result, Err(DomainError::AggregateNotFound(id)) if id == inventory_id));
    }

    #[test]
    fn test_remove_item_of_absent_kind_records_nothing() {
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 2, 0);
        give(&mut inventory, apple(), 1);

        let removed = inventory
            .remove_item("key", 3, Uuid::new_v4(), &clock)
            .unwrap();

        assert_eq!(removed, 0);
        assert!(inventory.uncommitted_events().is_empty());
    }

    #[test]
    fn test_remove_item_replays_to_same_slots() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 3, 0);
        give(&mut inventory, apple(), 5);

        // Act
        let removed = inventory
            .remove_item("apple", 3, Uuid::new_v4(), &clock)
            .unwrap();
        commit(&mut inventory);

        // Assert
        assert_eq!(removed, 3);
        assert_eq!(quantities(&inventory), vec![0, 1, 1]);
    }

    #[test]
    fn test_remove_slot_returns_contents_and_clears_on_apply() {
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 2, 0);
        give(&mut inventory, apple(), 2);

        let removed = inventory
            .remove_slot(0, Uuid::new_v4(), &clock)
            .unwrap()
            .unwrap();
        let nothing = inventory.remove_slot(1, Uuid::new_v4(), &clock).unwrap();
        commit(&mut inventory);

        assert_eq!(removed.quantity, 2);
        assert!(nothing.is_none());
        assert_eq!(quantities(&inventory), vec![0, 0]);
        assert_eq!(inventory.version(), 3);
    }

    #[test]
    fn test_remove_slot_out_of_range_is_validation() {
        let clock = FixedClock(fixed_now());
        let mut inventory = created(2, 2, 1);

        let result = inventory.remove_slot(5, Uuid::new_v4(), &clock);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_drop_item_reports_spawn_class() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 2, 1);
        give(&mut inventory, torch(), 4);

        // Act
        let dropped = inventory.drop_item(0, 3, Uuid::new_v4(), &clock).unwrap();
        commit(&mut inventory);

        // Assert
        assert_eq!(dropped.item_key, "torch");
        assert_eq!(dropped.quantity, 3);
        assert_eq!(dropped.spawn_class.as_deref(), Some("BP_Torch"));
        assert_eq!(quantities(&inventory), vec![1, 0, 0]);
    }

    #[test]
    fn test_drop_from_empty_slot_is_validation() {
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 2, 0);

        let result = inventory.drop_item(1, 1, Uuid::new_v4(), &clock);

        match result {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("slot 1 is empty")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_swap_slots_moves_into_action_bar() {
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 2, 1);
        give(&mut inventory, door_key(), 1);

        inventory.swap_slots(0, 2, Uuid::new_v4(), &clock).unwrap();
        commit(&mut inventory);

        let container = inventory.container().unwrap();
        assert!(container.is_empty_slot(0));
        assert!(container.is_action_bar_slot(2));
        assert_eq!(container.slot(2).unwrap().key(), "key");
    }

    #[test]
    fn test_combine_stacks_that_cannot_merge_records_nothing() {
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 2, 0);
        give(&mut inventory, apple(), 1);
        give(&mut inventory, door_key(), 1);

        let moved = inventory
            .combine_stacks(1, 0, Uuid::new_v4(), &clock)
            .unwrap();

        assert_eq!(moved, 0);
        assert!(inventory.uncommitted_events().is_empty());
    }

    #[test]
    fn test_split_then_combine_restores_stack() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 3, 0);
        give(&mut inventory, torch(), 5);

        // Act
        let target = inventory.split_stack(0, 2, Uuid::new_v4(), &clock).unwrap();
        commit(&mut inventory);
        let after_split = quantities(&inventory);
        let moved = inventory
            .combine_stacks(target, 0, Uuid::new_v4(), &clock)
            .unwrap();
        commit(&mut inventory);

        // Assert
        assert_eq!(target, 1);
        assert_eq!(after_split, vec![3, 2, 0]);
        assert_eq!(moved, 2);
        assert_eq!(quantities(&inventory), vec![5, 0, 0]);
    }

    #[test]
    fn test_use_item_reports_action_without_mutating() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 2, 0);
        give(&mut inventory, apple(), 2);

        // Act
        let used = inventory.use_item(0, Uuid::new_v4(), &clock).unwrap();
        commit(&mut inventory);

        // Assert
        assert_eq!(used.item_key, "apple");
        assert_eq!(used.quantity, 2);
        assert_eq!(used.action, haversack_catalog::ItemAction::Consume);
        assert_eq!(quantities(&inventory), vec![2, 0]);
        assert_eq!(inventory.version(), 3);
    }

    #[test]
    fn test_use_item_event_type() {
        let clock = FixedClock(fixed_now());
        let mut inventory = created(1, 1, 0);
        give(&mut inventory, door_key(), 1);

        inventory.use_item(0, Uuid::new_v4(), &clock).unwrap();

        assert_eq!(
            inventory.uncommitted_events()[0].event_type(),
            ITEM_USED_EVENT_TYPE
        );
    }
}
