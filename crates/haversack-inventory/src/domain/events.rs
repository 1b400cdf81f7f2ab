//! Domain events for the slot inventory context.

use haversack_catalog::{ItemAction, ItemDefinition};
use haversack_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::InventoryConfig;
use super::container::SlotPlacement;

/// Event type identifier for [`InventoryCreated`].
pub const INVENTORY_CREATED_EVENT_TYPE: &str = "inventory.inventory_created";
/// Event type identifier for [`ItemAdded`].
pub const ITEM_ADDED_EVENT_TYPE: &str = "inventory.item_added";
/// Event type identifier for [`ItemsRemoved`].
pub const ITEMS_REMOVED_EVENT_TYPE: &str = "inventory.items_removed";
/// Event type identifier for [`SlotCleared`].
pub const SLOT_CLEARED_EVENT_TYPE: &str = "inventory.slot_cleared";
/// Event type identifier for [`ItemDropped`].
pub const ITEM_DROPPED_EVENT_TYPE: &str = "inventory.item_dropped";
/// Event type identifier for [`ItemMoved`].
pub const ITEM_MOVED_EVENT_TYPE: &str = "inventory.item_moved";
/// Event type identifier for [`StacksCombined`].
pub const STACKS_COMBINED_EVENT_TYPE: &str = "inventory.stacks_combined";
/// Event type identifier for [`StackSplit`].
pub const STACK_SPLIT_EVENT_TYPE: &str = "inventory.stack_split";
/// Event type identifier for [`ItemUsed`].
pub const ITEM_USED_EVENT_TYPE: &str = "inventory.item_used";

/// Where added items came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrigin {
    /// Handed over by game logic.
    #[default]
    Granted,
    /// Picked up from a pickup in the world.
    PickedUp,
    /// Spawned directly into the inventory.
    Spawned,
}

/// Emitted when an inventory is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryCreated {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Layout and stacking settings, fixed for the inventory's lifetime.
    pub config: InventoryConfig,
}

/// Emitted when items are added.
///
/// Carries the full definition so replay does not depend on the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemAdded {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Definition of the added item.
    pub item: ItemDefinition,
    /// Units requested.
    pub quantity: u32,
    /// Where the items came from.
    pub origin: ItemOrigin,
    /// Slots that received units.
    pub placements: Vec<SlotPlacement>,
    /// Units that did not fit.
    pub overflow: u32,
}

/// Emitted when items of one kind are removed by key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsRemoved {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// The removed kind.
    pub item_key: String,
    /// Units asked for.
    pub requested: u32,
    /// Units actually removed.
    pub removed: u32,
}

/// Emitted when a slot is emptied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCleared {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// The emptied slot.
    pub slot: usize,
    /// What the slot held.
    pub item_key: String,
    /// How many it held.
    pub quantity: u32,
}

/// Emitted when items leave a slot to be spawned into the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDropped {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Slot the items came from.
    pub slot: usize,
    /// The dropped kind.
    pub item_key: String,
    /// Units dropped.
    pub quantity: u32,
    /// Spawn representation for the world spawner.
    pub spawn_class: Option<String>,
}

/// Emitted when two slots exchange contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemMoved {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// First slot.
    pub from_slot: usize,
    /// Second slot.
    pub to_slot: usize,
}

/// Emitted when items move from one stack onto another of the same kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StacksCombined {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Slot the items left.
    pub source_slot: usize,
    /// Slot the items joined.
    pub target_slot: usize,
    /// Units moved.
    pub moved: u32,
}

/// Emitted when part of a stack is moved into a new slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackSplit {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Slot that was split.
    pub source_slot: usize,
    /// Slot holding the new stack.
    pub target_slot: usize,
    /// Units in the new stack.
    pub quantity: u32,
}

/// Emitted when an item in a slot is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemUsed {
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Slot the item was used from.
    pub slot: usize,
    /// The used kind.
    pub item_key: String,
    /// Quantity in the slot at the time of use.
    pub quantity: u32,
    /// The item's declared action.
    pub action: ItemAction,
}

/// Event payload variants for the slot inventory context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InventoryEventKind {
    /// The inventory was created.
    InventoryCreated(InventoryCreated),
    /// Items were added.
    ItemAdded(ItemAdded),
    /// Items of one kind were removed.
    ItemsRemoved(ItemsRemoved),
    /// A slot was emptied.
    SlotCleared(SlotCleared),
    /// Items were dropped into the world.
    ItemDropped(ItemDropped),
    /// Two slots exchanged contents.
    ItemMoved(ItemMoved),
    /// Two stacks were combined.
    StacksCombined(StacksCombined),
    /// A stack was split.
    StackSplit(StackSplit),
    /// An item was used.
    ItemUsed(ItemUsed),
}

impl InventoryEventKind {
    /// The event type identifier for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::InventoryCreated(_) => INVENTORY_CREATED_EVENT_TYPE,
            Self::ItemAdded(_) => ITEM_ADDED_EVENT_TYPE,
            Self::ItemsRemoved(_) => ITEMS_REMOVED_EVENT_TYPE,
            Self::SlotCleared(_) => SLOT_CLEARED_EVENT_TYPE,
            Self::ItemDropped(_) => ITEM_DROPPED_EVENT_TYPE,
            Self::ItemMoved(_) => ITEM_MOVED_EVENT_TYPE,
            Self::StacksCombined(_) => STACKS_COMBINED_EVENT_TYPE,
            Self::StackSplit(_) => STACK_SPLIT_EVENT_TYPE,
            Self::ItemUsed(_) => ITEM_USED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the slot inventory context.
#[derive(Debug, Clone)]
pub struct InventoryEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: InventoryEventKind,
}

impl DomainEvent for InventoryEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("InventoryEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_payload_round_trips_through_stored_event() {
        // Arrange
        let inventory_id = Uuid::new_v4();
        let event = InventoryEvent {
            metadata: EventMetadata::for_command(
                ITEM_ADDED_EVENT_TYPE,
                inventory_id,
                2,
                Uuid::new_v4(),
                Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
            ),
            kind: InventoryEventKind::ItemAdded(ItemAdded {
                inventory_id,
                item: ItemDefinition::new("apple", "Apple").with_max_stack_size(2),
                quantity: 3,
                origin: ItemOrigin::PickedUp,
                placements: vec![
                    SlotPlacement {
                        slot: 0,
                        added: 2,
                        quantity: 2,
                    },
                    SlotPlacement {
                        slot: 1,
                        added: 1,
                        quantity: 1,
                    },
                ],
                overflow: 0,
            }),
        };

        // Act
        let stored = event.to_stored_event();
        let kind: InventoryEventKind = stored.decode_payload().unwrap();

        // Assert
        assert_eq!(stored.event_type, ITEM_ADDED_EVENT_TYPE);
        assert_eq!(stored.sequence_number, 2);
        match kind {
            InventoryEventKind::ItemAdded(payload) => {
                assert_eq!(payload.item.key, "apple");
                assert_eq!(payload.item.max_stack_size, 2);
                assert_eq!(payload.origin, ItemOrigin::PickedUp);
                assert_eq!(payload.placements.len(), 2);
            }
            other => panic!("expected ItemAdded, got {other:?}"),
        }
    }

    #[test]
    fn test_event_type_matches_payload_variant() {
        let kind = InventoryEventKind::ItemMoved(ItemMoved {
            inventory_id: Uuid::new_v4(),
            from_slot: 0,
            to_slot: 3,
        });

        assert_eq!(kind.event_type(), "inventory.item_moved");
    }
}
