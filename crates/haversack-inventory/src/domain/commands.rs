//! Commands for the slot inventory context.

use haversack_core::command::Command;
use uuid::Uuid;

use super::config::InventoryConfig;
use super::events::ItemOrigin;

/// Command to create an empty inventory.
#[derive(Debug, Clone)]
pub struct CreateInventory {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Layout and stacking settings.
    pub config: InventoryConfig,
}

/// Command to add items by catalog key.
#[derive(Debug, Clone)]
pub struct AddItem {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Catalog key of the item.
    pub item_key: String,
    /// Units to add.
    pub quantity: u32,
    /// Where the items come from.
    pub origin: ItemOrigin,
}

/// Command to remove up to `quantity` items of one kind.
#[derive(Debug, Clone)]
pub struct RemoveItem {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Catalog key of the item.
    pub item_key: String,
    /// Units to remove.
    pub quantity: u32,
}

/// Command to empty one slot.
#[derive(Debug, Clone)]
pub struct RemoveSlot {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Slot to empty.
    pub slot: usize,
}

/// Command to drop items from a slot into the world.
#[derive(Debug, Clone)]
pub struct DropItem {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Slot to drop from.
    pub slot: usize,
    /// Units to drop.
    pub quantity: u32,
}

/// Command to exchange the contents of two slots.
#[derive(Debug, Clone)]
pub struct SwapSlots {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// First slot.
    pub from_slot: usize,
    /// Second slot.
    pub to_slot: usize,
}

/// Command to move items from one stack onto another of the same kind.
#[derive(Debug, Clone)]
pub struct CombineStacks {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Slot to take items from.
    pub source_slot: usize,
    /// Slot to put them on.
    pub target_slot: usize,
}

/// Command to split part of a stack into the lowest empty slot.
#[derive(Debug, Clone)]
pub struct SplitStack {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Slot to split.
    pub source_slot: usize,
    /// Units for the new stack.
    pub quantity: u32,
}

/// Command to use the item in a slot.
#[derive(Debug, Clone)]
pub struct UseItem {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The inventory identifier.
    pub inventory_id: Uuid,
    /// Slot holding the item.
    pub slot: usize,
}

macro_rules! impl_command {
    ($($command:ty => $name:literal),+ $(,)?) => {
        $(
            impl Command for $command {
                fn command_type(&self) -> &'static str {
                    $name
                }

                fn correlation_id(&self) -> Uuid {
                    self.correlation_id
                }

                fn aggregate_id(&self) -> Uuid {
                    self.inventory_id
                }
            }
        )+
    };
}

impl_command! {
    CreateInventory => "inventory.create_inventory",
    AddItem => "inventory.add_item",
    RemoveItem => "inventory.remove_item",
    RemoveSlot => "inventory.remove_slot",
    DropItem => "inventory.drop_item",
    SwapSlots => "inventory.swap_slots",
    CombineStacks => "inventory.combine_stacks",
    SplitStack => "inventory.split_stack",
    UseItem => "inventory.use_item",
}
