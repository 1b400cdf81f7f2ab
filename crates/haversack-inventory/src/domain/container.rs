//! The slot container: a fixed-length sequence of optional item stacks.
//!
//! Every operation either completes or is rejected before touching a slot.
//! No slot ever holds a zero-quantity stack; a stack that runs out becomes an
//! empty slot.

use std::sync::Arc;

use haversack_catalog::ItemCatalog;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::config::{FullnessRule, InventoryConfig, InventoryLayout};
use super::error::InventoryError;
use super::stack::ItemStack;

/// Units placed into one slot by an add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPlacement {
    /// Slot that received units.
    pub slot: usize,
    /// Units added to it.
    pub added: u32,
    /// Slot quantity after the add.
    pub quantity: u32,
}

/// Result of [`InventoryContainer::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOutcome {
    /// Slots that received units, in the order they were filled.
    pub placements: Vec<SlotPlacement>,
    /// Units that did not fit once the empty slots ran out.
    pub overflow: u32,
}

impl AddOutcome {
    /// Total units placed.
    #[must_use]
    pub fn placed(&self) -> u32 {
        self.placements.iter().map(|p| p.added).sum()
    }
}

/// Items taken out of a slot to be spawned into the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedItem {
    /// Slot the items came from.
    pub slot: usize,
    /// Catalog key of the items.
    pub item_key: String,
    /// How many were dropped.
    pub quantity: u32,
    /// Spawn representation for the world spawner.
    pub spawn_class: Option<String>,
}

/// One slot of a snapshot: an item key and a quantity, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Catalog key, `None` for an empty slot.
    pub item_key: Option<String>,
    /// Quantity, 0 for an empty slot.
    pub quantity: u32,
}

impl SlotRecord {
    /// Record for an empty slot.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            item_key: None,
            quantity: 0,
        }
    }

    /// Record for a slot holding `quantity` of `item_key`.
    pub fn holding(item_key: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_key: Some(item_key.into()),
            quantity,
        }
    }
}

/// A fixed number of slots, each empty or holding one stack.
#[derive(Debug, Clone)]
pub struct InventoryContainer {
    config: InventoryConfig,
    slots: Vec<Option<ItemStack>>,
}

impl InventoryContainer {
    /// Creates an inventory with every slot empty.
    #[must_use]
    pub fn new(config: InventoryConfig) -> Self {
        Self {
            slots: vec![None; config.layout.slot_count()],
            config,
        }
    }

    /// Rebuilds an inventory from a snapshot, resolving keys through the
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSnapshot` if the record count does not match the
    /// layout or a quantity exceeds its item's stack limit, and `UnknownItem`
    /// for a key the catalog does not know.
    pub fn restore(
        config: InventoryConfig,
        records: &[SlotRecord],
        catalog: &dyn ItemCatalog,
    ) -> Result<Self, InventoryError> {
        let slot_count = config.layout.slot_count();
        if records.len() != slot_count {
            return Err(InventoryError::InvalidSnapshot(format!(
                "expected {slot_count} slots, got {}",
                records.len()
            )));
        }

        let mut container = Self::new(config);
        for (index, record) in records.iter().enumerate() {
            let Some(key) = record.item_key.as_deref() else {
                continue;
            };
            if record.quantity == 0 {
                continue;
            }
            let item = catalog
                .lookup(key)
                .ok_or_else(|| InventoryError::UnknownItem(key.to_owned()))?;
            if record.quantity > item.stack_limit() {
                return Err(InventoryError::InvalidSnapshot(format!(
                    "slot {index} holds {} of '{key}' but the stack limit is {}",
                    record.quantity,
                    item.stack_limit()
                )));
            }
            container.slots[index] = Some(ItemStack::new(item, record.quantity));
        }
        Ok(container)
    }

    /// The settings the inventory was created with.
    #[must_use]
    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// The slot layout.
    #[must_use]
    pub fn layout(&self) -> &InventoryLayout {
        &self.config.layout
    }

    /// Total number of slots. Never changes.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The stack in a slot, `None` if the slot is empty or out of range.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Every slot in index order.
    pub fn slots(&self) -> impl Iterator<Item = Option<&ItemStack>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Returns true if the index belongs to the trailing action bar.
    #[must_use]
    pub fn is_action_bar_slot(&self, index: usize) -> bool {
        self.layout().action_bar_range().contains(&index)
    }

    /// Returns true if the index is valid and the slot holds nothing.
    #[must_use]
    pub fn is_empty_slot(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Lowest empty slot index.
    #[must_use]
    pub fn next_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Returns true if at least one slot is empty.
    #[must_use]
    pub fn has_empty_slot(&self) -> bool {
        self.next_empty_slot().is_some()
    }

    /// Returns true if the inventory is full under its fullness rule.
    ///
    /// With [`FullnessRule::EmptySlot`] this is simply "no empty slot", so an
    /// inventory whose slots are all occupied reports full even when some
    /// stack could take more of its own kind. With
    /// [`FullnessRule::StackHeadroom`] only stacks that would merge an add
    /// count as headroom.
    #[must_use]
    pub fn is_full(&self) -> bool {
        if self.has_empty_slot() {
            return false;
        }
        match self.config.fullness_rule {
            FullnessRule::EmptySlot => true,
            FullnessRule::StackHeadroom => !self
                .slots
                .iter()
                .flatten()
                .any(|stack| self.auto_stacks(stack) && stack.spare_capacity() > 0),
        }
    }

    /// Returns true if `add(stack)` would place at least one unit.
    #[must_use]
    pub fn accepts(&self, stack: &ItemStack) -> bool {
        if self.has_empty_slot() {
            return true;
        }
        match self.config.fullness_rule {
            FullnessRule::EmptySlot => false,
            FullnessRule::StackHeadroom => {
                self.auto_stacks(stack)
                    && self
                        .slots
                        .iter()
                        .flatten()
                        .any(|existing| existing.is_same_kind(stack) && existing.spare_capacity() > 0)
            }
        }
    }

    /// Lowest index holding the same kind as `stack`.
    #[must_use]
    pub fn index_of(&self, stack: &ItemStack) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|s| s.is_same_kind(stack)))
    }

    /// Number of *slots* holding the given kind, not the number of items.
    ///
    /// Use [`InventoryContainer::quantity_of`] for the item count.
    #[must_use]
    pub fn count_of(&self, key: &str) -> usize {
        self.slots.iter().flatten().filter(|s| s.is_kind(key)).count()
    }

    /// Total items of the given kind across all slots.
    #[must_use]
    pub fn quantity_of(&self, key: &str) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.is_kind(key))
            .fold(0u32, |total, s| total.saturating_add(s.quantity))
    }

    /// Combined weight of everything in the inventory.
    #[must_use]
    pub fn total_weight(&self) -> f32 {
        self.slots.iter().flatten().map(ItemStack::total_weight).sum()
    }

    /// Adds a stack.
    ///
    /// Auto-stacking items first top up existing stacks of their kind in
    /// slot order. Whatever is left goes into empty slots, lowest first, in
    /// chunks no larger than the item's stack limit. Units that find no empty
    /// slot are reported as `overflow` and not placed.
    ///
    /// # Errors
    ///
    /// Returns `InventoryFull` if the inventory does not accept the stack;
    /// nothing is changed in that case.
    pub fn add(&mut self, stack: ItemStack) -> Result<AddOutcome, InventoryError> {
        if !self.accepts(&stack) {
            return Err(InventoryError::InventoryFull);
        }

        let mut outcome = AddOutcome::default();
        let mut remaining = stack.quantity;

        if self.auto_stacks(&stack) {
            for (index, slot) in self.slots.iter_mut().enumerate() {
                if remaining == 0 {
                    break;
                }
                let Some(existing) = slot else {
                    continue;
                };
                if !existing.is_same_kind(&stack) {
                    continue;
                }
                let moved = remaining.min(existing.spare_capacity());
                if moved == 0 {
                    continue;
                }
                existing.quantity += moved;
                remaining -= moved;
                outcome.placements.push(SlotPlacement {
                    slot: index,
                    added: moved,
                    quantity: existing.quantity,
                });
            }
        }

        let limit = stack.item.stack_limit();
        while remaining > 0 {
            let Some(index) = self.next_empty_slot() else {
                break;
            };
            let chunk = remaining.min(limit);
            self.slots[index] = Some(ItemStack::new(Arc::clone(&stack.item), chunk));
            remaining -= chunk;
            outcome.placements.push(SlotPlacement {
                slot: index,
                added: chunk,
                quantity: chunk,
            });
        }

        if remaining > 0 {
            warn!(
                item = %stack.key(),
                requested = stack.quantity,
                overflow = remaining,
                "no empty slot left, units not placed"
            );
        }
        outcome.overflow = remaining;
        Ok(outcome)
    }

    /// Removes up to `stack.quantity` items of the stack's kind.
    ///
    /// Returns how many were removed; see
    /// [`InventoryContainer::remove_quantity_of`].
    pub fn remove_by_kind(&mut self, stack: &ItemStack) -> u32 {
        self.remove_quantity_of(stack.key(), stack.quantity)
    }

    /// Removes up to `quantity` items with the given key, draining slots in
    /// index order and emptying each one it exhausts. Returns how many were
    /// removed, which is less than `quantity` when the inventory holds fewer.
    pub fn remove_quantity_of(&mut self, key: &str, quantity: u32) -> u32 {
        let mut remaining = quantity;
        let mut removed = 0;

        for slot in &mut self.slots {
            if remaining == 0 {
                break;
            }
            let Some(existing) = slot.as_mut() else {
                continue;
            };
            if !existing.is_kind(key) {
                continue;
            }
            let taken = remaining.min(existing.quantity);
            existing.quantity -= taken;
            remaining -= taken;
            removed += taken;
            if existing.quantity == 0 {
                *slot = None;
            }
        }

        removed
    }

    /// Empties a slot and returns what it held (`None` if it was empty).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for an invalid index.
    pub fn remove_by_slot(&mut self, index: usize) -> Result<Option<ItemStack>, InventoryError> {
        self.check_index(index)?;
        Ok(self.slots[index].take())
    }

    /// Takes up to `quantity` items out of a slot. Taking the whole stack (or
    /// more) empties the slot.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange`, `EmptySlot`, or `ZeroQuantity`.
    pub fn take_from_slot(&mut self, index: usize, quantity: u32) -> Result<ItemStack, InventoryError> {
        self.check_index(index)?;
        if quantity == 0 {
            return Err(InventoryError::ZeroQuantity);
        }
        let Some(existing) = self.slots[index].as_mut() else {
            return Err(InventoryError::EmptySlot(index));
        };
        if quantity >= existing.quantity {
            return self.slots[index]
                .take()
                .ok_or(InventoryError::EmptySlot(index));
        }
        existing.quantity -= quantity;
        Ok(ItemStack::new(Arc::clone(&existing.item), quantity))
    }

    /// Takes up to `quantity` items out of a slot for the world spawner.
    ///
    /// # Errors
    ///
    /// See [`InventoryContainer::take_from_slot`].
    pub fn drop_from_slot(&mut self, index: usize, quantity: u32) -> Result<DroppedItem, InventoryError> {
        let taken = self.take_from_slot(index, quantity)?;
        Ok(DroppedItem {
            slot: index,
            item_key: taken.key().to_owned(),
            quantity: taken.quantity,
            spawn_class: taken.item.spawn_class.clone(),
        })
    }

    /// Exchanges the contents of two slots. Stacks of the same kind are
    /// swapped, never merged.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is invalid.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), InventoryError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.slots.swap(a, b);
        Ok(())
    }

    /// Moves as many items as fit from `source` onto `target`.
    ///
    /// Only happens when both slots hold the same kind, the kind stacks and
    /// the target has headroom; otherwise nothing changes and 0 is returned.
    /// An exhausted source becomes empty. Returns the number of items moved.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is invalid.
    pub fn combine(&mut self, source: usize, target: usize) -> Result<u32, InventoryError> {
        self.check_index(source)?;
        self.check_index(target)?;
        if source == target {
            return Ok(0);
        }

        let moved = match (&self.slots[source], &self.slots[target]) {
            (Some(from), Some(onto)) if from.is_same_kind(onto) && onto.item.can_stack() => {
                from.quantity.min(onto.spare_capacity())
            }
            _ => 0,
        };
        if moved == 0 {
            return Ok(0);
        }

        if let Some(onto) = self.slots[target].as_mut() {
            onto.quantity += moved;
        }
        if let Some(from) = self.slots[source].as_mut() {
            from.quantity -= moved;
            if from.quantity == 0 {
                self.slots[source] = None;
            }
        }
        Ok(moved)
    }

    /// Moves `quantity` items from a slot into a new stack in the lowest
    /// empty slot. Returns the index of the new stack.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange`, `EmptySlot`, `InvalidSplit` when `quantity`
    /// is 0 or not less than the source quantity, or `InventoryFull` when no
    /// slot is empty.
    pub fn split_stack(&mut self, source: usize, quantity: u32) -> Result<usize, InventoryError> {
        self.check_index(source)?;
        let Some(from) = self.slots[source].as_ref() else {
            return Err(InventoryError::EmptySlot(source));
        };
        if quantity == 0 || quantity >= from.quantity {
            return Err(InventoryError::InvalidSplit {
                requested: quantity,
                available: from.quantity,
            });
        }
        let item = Arc::clone(&from.item);
        let target = self.next_empty_slot().ok_or(InventoryError::InventoryFull)?;

        if let Some(from) = self.slots[source].as_mut() {
            from.quantity -= quantity;
        }
        self.slots[target] = Some(ItemStack::new(item, quantity));
        Ok(target)
    }

    /// `(item key, quantity)` for every slot in index order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SlotRecord> {
        self.slots
            .iter()
            .map(|slot| match slot {
                Some(stack) => SlotRecord::holding(stack.key(), stack.quantity),
                None => SlotRecord::empty(),
            })
            .collect()
    }

    /// Checks that a slot index is in range.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` otherwise.
    pub fn check_index(&self, index: usize) -> Result<(), InventoryError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(InventoryError::IndexOutOfRange {
                index,
                slot_count: self.slots.len(),
            })
        }
    }

    fn auto_stacks(&self, stack: &ItemStack) -> bool {
        self.config.auto_stack && stack.item.auto_stack && stack.item.can_stack()
    }
}
