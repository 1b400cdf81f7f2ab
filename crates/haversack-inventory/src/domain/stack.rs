//! Item stacks: a quantity of one item kind occupying a single slot.

use std::sync::Arc;

use haversack_catalog::ItemDefinition;

/// A quantity of one kind of item.
///
/// Stacks are compared by kind with [`ItemStack::is_same_kind`]; there is
/// deliberately no `PartialEq`, because "same kind" ignores quantity.
#[derive(Debug, Clone)]
pub struct ItemStack {
    /// The catalog definition of the item.
    pub item: Arc<ItemDefinition>,
    /// How many items the stack holds.
    pub quantity: u32,
}

impl ItemStack {
    /// Creates a new item stack.
    #[must_use]
    pub fn new(item: Arc<ItemDefinition>, quantity: u32) -> Self {
        Self { item, quantity }
    }

    /// Catalog key of the item.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.item.key
    }

    /// Returns true if both stacks hold the same kind of item.
    #[must_use]
    pub fn is_same_kind(&self, other: &ItemStack) -> bool {
        self.item == other.item
    }

    /// Returns true if the stack holds items with the given key.
    #[must_use]
    pub fn is_kind(&self, key: &str) -> bool {
        self.item.key == key
    }

    /// How many more items fit before the stack reaches its limit.
    #[must_use]
    pub fn spare_capacity(&self) -> u32 {
        self.item.stack_limit().saturating_sub(self.quantity)
    }

    /// Singular or plural title depending on quantity.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.item.display_name(self.quantity)
    }

    /// Returns true if the stack holds two or more items.
    #[must_use]
    pub fn is_a_stack(&self) -> bool {
        self.quantity >= 2
    }

    /// Combined weight of every item in the stack.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_weight(&self) -> f32 {
        self.item.weight * self.quantity as f32
    }
}
