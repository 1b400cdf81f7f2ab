//! Item definitions: the immutable rows of the item data table.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// What happens when an item is used from the inventory or action bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemAction {
    /// Food, potions and other items eaten or drunk.
    Consume,
    /// Clothing and weapons.
    Equip,
    /// Tools and other reusable items.
    Use,
    /// Plain resources with no use action.
    #[default]
    None,
}

fn default_max_stack_size() -> u32 {
    2
}

fn default_auto_stack() -> bool {
    true
}

/// A catalog entry describing one kind of item.
///
/// Two definitions are equal when their keys are equal, whatever their other
/// fields say. Every stacking decision in the inventory relies on this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Stable row key (used for lookups, events and snapshots).
    pub key: String,

    /// Display name for a single item.
    pub title: String,

    /// Display name for more than one item. Falls back to `title` when empty.
    #[serde(default)]
    pub plural_title: String,

    /// Tooltip text.
    #[serde(default)]
    pub description: String,

    /// How many fit in one slot. 0 and 1 both mean the item does not stack.
    #[serde(default = "default_max_stack_size")]
    pub max_stack_size: u32,

    /// Whether newly added stacks merge into existing stacks of this kind.
    #[serde(default = "default_auto_stack")]
    pub auto_stack: bool,

    /// Routing hint for the presentation layer.
    #[serde(default)]
    pub can_go_into_action_bar: bool,

    /// Routing hint for the presentation layer.
    #[serde(default)]
    pub force_into_action_bar: bool,

    /// Weight of one item.
    #[serde(default)]
    pub weight: f32,

    /// Opaque reference handed to the world spawner when the item is dropped.
    #[serde(default)]
    pub spawn_class: Option<String>,

    /// Action performed on use.
    #[serde(default)]
    pub action: ItemAction,
}

impl ItemDefinition {
    /// Creates a definition with the data-table defaults: stacks to 2,
    /// auto-stacks, weightless, no action.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            plural_title: String::new(),
            description: String::new(),
            max_stack_size: default_max_stack_size(),
            auto_stack: default_auto_stack(),
            can_go_into_action_bar: false,
            force_into_action_bar: false,
            weight: 0.0,
            spawn_class: None,
            action: ItemAction::None,
        }
    }

    /// Sets the plural display name.
    #[must_use]
    pub fn with_plural_title(mut self, plural_title: impl Into<String>) -> Self {
        self.plural_title = plural_title.into();
        self
    }

    /// Sets the tooltip text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the maximum stack size.
    #[must_use]
    pub fn with_max_stack_size(mut self, max_stack_size: u32) -> Self {
        self.max_stack_size = max_stack_size;
        self
    }

    /// Sets whether the item auto-stacks when added.
    #[must_use]
    pub fn with_auto_stack(mut self, auto_stack: bool) -> Self {
        self.auto_stack = auto_stack;
        self
    }

    /// Sets the use action.
    #[must_use]
    pub fn with_action(mut self, action: ItemAction) -> Self {
        self.action = action;
        self
    }

    /// Sets the weight of one item.
    #[must_use]
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the spawn representation used when the item is dropped.
    #[must_use]
    pub fn with_spawn_class(mut self, spawn_class: impl Into<String>) -> Self {
        self.spawn_class = Some(spawn_class.into());
        self
    }

    /// Sets both action-bar routing hints.
    #[must_use]
    pub fn with_action_bar(mut self, can_go_into: bool, force_into: bool) -> Self {
        self.can_go_into_action_bar = can_go_into;
        self.force_into_action_bar = force_into;
        self
    }

    /// Returns true if more than one of this item fits in a slot.
    #[must_use]
    pub fn can_stack(&self) -> bool {
        self.max_stack_size > 1
    }

    /// Largest quantity a single slot may hold.
    #[must_use]
    pub fn stack_limit(&self) -> u32 {
        self.max_stack_size.max(1)
    }

    /// Plural title for quantities above one, singular otherwise.
    #[must_use]
    pub fn display_name(&self, quantity: u32) -> &str {
        if quantity > 1 && !self.plural_title.is_empty() {
            &self.plural_title
        } else {
            &self.title
        }
    }

    /// Checks the constraints every catalog row must satisfy.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDefinition` for an empty key or a
    /// negative or non-finite weight.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.key.trim().is_empty() {
            return Err(CatalogError::InvalidDefinition {
                key: self.key.clone(),
                reason: "key must not be empty".to_owned(),
            });
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(CatalogError::InvalidDefinition {
                key: self.key.clone(),
                reason: format!("weight must be a finite value >= 0, got {}", self.weight),
            });
        }
        Ok(())
    }
}

impl PartialEq for ItemDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ItemDefinition {}

impl Hash for ItemDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_definitions_with_same_key_are_equal_even_if_fields_differ() {
        // Arrange
        let a = ItemDefinition::new("apple", "Apple").with_max_stack_size(2);
        let b = ItemDefinition::new("apple", "Green Apple")
            .with_max_stack_size(10)
            .with_weight(3.0);

        // Act / Assert
        assert_eq!(a, b);
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_definitions_with_same_title_but_different_key_are_not_equal() {
        let a = ItemDefinition::new("apple", "Apple");
        let b = ItemDefinition::new("apple_rotten", "Apple");

        assert_ne!(a, b);
    }

    #[test]
    fn test_stack_limit_treats_zero_and_one_as_non_stacking() {
        let zero = ItemDefinition::new("key", "Key").with_max_stack_size(0);
        let one = ItemDefinition::new("map", "Map").with_max_stack_size(1);

        assert!(!zero.can_stack());
        assert!(!one.can_stack());
        assert_eq!(zero.stack_limit(), 1);
        assert_eq!(one.stack_limit(), 1);
    }

    #[test]
    fn test_display_name_uses_plural_above_one() {
        let apple = ItemDefinition::new("apple", "Apple").with_plural_title("Apples");

        assert_eq!(apple.display_name(1), "Apple");
        assert_eq!(apple.display_name(2), "Apples");
    }

    #[test]
    fn test_display_name_falls_back_to_title_without_plural() {
        let sheep = ItemDefinition::new("sheep", "Sheep");

        assert_eq!(sheep.display_name(5), "Sheep");
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let rock = ItemDefinition::new("rock", "Rock").with_weight(-1.0);

        match rock.validate() {
            Err(CatalogError::InvalidDefinition { key, reason }) => {
                assert_eq!(key, "rock");
                assert!(reason.contains("weight"));
            }
            other => panic!("expected InvalidDefinition, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        let blank = ItemDefinition::new("  ", "Nothing");

        assert!(matches!(
            blank.validate(),
            Err(CatalogError::InvalidDefinition { .. })
        ));
    }
}
