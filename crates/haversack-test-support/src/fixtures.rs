//! Item fixtures shared by the inventory and server tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use haversack_catalog::{InMemoryItemCatalog, ItemAction, ItemDefinition};

/// The timestamp every test clock is pinned to.
///
/// # Panics
///
/// Never; the date is a constant valid instant.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0)
        .single()
        .expect("constant timestamp is valid")
}

/// Apples stack two to a slot and are consumed on use.
#[must_use]
pub fn apple() -> ItemDefinition {
    ItemDefinition::new("apple", "Apple")
        .with_plural_title("Apples")
        .with_max_stack_size(2)
        .with_weight(0.2)
        .with_spawn_class("BP_Apple")
        .with_action(ItemAction::Consume)
}

/// Keys never stack.
#[must_use]
pub fn door_key() -> ItemDefinition {
    ItemDefinition::new("key", "Key")
        .with_plural_title("Keys")
        .with_max_stack_size(1)
        .with_action(ItemAction::Use)
}

/// Wood stacks to ten but is not merged automatically.
#[must_use]
pub fn wood() -> ItemDefinition {
    ItemDefinition::new("wood", "Wood")
        .with_max_stack_size(10)
        .with_auto_stack(false)
        .with_weight(1.0)
}

/// Torches stack to five and belong on the action bar.
#[must_use]
pub fn torch() -> ItemDefinition {
    ItemDefinition::new("torch", "Torch")
        .with_plural_title("Torches")
        .with_max_stack_size(5)
        .with_action_bar(true, false)
        .with_spawn_class("BP_Torch")
        .with_action(ItemAction::Equip)
}

/// A catalog holding every fixture item.
///
/// # Panics
///
/// Never; the fixture keys are distinct and valid.
#[must_use]
pub fn sample_catalog() -> Arc<InMemoryItemCatalog> {
    Arc::new(
        InMemoryItemCatalog::from_definitions([apple(), door_key(), wood(), torch()])
            .expect("fixture items are valid"),
    )
}
