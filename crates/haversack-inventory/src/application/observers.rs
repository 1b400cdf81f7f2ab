//! Observers notified after inventory events are committed.
//!
//! Notifications are delivered synchronously, in the order the events were
//! recorded, and only once the events have been persisted.

use std::fmt;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::events::{
    InventoryEvent, InventoryEventKind, ItemAdded, ItemDropped, ItemMoved, ItemUsed,
    StackSplit, StacksCombined,
};

/// Receives inventory notifications. Every hook defaults to doing nothing.
pub trait InventoryObserver: Send + Sync {
    /// Items were added.
    fn on_item_added(&self, _added: &ItemAdded) {}

    /// Items of a kind left the inventory, by key or by clearing a slot.
    fn on_item_removed(&self, _inventory_id: Uuid, _item_key: &str, _quantity: u32) {}

    /// Two slots exchanged contents.
    fn on_item_moved(&self, _moved: &ItemMoved) {}

    /// An item was used.
    fn on_item_used(&self, _used: &ItemUsed) {}

    /// Items were dropped into the world.
    fn on_item_dropped(&self, _dropped: &ItemDropped) {}

    /// Two stacks were combined.
    fn on_stacks_combined(&self, _combined: &StacksCombined) {}

    /// A stack was split.
    fn on_stack_split(&self, _split: &StackSplit) {}
}

/// Registered observers, notified in registration order.
#[derive(Clone, Default)]
pub struct InventoryObservers {
    observers: Vec<Arc<dyn InventoryObserver>>,
}

impl fmt::Debug for InventoryObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryObservers")
            .field("len", &self.observers.len())
            .finish()
    }
}

impl InventoryObservers {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observer.
    pub fn register(&mut self, observer: Arc<dyn InventoryObserver>) {
        self.observers.push(observer);
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers each event to every observer, event by event.
    pub fn notify(&self, events: &[InventoryEvent]) {
        for event in events {
            for observer in &self.observers {
                dispatch(observer.as_ref(), &event.kind);
            }
        }
    }
}

fn dispatch(observer: &dyn InventoryObserver, kind: &InventoryEventKind) {
    match kind {
        InventoryEventKind::InventoryCreated(_) => {}
        InventoryEventKind::ItemAdded(payload) => observer.on_item_added(payload),
        InventoryEventKind::ItemsRemoved(payload) => {
            observer.on_item_removed(payload.inventory_id, &payload.item_key, payload.removed);
        }
        InventoryEventKind::SlotCleared(payload) => {
            observer.on_item_removed(payload.inventory_id, &payload.item_key, payload.quantity);
        }
        InventoryEventKind::ItemDropped(payload) => observer.on_item_dropped(payload),
        InventoryEventKind::ItemMoved(payload) => observer.on_item_moved(payload),
        InventoryEventKind::StacksCombined(payload) => observer.on_stacks_combined(payload),
        InventoryEventKind::StackSplit(payload) => observer.on_stack_split(payload),
        InventoryEventKind::ItemUsed(payload) => observer.on_item_used(payload),
    }
}

/// Logs every notification at `info`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl InventoryObserver for TracingObserver {
    fn on_item_added(&self, added: &ItemAdded) {
        info!(
            inventory_id = %added.inventory_id,
            item = %added.item.key,
            quantity = added.quantity,
            overflow = added.overflow,
            origin = ?added.origin,
            "item added"
        );
    }

    fn on_item_removed(&self, inventory_id: Uuid, item_key: &str, quantity: u32) {
        info!(%inventory_id, item = item_key, quantity, "item removed");
    }

    fn on_item_moved(&self, moved: &ItemMoved) {
        info!(
            inventory_id = %moved.inventory_id,
            from_slot = moved.from_slot,
            to_slot = moved.to_slot,
            "item moved"
        );
    }

    fn on_item_used(&self, used: &ItemUsed) {
        info!(
            inventory_id = %used.inventory_id,
            slot = used.slot,
            item = %used.item_key,
            action = ?used.action,
            "item used"
        );
    }

    fn on_item_dropped(&self, dropped: &ItemDropped) {
        info!(
            inventory_id = %dropped.inventory_id,
            slot = dropped.slot,
            item = %dropped.item_key,
            quantity = dropped.quantity,
            spawn_class = dropped.spawn_class.as_deref(),
            "item dropped"
        );
    }

    fn on_stacks_combined(&self, combined: &StacksCombined) {
        info!(
            inventory_id = %combined.inventory_id,
            source_slot = combined.source_slot,
            target_slot = combined.target_slot,
            moved = combined.moved,
            "stacks combined"
        );
    }

    fn on_stack_split(&self, split: &StackSplit) {
        info!(
            inventory_id = %split.inventory_id,
            source_slot = split.source_slot,
            target_slot = split.target_slot,
            quantity = split.quantity,
            "stack split"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Utc;
    use haversack_core::event::EventMetadata;
    use uuid::Uuid;

    use super::*;
    use crate::domain::events::{ItemsRemoved, SlotCleared};

    #[derive(Default)]
    struct Journal {
        name: &'static str,
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl InventoryObserver for Journal {
        fn on_item_removed(&self, _inventory_id: Uuid, item_key: &str, quantity: u32) {
            self.lines
                .lock()
                .unwrap()
                .push(format!("{}: removed {quantity} {item_key}", self.name));
        }

        fn on_item_moved(&self, moved: &ItemMoved) {
            self.lines.lock().unwrap().push(format!(
                "{}: moved {} -> {}",
                self.name, moved.from_slot, moved.to_slot
            ));
        }
    }

    fn event(kind: InventoryEventKind) -> InventoryEvent {
        InventoryEvent {
            metadata: EventMetadata::for_command(
                kind.event_type(),
                Uuid::new_v4(),
                1,
                Uuid::new_v4(),
                Utc::now(),
            ),
            kind,
        }
    }

    #[test]
    fn test_notify_delivers_in_event_then_registration_order() {
        // Arrange
        let inventory_id = Uuid::new_v4();
        let lines = Arc::new(Mutex::new(Vec::new()));
        let mut observers = InventoryObservers::new();
        observers.register(Arc::new(Journal {
            name: "first",
            lines: Arc::clone(&lines),
        }));
        observers.register(Arc::new(Journal {
            name: "second",
            lines: Arc::clone(&lines),
        }));
        let events = vec![
            event(InventoryEventKind::ItemMoved(ItemMoved {
                inventory_id,
                from_slot: 0,
                to_slot: 4,
            })),
            event(InventoryEventKind::ItemsRemoved(ItemsRemoved {
                inventory_id,
                item_key: "apple".to_owned(),
                requested: 5,
                removed: 3,
            })),
        ];

        // Act
        observers.notify(&events);

        // Assert
        assert_eq!(
            *lines.lock().unwrap(),
            vec![
                "first: moved 0 -> 4",
                "second: moved 0 -> 4",
                "first: removed 3 apple",
                "second: removed 3 apple",
            ]
        );
    }

    #[test]
    fn test_slot_cleared_is_reported_as_removal() {
        let journal = Journal {
            name: "j",
            ..Journal::default()
        };
        let lines = Arc::clone(&journal.lines);
        let mut observers = InventoryObservers::new();
        observers.register(Arc::new(journal));

        observers.notify(&[event(InventoryEventKind::SlotCleared(SlotCleared {
            inventory_id: Uuid::new_v4(),
            slot: 2,
            item_key: "key".to_owned(),
            quantity: 1,
        }))]);

        assert_eq!(*lines.lock().unwrap(), vec!["j: removed 1 key"]);
    }

    #[test]
    fn test_empty_registry_ignores_events() {
        let observers = InventoryObservers::new();

        observers.notify(&[event(InventoryEventKind::ItemMoved(ItemMoved {
            inventory_id: Uuid::new_v4(),
            from_slot: 1,
            to_slot: 2,
        }))]);

        assert!(observers.is_empty());
    }
}
