//! Inventory error types.

use haversack_core::error::DomainError;
use thiserror::Error;

/// Reasons the inventory rejects an operation. A rejected operation never
/// changes any slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// No room for the item under the configured fullness rule.
    #[error("inventory is full")]
    InventoryFull,

    /// A slot index outside `0..slot_count`.
    #[error("slot {index} is out of range for an inventory of {slot_count} slots")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of slots in the inventory.
        slot_count: usize,
    },

    /// The operation needs an item in the slot.
    #[error("slot {0} is empty")]
    EmptySlot(usize),

    /// A split must leave at least one item behind and move at least one.
    #[error("cannot split {requested} from a stack of {available}")]
    InvalidSplit {
        /// Units asked for.
        requested: u32,
        /// Units in the source stack.
        available: u32,
    },

    /// A quantity of zero where at least one item is required.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// Rows and columns must both be at least one.
    #[error("invalid inventory layout: {0}")]
    InvalidLayout(String),

    /// A snapshot does not fit the inventory it is restored into.
    #[error("invalid inventory snapshot: {0}")]
    InvalidSnapshot(String),

    /// An item key missing from the catalog.
    #[error("unknown item '{0}'")]
    UnknownItem(String),
}

impl From<InventoryError> for DomainError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::InventoryFull => DomainError::Conflict(err.to_string()),
            _ => DomainError::Validation(err.to_string()),
        }
    }
}
