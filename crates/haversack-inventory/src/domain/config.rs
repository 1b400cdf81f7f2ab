//! Inventory construction parameters.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InventoryError;

/// Grid dimensions plus the number of action-bar slots.
///
/// Slots are numbered row by row through the grid, followed by the action
/// bar, so the action bar is always the trailing `action_bar_slots` indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct InventoryLayout {
    rows: u16,
    columns: u16,
    action_bar_slots: u16,
}

/// Wire shape of [`InventoryLayout`], checked by [`InventoryLayout::new`] on
/// the way in.
#[derive(Deserialize)]
struct RawLayout {
    rows: u16,
    columns: u16,
    action_bar_slots: u16,
}

impl TryFrom<RawLayout> for InventoryLayout {
    type Error = InventoryError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.columns, raw.action_bar_slots)
    }
}

impl InventoryLayout {
    /// Creates a layout.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidLayout` if `rows` or `columns` is zero.
    /// An inventory without an action bar is allowed.
    pub fn new(rows: u16, columns: u16, action_bar_slots: u16) -> Result<Self, InventoryError> {
        if rows == 0 || columns == 0 {
            return Err(InventoryError::InvalidLayout(format!(
                "rows and columns must be at least 1, got {rows}x{columns}"
            )));
        }
        Ok(Self {
            rows,
            columns,
            action_bar_slots,
        })
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of grid columns.
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Number of action-bar slots.
    #[must_use]
    pub fn action_bar_slots(&self) -> u16 {
        self.action_bar_slots
    }

    /// Slots in the grid, excluding the action bar.
    #[must_use]
    pub fn grid_slot_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.columns)
    }

    /// Total slots: `rows * columns + action_bar_slots`.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.grid_slot_count() + usize::from(self.action_bar_slots)
    }

    /// Indices belonging to the action bar.
    #[must_use]
    pub fn action_bar_range(&self) -> Range<usize> {
        self.grid_slot_count()..self.slot_count()
    }
}

impl Default for InventoryLayout {
    /// Five rows of six plus a five-slot action bar.
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 6,
            action_bar_slots: 5,
        }
    }
}

/// When the inventory counts as full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullnessRule {
    /// Full as soon as no slot is empty, even when an occupied stack could
    /// still absorb more of its own kind. Existing behaviour; the default.
    #[default]
    EmptySlot,
    /// Full only when no slot is empty and every stack is at its limit. An
    /// add is accepted while a matching auto-stacking stack has headroom.
    StackHeadroom,
}

impl FullnessRule {
    /// Configuration spelling of the rule.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptySlot => "empty_slot",
            Self::StackHeadroom => "stack_headroom",
        }
    }
}

impl fmt::Display for FullnessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FullnessRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty_slot" => Ok(Self::EmptySlot),
            "stack_headroom" => Ok(Self::StackHeadroom),
            other => Err(format!(
                "unknown fullness rule '{other}', expected 'empty_slot' or 'stack_headroom'"
            )),
        }
    }
}

/// Everything fixed at the moment an inventory is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Slot layout.
    pub layout: InventoryLayout,
    /// Global switch for auto-stacking. When off, no item auto-stacks
    /// regardless of its own flag.
    pub auto_stack: bool,
    /// When the inventory reports full.
    pub fullness_rule: FullnessRule,
}

impl InventoryConfig {
    /// Default settings with the given layout.
    #[must_use]
    pub fn with_layout(layout: InventoryLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            layout: InventoryLayout::default(),
            auto_stack: true,
            fullness_rule: FullnessRule::EmptySlot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_count_is_grid_plus_action_bar() {
        let layout = InventoryLayout::new(5, 6, 5).unwrap();

        assert_eq!(layout.grid_slot_count(), 30);
        assert_eq!(layout.slot_count(), 35);
        assert_eq!(layout.action_bar_range(), 30..35);
    }

    #[test]
    fn test_layout_rejects_zero_rows_or_columns() {
        assert!(matches!(
            InventoryLayout::new(0, 4, 1),
            Err(InventoryError::InvalidLayout(_))
        ));
        assert!(matches!(
            InventoryLayout::new(4, 0, 1),
            Err(InventoryError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_layout_deserialization_rejects_zero_rows() {
        let result =
            serde_json::from_str::<InventoryLayout>(r#"{"rows":0,"columns":0,"action_bar_slots":0}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_layout_deserialization_accepts_valid_layout() {
        let layout: InventoryLayout =
            serde_json::from_str(r#"{"rows":2,"columns":3,"action_bar_slots":1}"#).unwrap();

        assert_eq!(layout, InventoryLayout::new(2, 3, 1).unwrap());
    }

    #[test]
    fn test_layout_allows_no_action_bar() {
        let layout = InventoryLayout::new(1, 1, 0).unwrap();

        assert_eq!(layout.slot_count(), 1);
        assert!(layout.action_bar_range().is_empty());
    }

    #[test]
    fn test_fullness_rule_parses_config_spelling() {
        assert_eq!(
            "empty_slot".parse::<FullnessRule>(),
            Ok(FullnessRule::EmptySlot)
        );
        assert_eq!(
            " Stack_Headroom ".parse::<FullnessRule>(),
            Ok(FullnessRule::StackHeadroom)
        );
        assert!("sometimes".parse::<FullnessRule>().is_err());
    }

    #[test]
    fn test_default_config_matches_plugin_defaults() {
        let config = InventoryConfig::default();

        assert_eq!(config.layout.slot_count(), 35);
        assert!(config.auto_stack);
        assert_eq!(config.fullness_rule, FullnessRule::EmptySlot);
    }
}
