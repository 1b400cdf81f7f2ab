//! Server configuration read from the environment at startup.

use std::path::PathBuf;
use std::str::FromStr;

use haversack_inventory::domain::config::{FullnessRule, InventoryConfig, InventoryLayout};

use crate::error::AppError;

/// Everything the server needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Item data table (`CATALOG_PATH`).
    pub catalog_path: PathBuf,
    /// Settings for newly created inventories.
    pub inventory: InventoryConfig,
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for any value that does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable if it is set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for any value that does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 3000_u16)?;
        let catalog_path = lookup("CATALOG_PATH")
            .map_or_else(|| PathBuf::from("data/items.yaml"), PathBuf::from);

        let defaults = InventoryLayout::default();
        let rows = parse_or(&lookup, "INVENTORY_ROWS", defaults.rows())?;
        let columns = parse_or(&lookup, "INVENTORY_COLUMNS", defaults.columns())?;
        let action_bar_slots = parse_or(&lookup, "ACTION_BAR_SLOTS", defaults.action_bar_slots())?;
        let layout = InventoryLayout::new(rows, columns, action_bar_slots)
            .map_err(|e| AppError::Config(e.to_string()))?;

        let auto_stack = parse_or(&lookup, "INVENTORY_AUTO_STACK", true)?;
        let fullness_rule = parse_or(&lookup, "INVENTORY_FULLNESS_RULE", FullnessRule::default())?;

        Ok(Self {
            host,
            port,
            catalog_path,
            inventory: InventoryConfig {
                layout,
                auto_stack,
                fullness_rule,
            },
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{name} is invalid ('{raw}'): {e}"))),
    }
}
