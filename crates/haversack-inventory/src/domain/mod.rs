//! Inventory domain model.

pub mod aggregates;
pub mod commands;
pub mod config;
pub mod container;
pub mod error;
pub mod events;
pub mod stack;
