//! HTTP surface over the inventory authority.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
