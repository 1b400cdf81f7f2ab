//! Catalog domain types.

pub mod catalog;
pub mod definition;
pub mod error;
