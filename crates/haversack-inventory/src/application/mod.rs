//! Application services for the inventory context.

pub mod command_handlers;
pub mod observers;
pub mod query_handlers;
