//! Haversack Core: shared domain abstractions.
//!
//! Traits and types every bounded context builds on: aggregates, commands,
//! events, the event repository seam and the clock. No infrastructure code
//! lives here.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod repository;
