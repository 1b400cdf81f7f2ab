//! Event store implementations for the Haversack inventory engine.

pub mod memory_event_repository;

pub use memory_event_repository::InMemoryEventRepository;
