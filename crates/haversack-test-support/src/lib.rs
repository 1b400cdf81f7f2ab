//! Shared test mocks and fixtures for the Haversack inventory engine.

mod clock;
mod fixtures;
mod repository;

pub use clock::FixedClock;
pub use fixtures::{apple, door_key, fixed_now, sample_catalog, torch, wood};
pub use repository::{EmptyEventRepository, FailingEventRepository, RecordingEventRepository};
