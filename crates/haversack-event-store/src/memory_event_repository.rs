//! In-memory implementation of the `EventRepository` trait.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use haversack_core::error::DomainError;
use haversack_core::repository::{EventRepository, StoredEvent};

/// Event repository holding every stream in process memory.
///
/// Streams are keyed by aggregate id. Appends use optimistic concurrency:
/// the writer states the last sequence number it saw and the append is
/// rejected if the stream has moved on.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    streams: RwLock<HashMap<Uuid, Vec<StoredEvent>>>,
}

impl InMemoryEventRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of streams with at least one event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the store lock is poisoned.
    pub fn stream_count(&self) -> Result<usize, DomainError> {
        let streams = self.streams.read().map_err(poisoned)?;
        Ok(streams.values().filter(|stream| !stream.is_empty()).count())
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::Infrastructure("event store lock poisoned".into())
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn load_events(&self, aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        let streams = self.streams.read().map_err(poisoned)?;
        Ok(streams.get(&aggregate_id).cloned().unwrap_or_default())
    }

    async fn append_events(
        &self,
        aggregate_id: Uuid,
        expected_version: i64,
        events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        if events.is_empty() {
            return Ok(());
        }

        let mut streams = self.streams.write().map_err(poisoned)?;
        let stream = streams.entry(aggregate_id).or_default();
        let actual = stream.last().map_or(0, |e| e.sequence_number);
        if actual != expected_version {
            warn!(%aggregate_id, expected_version, actual, "append rejected");
            return Err(DomainError::ConcurrencyConflict {
                aggregate_id,
                expected: expected_version,
                actual,
            });
        }

        let mut next = expected_version + 1;
        for event in events {
            if event.aggregate_id != aggregate_id {
                return Err(DomainError::Infrastructure(format!(
                    "event {} belongs to aggregate {}, not {aggregate_id}",
                    event.event_id, event.aggregate_id
                )));
            }
            if event.sequence_number != next {
                return Err(DomainError::Infrastructure(format!(
                    "event {} has sequence number {}, expected {next}",
                    event.event_id, event.sequence_number
                )));
            }
            next += 1;
        }

        stream.extend_from_slice(events);
        debug!(%aggregate_id, appended = events.len(), version = next - 1, "events appended");
        Ok(())
    }
}
