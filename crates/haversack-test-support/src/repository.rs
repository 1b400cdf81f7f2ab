//! Mock `EventRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use haversack_core::error::DomainError;
use haversack_core::repository::{EventRepository, StoredEvent};
use uuid::Uuid;

/// An appended batch: aggregate id, expected version, events.
pub type AppendCall = (Uuid, i64, Vec<StoredEvent>);

/// An event repository seeded with a history that records every
/// `append_events` call.
///
/// Appended events are also served by later `load_events` calls, so a test
/// can run several commands against one stream. No version check is made.
#[derive(Debug, Default)]
pub struct RecordingEventRepository {
    history: Mutex<Vec<StoredEvent>>,
    appended: Mutex<Vec<AppendCall>>,
}

impl RecordingEventRepository {
    /// Create a repository whose stream starts with `history`.
    #[must_use]
    pub fn new(history: Vec<StoredEvent>) -> Self {
        Self {
            history: Mutex::new(history),
            appended: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all append calls in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn appended_events(&self) -> Vec<AppendCall> {
        self.appended.lock().unwrap().clone()
    }

    /// Returns every event appended, flattened across calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn appended_flat(&self) -> Vec<StoredEvent> {
        self.appended
            .lock()
            .unwrap()
            .iter()
            .flat_map(|(_, _, events)| events.iter().cloned())
            .collect()
    }
}

#[async_trait]
impl EventRepository for RecordingEventRepository {
    async fn load_events(&self, aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        Ok(self
            .history
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .cloned()
            .collect())
    }

    async fn append_events(
        &self,
        aggregate_id: Uuid,
        expected_version: i64,
        events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        self.history.lock().unwrap().extend_from_slice(events);
        self.appended
            .lock()
            .unwrap()
            .push((aggregate_id, expected_version, events.to_vec()));
        Ok(())
    }
}

/// An event repository that always returns an empty event list and silently
/// accepts appends. Useful for testing "aggregate not found" scenarios and
/// creation commands.
#[derive(Debug)]
pub struct EmptyEventRepository;

#[async_trait]
impl EventRepository for EmptyEventRepository {
    async fn load_events(&self, _aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        Ok(vec![])
    }

    async fn append_events(
        &self,
        _aggregate_id: Uuid,
        _expected_version: i64,
        _events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        Ok(())
    }
}

/// An event repository that fails with an infrastructure error.
///
/// [`FailingEventRepository::new`] fails every call.
/// [`FailingEventRepository::on_append`] serves a history and fails only the
/// append, for testing that nothing is published after a failed write.
#[derive(Debug, Default)]
pub struct FailingEventRepository {
    history: Option<Vec<StoredEvent>>,
}

impl FailingEventRepository {
    /// A repository that fails every call.
    #[must_use]
    pub fn new() -> Self {
        Self { history: None }
    }

    /// A repository that loads `history` and fails on append.
    #[must_use]
    pub fn on_append(history: Vec<StoredEvent>) -> Self {
        Self {
            history: Some(history),
        }
    }
}

#[async_trait]
impl EventRepository for FailingEventRepository {
    async fn load_events(&self, _aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        self.history
            .clone()
            .ok_or_else(|| DomainError::Infrastructure("connection refused".into()))
    }

    async fn append_events(
        &self,
        _aggregate_id: Uuid,
        _expected_version: i64,
        _events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
