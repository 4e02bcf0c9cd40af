use serde_json::Value;

use crate::error::StorageError;

/// Host persistence service holding one opaque JSON snapshot per plugin.
///
/// `None` on load is the normal first-run answer, not a failure. Saves
/// replace the snapshot wholesale, so there is never a partially written
/// state to reconcile. Operations complete before they return; callers may
/// read their own writes immediately.
pub trait SnapshotStore {
    /// Fetch the persisted snapshot, or `None` when nothing was saved yet.
    fn load_snapshot(&self) -> Result<Option<Value>, StorageError>;

    /// Replace the persisted snapshot with `snapshot`.
    fn save_snapshot(&mut self, snapshot: &Value) -> Result<(), StorageError>;
}

/// Snapshot store keeping its object in memory.
///
/// The reference store for tests and the preview session; it never fails.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    snapshot: Option<Value>,
}

impl MemorySnapshotStore {
    /// Create an empty store, modelling a first run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `snapshot`.
    #[must_use]
    pub fn seeded(snapshot: Value) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    /// The stored snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Value> {
        self.snapshot.as_ref()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load_snapshot(&self) -> Result<Option<Value>, StorageError> {
        Ok(self.snapshot.clone())
    }

    fn save_snapshot(&mut self, snapshot: &Value) -> Result<(), StorageError> {
        self.snapshot = Some(snapshot.clone());
        Ok(())
    }
}
