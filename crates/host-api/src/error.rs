use thiserror::Error;

/// Errors reported by a host [`SnapshotStore`](crate::SnapshotStore).
///
/// The plugin never retries or swallows these; they propagate unchanged to
/// whichever host surface invoked the failing operation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The persisted snapshot exists but could not be read or decoded.
    #[error("failed to load persisted snapshot: {0}")]
    Load(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The snapshot could not be written back to the host store.
    #[error("failed to save persisted snapshot: {0}")]
    Save(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wrap an underlying error as a load failure.
    pub fn load(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Load(source.into())
    }

    /// Wrap an underlying error as a save failure.
    pub fn save(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Save(source.into())
    }
}

/// Errors surfaced by plugin lifecycle hooks and the settings surface.
#[derive(Debug, Error)]
pub enum PluginError {
    /// A host persistence operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The host reported an edit for a field the settings page does not declare.
    #[error("settings field '{id}' is not part of this panel")]
    UnknownField { id: String },

    /// The host reported a value whose kind does not match the field's control.
    #[error("settings field '{id}' expects a {expected} value")]
    ValueKind { id: String, expected: &'static str },

    /// An edit was routed to a plugin that contributes no settings page.
    #[error("plugin does not contribute a settings page")]
    NoSettingsTab,
}
