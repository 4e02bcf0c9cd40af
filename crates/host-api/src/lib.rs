//! Shared contracts between an editor host and the backdrop plugin.
//!
//! The traits in this crate describe the services a host offers a plugin
//! (snapshot persistence, theme signal, style installation, event
//! subscription) together with the lifecycle surface the plugin offers back.
//! Reference implementations of each service are included so plugins can be
//! driven in-process, both by tests and by the standalone preview binary.

pub mod context;
pub mod descriptors;
pub mod error;
pub mod events;
pub mod panel;
pub mod plugin;
pub mod session;
pub mod storage;
pub mod style;
pub mod theme;

pub use context::PluginContext;
pub use descriptors::PluginDescriptor;
pub use error::{PluginError, StorageError};
pub use events::{EventRegistrar, HostEvent, SubscriptionSet};
pub use panel::{FieldChange, FieldControl, FieldValue, PanelField};
pub use plugin::{EditorPlugin, SettingsTab};
pub use session::HostSession;
pub use storage::{MemorySnapshotStore, SnapshotStore};
pub use style::{StyleDescription, StyleElement, StyleSink};
pub use theme::{ThemeFlavor, ThemeProbe, ThemeState};
