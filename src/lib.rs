//! Core crate for the `backdrop` editor background plugin.
//!
//! The root module re-exports the pieces an embedding host needs so that
//! wiring the plugin into a session does not require digging through the
//! module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod plugin;
pub mod settings;
pub mod storage;
pub mod style;

pub use plugin::{BACKDROP_DESCRIPTOR, BackdropPlugin};
pub use settings::{BackgroundSettings, SettingsSnapshot, SettingsStore};
pub use storage::DiskSnapshotStore;
pub use style::{EDITOR_SCROLLER_SELECTOR, EDITOR_SURFACE_SELECTOR, render_stylesheet};
