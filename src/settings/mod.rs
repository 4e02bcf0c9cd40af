//! Persisted background configuration and its movement to and from the
//! host snapshot store.
//!
//! Split between the live model ([`BackgroundSettings`]), the tolerant wire
//! form ([`SettingsSnapshot`]) and the store that owns the merge and save
//! paths ([`SettingsStore`]).

mod model;
mod snapshot;
mod store;

pub use model::BackgroundSettings;
pub use snapshot::SettingsSnapshot;
pub use store::SettingsStore;
