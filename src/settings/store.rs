//! Moves settings between memory and the host snapshot store.

use backdrop_host_api::{SnapshotStore, StorageError};
use tracing::debug;

use super::model::BackgroundSettings;
use super::snapshot::SettingsSnapshot;

/// Owner of the live settings instance for one plugin session.
///
/// Loading merges the persisted snapshot over the defaults; saving always
/// writes the full object, so a snapshot that started out partial becomes
/// complete on the first save.
#[derive(Debug, Clone)]
pub struct SettingsStore {
	settings: BackgroundSettings,
}

impl SettingsStore {
	/// Store holding the defaults, as used before any load.
	#[must_use]
	pub fn new() -> Self {
		Self {
			settings: BackgroundSettings::default(),
		}
	}

	/// Fetch the persisted snapshot and merge it over the defaults.
	///
	/// A missing snapshot is the normal first-run case and yields the
	/// defaults; a snapshot that cannot be decoded propagates as a load
	/// error instead of being silently replaced.
	pub fn load(storage: &dyn SnapshotStore) -> Result<Self, StorageError> {
		let snapshot = match storage.load_snapshot()? {
			Some(value) => {
				serde_json::from_value::<SettingsSnapshot>(value).map_err(StorageError::load)?
			}
			None => SettingsSnapshot::default(),
		};

		let settings = BackgroundSettings::from_snapshot(snapshot);
		debug!(?settings, "settings loaded");
		Ok(Self { settings })
	}

	/// Write the full current state through to the host store.
	pub fn save(&self, storage: &mut dyn SnapshotStore) -> Result<(), StorageError> {
		let value = serde_json::to_value(&self.settings).map_err(StorageError::save)?;
		storage.save_snapshot(&value)
	}

	/// The live settings value.
	#[must_use]
	pub fn current(&self) -> &BackgroundSettings {
		&self.settings
	}

	/// Mutable access for the editing surface; callers save afterwards.
	pub fn current_mut(&mut self) -> &mut BackgroundSettings {
		&mut self.settings
	}
}

impl Default for SettingsStore {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use backdrop_host_api::MemorySnapshotStore;
	use serde_json::json;

	use super::*;

	#[test]
	fn first_run_yields_defaults() {
		let storage = MemorySnapshotStore::new();
		let store = SettingsStore::load(&storage).expect("load");
		assert_eq!(*store.current(), BackgroundSettings::default());
	}

	#[test]
	fn partial_snapshot_merges_over_defaults() {
		let storage = MemorySnapshotStore::seeded(json!({ "contrastFactor": 1.6 }));
		let store = SettingsStore::load(&storage).expect("load");

		assert_eq!(store.current().contrast_factor, 1.6);
		assert_eq!(store.current().blur_radius, 0.0);
		assert_eq!(store.current().light_image_ref, "");
	}

	#[test]
	fn save_writes_the_full_object() {
		let mut storage = MemorySnapshotStore::new();
		let mut store = SettingsStore::new();
		store.current_mut().blur_radius = 12.0;

		store.save(&mut storage).expect("save");

		assert_eq!(
			storage.snapshot(),
			Some(&json!({
				"lightImageRef": "",
				"darkImageRef": "",
				"blurRadius": 12.0,
				"contrastFactor": 1.0,
			}))
		);
	}

	#[test]
	fn saved_state_reloads_identically() {
		let mut storage = MemorySnapshotStore::new();
		let mut store = SettingsStore::new();
		store.current_mut().dark_image_ref = "dark.png".into();
		store.current_mut().contrast_factor = 0.5;
		store.save(&mut storage).expect("save");

		let reloaded = SettingsStore::load(&storage).expect("load");
		assert_eq!(reloaded.current(), store.current());
	}

	#[test]
	fn undecodable_snapshot_is_a_load_error() {
		let storage = MemorySnapshotStore::seeded(json!([1, 2, 3]));
		let err = SettingsStore::load(&storage).expect_err("malformed snapshot");
		assert!(matches!(err, StorageError::Load(_)));
	}
}
