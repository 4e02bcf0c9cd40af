//! Disk-backed snapshot store for running the plugin outside a host.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use backdrop_host_api::{SnapshotStore, StorageError};
use serde_json::Value;
use tracing::debug;

use crate::app_dirs;

const SNAPSHOT_FILE: &str = "settings.json";

/// Snapshot store keeping the object in a single JSON file.
///
/// A missing file reads as "no snapshot yet"; saves rewrite the file
/// wholesale, creating parent directories on first use.
#[derive(Debug, Clone)]
pub struct DiskSnapshotStore {
	path: PathBuf,
}

impl DiskSnapshotStore {
	/// Store writing to an explicit file path.
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Store writing `settings.json` inside the given directory.
	#[must_use]
	pub fn in_dir(dir: impl AsRef<Path>) -> Self {
		Self::new(dir.as_ref().join(SNAPSHOT_FILE))
	}

	/// Store rooted in the platform data directory, honoring the
	/// `BACKDROP_DATA_DIR` override.
	pub fn at_default_location() -> Result<Self> {
		Ok(Self::in_dir(app_dirs::get_data_dir()?))
	}

	/// The file this store reads and writes.
	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl SnapshotStore for DiskSnapshotStore {
	fn load_snapshot(&self) -> Result<Option<Value>, StorageError> {
		let bytes = match fs::read(&self.path) {
			Ok(bytes) => bytes,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				debug!(path = %self.path.display(), "no persisted snapshot");
				return Ok(None);
			}
			Err(err) => return Err(StorageError::load(err)),
		};

		let value = serde_json::from_slice(&bytes).map_err(StorageError::load)?;
		Ok(Some(value))
	}

	fn save_snapshot(&mut self, snapshot: &Value) -> Result<(), StorageError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).map_err(StorageError::save)?;
		}

		let bytes = serde_json::to_vec_pretty(snapshot).map_err(StorageError::save)?;
		fs::write(&self.path, bytes).map_err(StorageError::save)?;
		debug!(path = %self.path.display(), "snapshot saved");
		Ok(())
	}
}
