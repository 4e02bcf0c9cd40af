//! Resolve the directory that stores the persisted settings snapshot.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "backdrop";
const APPLICATION: &str = "backdrop";

/// Environment variable overriding the platform data directory.
pub const DATA_DIR_ENV: &str = "BACKDROP_DATA_DIR";

/// Return the data directory that stores the persisted settings snapshot.
///
/// An explicit `BACKDROP_DATA_DIR` wins over the platform location reported
/// by the `directories` crate. An empty override counts as unset so that
/// shell defaults do not redirect storage to `""`.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(value) = env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(value));
    }

    let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("unable to determine project directories for backdrop"))?;
    Ok(dirs.data_local_dir().to_path_buf())
}
