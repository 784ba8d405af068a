use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable holding a platform path list of network files.
pub const DATA_ENV_VAR: &str = "ROUTENET_DATA";

/// Default filename for the network inside the platform data directory.
const NETWORK_FILENAME: &str = "map_data.json";

/// Resolve the default network location using platform-specific project directories.
pub fn default_network_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "routenet", "routenet").ok_or(Error::DataDirUnavailable)?;
    Ok(dirs.data_dir().join(NETWORK_FILENAME))
}

/// Decide which network files to load.
///
/// The resolution order is:
/// 1. Explicit `paths` when any are provided.
/// 2. The `ROUTENET_DATA` environment variable, split like `PATH`.
/// 3. `map_data.json` inside the platform data directory.
///
/// Every resolved file must exist.
pub fn resolve_network_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let env_value = env::var_os(DATA_ENV_VAR);
    resolve_with_env(paths, env_value.as_deref())
}

fn resolve_with_env(paths: &[PathBuf], env_value: Option<&OsStr>) -> Result<Vec<PathBuf>> {
    let resolved = if !paths.is_empty() {
        paths.to_vec()
    } else if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        env::split_paths(value).collect()
    } else {
        vec![default_network_path()?]
    };

    for path in &resolved {
        ensure_exists(path)?;
    }
    debug!(files = resolved.len(), "resolved network files");
    Ok(resolved)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::NetworkNotFound {
            path: path.to_path_buf(),
        })
    }
}
