//! StorageConfig and resolve_paths for data roots and the record store.

use crate::config::xdg;
use crate::directories::ConfiguredDirectories;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_store_path() -> PathBuf {
    PathBuf::from(".filenode/store")
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data file roots, addressed by position. Relative entries are resolved
    /// against the base directory; empty means the single XDG data root.
    #[serde(default)]
    pub tsfile_dirs: Vec<PathBuf>,

    /// Path to the file node record store (relative to the base directory)
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

impl StorageConfig {
    /// Resolve data roots and store path to actual filesystem locations.
    pub fn resolve_paths(&self, base: &Path) -> Result<(Vec<PathBuf>, PathBuf), ApiError> {
        Ok((self.resolve_tsfile_dirs(base)?, self.resolve_store_path(base)?))
    }

    pub fn resolve_tsfile_dirs(&self, base: &Path) -> Result<Vec<PathBuf>, ApiError> {
        if self.tsfile_dirs.is_empty() {
            return Ok(vec![xdg::engine_data_dir()?.join("data")]);
        }
        Ok(self.tsfile_dirs.iter().map(|dir| base.join(dir)).collect())
    }

    pub fn resolve_store_path(&self, base: &Path) -> Result<PathBuf, ApiError> {
        if self.store_path == default_store_path() {
            Ok(xdg::engine_data_dir()?.join("store"))
        } else {
            Ok(base.join(&self.store_path))
        }
    }

    /// Directory registry over the resolved data roots.
    pub fn directories(&self, base: &Path) -> Result<ConfiguredDirectories, ApiError> {
        Ok(ConfiguredDirectories::new(self.resolve_tsfile_dirs(base)?))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            tsfile_dirs: Vec::new(),
            store_path: default_store_path(),
        }
    }
}
