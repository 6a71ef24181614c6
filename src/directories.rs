//! Storage root registry
//!
//! Maps a small integer index to a configured data folder. File node records
//! only hold the index; the folder itself is owned by the registry.

use crate::error::ApiError;
use std::path::{Path, PathBuf};

/// Lookup contract between file node records and the configured storage roots.
pub trait DirectoryRegistry: Send + Sync {
    /// Resolve `index` to its storage root.
    ///
    /// Fails with [`ApiError::ConfigError`] when the index is not configured.
    fn resolve(&self, index: usize) -> Result<PathBuf, ApiError>;

    /// Reverse lookup: index of the root equal to `dir`, if configured.
    fn index_of(&self, dir: &Path) -> Option<usize>;

    /// All configured roots in index order.
    fn roots(&self) -> &[PathBuf];
}

/// Registry backed by a fixed list of folders from configuration.
///
/// A folder that does not exist yet is created the first time it is resolved.
#[derive(Debug, Clone)]
pub struct ConfiguredDirectories {
    roots: Vec<PathBuf>,
}

impl ConfiguredDirectories {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

impl DirectoryRegistry for ConfiguredDirectories {
    fn resolve(&self, index: usize) -> Result<PathBuf, ApiError> {
        let root = self.roots.get(index).ok_or_else(|| {
            ApiError::ConfigError(format!(
                "Storage root index {} is not configured ({} roots available)",
                index,
                self.roots.len()
            ))
        })?;

        if !root.exists() {
            std::fs::create_dir_all(root).map_err(|e| {
                ApiError::ConfigError(format!(
                    "Failed to create storage root {}: {}",
                    root.display(),
                    e
                ))
            })?;
            tracing::info!(index, root = %root.display(), "Created storage root");
        }

        Ok(root.clone())
    }

    fn index_of(&self, dir: &Path) -> Option<usize> {
        self.roots.iter().position(|root| root == dir)
    }

    fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}
