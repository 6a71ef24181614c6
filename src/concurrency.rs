//! Guarded access to file node records
//!
//! [`FileNodeMetadata`] has no locking of its own. Owners that share a record
//! between a writer, a merge thread and query threads go through
//! [`SharedFileNode`], so only one mutator can hold the record at a time and
//! readers never observe a half-applied update.

use crate::directories::DirectoryRegistry;
use crate::error::ApiError;
use crate::filenode::{FileNodeMetadata, ProcessorStatus};
use crate::types::DeviceId;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::path::PathBuf;
use std::sync::Arc;

/// Cloneable handle to one record behind a read-write lock.
#[derive(Debug, Clone)]
pub struct SharedFileNode {
    inner: Arc<RwLock<FileNodeMetadata>>,
}

impl SharedFileNode {
    pub fn new(node: FileNodeMetadata) -> Self {
        Self {
            inner: Arc::new(RwLock::new(node)),
        }
    }

    /// Shared read guard; blocks while a writer holds the record.
    pub fn read(&self) -> RwLockReadGuard<'_, FileNodeMetadata> {
        self.inner.read()
    }

    /// Exclusive write guard.
    pub fn write(&self) -> RwLockWriteGuard<'_, FileNodeMetadata> {
        self.inner.write()
    }

    /// Run `f` with exclusive access and return its result.
    pub fn update<R>(&self, f: impl FnOnce(&mut FileNodeMetadata) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Independent copy taken under the read lock.
    pub fn snapshot(&self) -> FileNodeMetadata {
        self.inner.read().snapshot()
    }

    /// Apply an overflow merge: advance the state and record the touched devices
    /// under a single write guard.
    pub fn advance_on_merge<I, D>(&self, status: ProcessorStatus, devices: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<DeviceId>,
    {
        let mut guard = self.inner.write();
        guard.advance_on_merge(status);
        for device in devices {
            guard.add_merge_changed(device);
        }
    }

    pub fn resolve_path(&self, dirs: &dyn DirectoryRegistry) -> Result<Option<PathBuf>, ApiError> {
        self.inner.read().resolve_path(dirs)
    }

    /// Consume the handle, returning the record if this was the last reference.
    pub fn try_unwrap(self) -> Result<FileNodeMetadata, Self> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner())
            .map_err(|inner| Self { inner })
    }
}

impl From<FileNodeMetadata> for SharedFileNode {
    fn from(node: FileNodeMetadata) -> Self {
        Self::new(node)
    }
}
