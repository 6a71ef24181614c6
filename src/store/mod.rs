//! File Node Store
//!
//! Persists file node records so an owning processor can rebuild its
//! bookkeeping after a restart or a crash mid-merge.

pub mod persistence;

pub use persistence::SledFileNodeStore;

use crate::error::StorageError;
use crate::filenode::FileNodeMetadata;

/// File node store interface
///
/// Keys are chosen by the caller; the relative path of the data file is the
/// usual choice.
pub trait FileNodeStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<FileNodeMetadata>, StorageError>;
    fn put(&self, key: &str, record: &FileNodeMetadata) -> Result<(), StorageError>;
    /// Returns whether a record was removed.
    fn delete(&self, key: &str) -> Result<bool, StorageError>;
    /// All records ordered by key.
    fn list(&self) -> Result<Vec<(String, FileNodeMetadata)>, StorageError>;
}
