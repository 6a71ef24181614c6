//! Sled-backed file node store with bincode encoding.

use super::FileNodeStore;
use crate::error::StorageError;
use crate::filenode::FileNodeMetadata;
use std::path::Path;

const TREE_NAME: &str = "file_nodes";

pub struct SledFileNodeStore {
    db: sled::Db,
    tree: sled::Tree,
}

impl SledFileNodeStore {
    /// Open (or create) a store at `path`.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    /// In-memory store that is discarded on drop.
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    fn from_db(db: sled::Db) -> Result<Self, StorageError> {
        let tree = db.open_tree(TREE_NAME)?;
        Ok(Self { db, tree })
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }

    fn decode_key(raw: &[u8]) -> Result<String, StorageError> {
        String::from_utf8(raw.to_vec())
            .map_err(|e| StorageError::InvalidKey(format!("non UTF8 key: {}", e)))
    }
}

impl FileNodeStore for SledFileNodeStore {
    fn get(&self, key: &str) -> Result<Option<FileNodeMetadata>, StorageError> {
        match self.tree.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(bincode::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, record: &FileNodeMetadata) -> Result<(), StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey("key cannot be empty".to_string()));
        }
        let bytes = bincode::serialize(record)?;
        self.tree.insert(key.as_bytes(), bytes)?;
        tracing::debug!(key, state = %record.overflow_change_state(), "Stored file node");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, StorageError> {
        let removed = self.tree.remove(key.as_bytes())?.is_some();
        if removed {
            tracing::debug!(key, "Deleted file node");
        }
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<(String, FileNodeMetadata)>, StorageError> {
        let mut records = Vec::new();
        for entry in self.tree.iter() {
            let (key, value) = entry?;
            let key = match Self::decode_key(&key) {
                Ok(key) => key,
                Err(e) => {
                    tracing::warn!("Skipping file node entry: {}", e);
                    continue;
                }
            };
            records.push((key, bincode::deserialize(&value)?));
        }
        Ok(records)
    }
}
