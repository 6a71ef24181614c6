//! Storage configuration.

mod storage_paths;

pub use storage_paths::StorageConfig;
