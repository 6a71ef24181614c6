//! Filenode: Time-Series File Bookkeeping
//!
//! Tracks, for each physical data file of a time-series engine, the devices it
//! holds, the first and last timestamp written per device, and whether an
//! overflow merge has changed the file.

pub mod concurrency;
pub mod config;
pub mod directories;
pub mod error;
pub mod filenode;
pub mod logging;
pub mod store;
pub mod tooling;
pub mod types;

pub use concurrency::SharedFileNode;
pub use crate::directories::{ConfiguredDirectories, DirectoryRegistry};
pub use error::{ApiError, StorageError};
pub use filenode::{FileNodeMetadata, OverflowChangeState, ProcessorStatus, TimeMap};
pub use store::{FileNodeStore, SledFileNodeStore};
pub use types::{DeviceId, Timestamp, UNSET_TIME};
