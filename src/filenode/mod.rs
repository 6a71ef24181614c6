//! File Node Metadata
//!
//! Bookkeeping record for one physical data file: which devices it holds data
//! for, the first and last timestamp written per device, and how overflow
//! merges have affected it.

pub mod overflow;

pub use overflow::{OverflowChangeState, ProcessorStatus};

use crate::directories::DirectoryRegistry;
use crate::error::ApiError;
use crate::types::{DeviceId, Timestamp, UNSET_TIME};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Per-device timestamps, keyed by device id
pub type TimeMap = BTreeMap<DeviceId, Timestamp>;

/// Bookkeeping record for one data file.
///
/// Equality and hashing are by value over every field. The record has no
/// internal locking; share it through [`crate::concurrency::SharedFileNode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileNodeMetadata {
    overflow_change_state: OverflowChangeState,
    base_dir_index: usize,
    relative_path: Option<String>,
    start_time_map: TimeMap,
    end_time_map: TimeMap,
    #[serde(default)]
    merge_changed: BTreeSet<DeviceId>,
}

impl FileNodeMetadata {
    /// Create an empty record for a newly opened file.
    pub fn new(
        state: OverflowChangeState,
        base_dir_index: usize,
        relative_path: impl Into<String>,
    ) -> Self {
        Self::with_times(
            TimeMap::new(),
            TimeMap::new(),
            state,
            base_dir_index,
            Some(relative_path.into()),
        )
    }

    /// Create a record from already known time ranges, e.g. when restoring.
    pub fn with_times(
        start_time_map: TimeMap,
        end_time_map: TimeMap,
        state: OverflowChangeState,
        base_dir_index: usize,
        relative_path: Option<String>,
    ) -> Self {
        Self {
            overflow_change_state: state,
            base_dir_index,
            relative_path,
            start_time_map,
            end_time_map,
            merge_changed: BTreeSet::new(),
        }
    }

    /// Create a record stored under the first configured root.
    pub fn in_default_dir(state: OverflowChangeState, relative_path: impl Into<String>) -> Self {
        Self::new(state, 0, relative_path)
    }

    /// Create a record stored under `base_dir`, which must be a configured root.
    pub fn in_base_dir(
        state: OverflowChangeState,
        base_dir: &Path,
        relative_path: impl Into<String>,
        dirs: &dyn DirectoryRegistry,
    ) -> Result<Self, ApiError> {
        let index = dirs.index_of(base_dir).ok_or_else(|| {
            ApiError::ConfigError(format!(
                "{} is not a configured storage root",
                base_dir.display()
            ))
        })?;
        let relative_path = relative_path.into();
        tracing::debug!(index, relative_path = %relative_path, "Bound file node to storage root");
        Ok(Self::new(state, index, relative_path))
    }

    // --- time ranges ---

    pub fn set_start_time(&mut self, device: impl Into<DeviceId>, timestamp: Timestamp) {
        self.start_time_map.insert(device.into(), timestamp);
    }

    pub fn set_end_time(&mut self, device: impl Into<DeviceId>, timestamp: Timestamp) {
        self.end_time_map.insert(device.into(), timestamp);
    }

    pub fn start_time(&self, device: &str) -> Option<Timestamp> {
        self.start_time_map.get(device).copied()
    }

    pub fn end_time(&self, device: &str) -> Option<Timestamp> {
        self.end_time_map.get(device).copied()
    }

    /// Start time of `device`, or [`UNSET_TIME`] if none was recorded.
    pub fn start_time_or_unset(&self, device: &str) -> Timestamp {
        self.start_time(device).unwrap_or(UNSET_TIME)
    }

    /// End time of `device`, or [`UNSET_TIME`] if none was recorded.
    pub fn end_time_or_unset(&self, device: &str) -> Timestamp {
        self.end_time(device).unwrap_or(UNSET_TIME)
    }

    /// Drop `device` from both time maps. Unknown devices are ignored.
    pub fn remove_time(&mut self, device: &str) {
        self.start_time_map.remove(device);
        self.end_time_map.remove(device);
    }

    pub fn start_time_map(&self) -> &TimeMap {
        &self.start_time_map
    }

    pub fn set_start_time_map(&mut self, start_time_map: TimeMap) {
        self.start_time_map = start_time_map;
    }

    pub fn end_time_map(&self) -> &TimeMap {
        &self.end_time_map
    }

    pub fn set_end_time_map(&mut self, end_time_map: TimeMap) {
        self.end_time_map = end_time_map;
    }

    /// True when no device has a start or end time.
    pub fn check_empty(&self) -> bool {
        self.start_time_map.is_empty() && self.end_time_map.is_empty()
    }

    /// True once at least one device has an end time.
    pub fn is_closed(&self) -> bool {
        !self.end_time_map.is_empty()
    }

    /// Reset to a pathless, empty record that can be reused for another file.
    pub fn clear(&mut self) {
        tracing::debug!(
            relative_path = ?self.relative_path,
            devices = self.start_time_map.len(),
            "Clearing file node"
        );
        self.start_time_map.clear();
        self.end_time_map.clear();
        self.merge_changed.clear();
        self.overflow_change_state = OverflowChangeState::NoChange;
        self.relative_path = None;
    }

    // --- overflow state ---

    /// Record that overflow data touched this file while the owner was in `status`.
    pub fn advance_on_merge(&mut self, status: ProcessorStatus) {
        let next = OverflowChangeState::on_merge(status);
        tracing::debug!(
            relative_path = ?self.relative_path,
            from = %self.overflow_change_state,
            to = %next,
            "Overflow change state advanced"
        );
        self.overflow_change_state = next;
    }

    pub fn overflow_change_state(&self) -> OverflowChangeState {
        self.overflow_change_state
    }

    /// Assign a state directly, bypassing the merge transition rule.
    pub fn set_overflow_change_state(&mut self, state: OverflowChangeState) {
        self.overflow_change_state = state;
    }

    // --- merge tracking ---

    pub fn add_merge_changed(&mut self, device: impl Into<DeviceId>) {
        self.merge_changed.insert(device.into());
    }

    pub fn merge_changed(&self) -> &BTreeSet<DeviceId> {
        &self.merge_changed
    }

    /// Live view of the merge set; edits apply to this record.
    pub fn merge_changed_mut(&mut self) -> &mut BTreeSet<DeviceId> {
        &mut self.merge_changed
    }

    pub fn clear_merge_changed(&mut self) {
        self.merge_changed.clear();
    }

    // --- location ---

    pub fn base_dir_index(&self) -> usize {
        self.base_dir_index
    }

    pub fn set_base_dir_index(&mut self, base_dir_index: usize) {
        self.base_dir_index = base_dir_index;
    }

    pub fn relative_path(&self) -> Option<&str> {
        self.relative_path.as_deref()
    }

    pub fn set_relative_path(&mut self, relative_path: Option<String>) {
        self.relative_path = relative_path;
    }

    /// Absolute path of the data file, or `None` for a pathless record.
    ///
    /// Errors from the registry are returned as is.
    pub fn resolve_path(&self, dirs: &dyn DirectoryRegistry) -> Result<Option<PathBuf>, ApiError> {
        match self.relative_path.as_deref() {
            None | Some("") => Ok(None),
            Some(relative) => {
                let root = dirs.resolve(self.base_dir_index)?;
                // Leading separators or drive prefixes must not replace the root.
                let nested: PathBuf = Path::new(relative)
                    .components()
                    .filter(|c| {
                        matches!(c, Component::Normal(_) | Component::CurDir | Component::ParentDir)
                    })
                    .collect();
                Ok(Some(root.join(nested)))
            }
        }
    }

    /// Independent copy of the time ranges, state and location.
    ///
    /// The merge set is not carried over.
    pub fn snapshot(&self) -> Self {
        Self::with_times(
            self.start_time_map.clone(),
            self.end_time_map.clone(),
            self.overflow_change_state,
            self.base_dir_index,
            self.relative_path.clone(),
        )
    }
}

impl fmt::Display for FileNodeMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FileNode [relative_path={}, overflow_change_state={}, start_time_map={:?}, end_time_map={:?}, merge_changed={:?}]",
            self.relative_path.as_deref().unwrap_or("<none>"),
            self.overflow_change_state,
            self.start_time_map,
            self.end_time_map,
            self.merge_changed
        )
    }
}
