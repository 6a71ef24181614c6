//! Overflow change state and the processor status that drives it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a data file has been affected by overflow (out-of-order or update) writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OverflowChangeState {
    /// Untouched by overflow data
    #[default]
    NoChange,
    /// Overflow data arrived while the owning processor was not merging
    Changed,
    /// Overflow data arrived while the owning processor was in a merge write
    MergingChange,
}

impl OverflowChangeState {
    /// Target state for an overflow change observed under `status`.
    pub fn on_merge(status: ProcessorStatus) -> Self {
        match status {
            ProcessorStatus::MergingWrite => OverflowChangeState::MergingChange,
            _ => OverflowChangeState::Changed,
        }
    }
}

impl fmt::Display for OverflowChangeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverflowChangeState::NoChange => "NO_CHANGE",
            OverflowChangeState::Changed => "CHANGED",
            OverflowChangeState::MergingChange => "MERGING_CHANGE",
        };
        f.write_str(name)
    }
}

/// Status of the file node processor that owns a record.
///
/// Only [`ProcessorStatus::MergingWrite`] is significant to bookkeeping; every
/// other status yields [`OverflowChangeState::Changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProcessorStatus {
    #[default]
    None,
    MergingWrite,
    Waiting,
}
