//! Core types for file node bookkeeping.

/// DeviceId: name of one logical time-series source within a shared file
pub type DeviceId = String;

/// Timestamp: engine time, in whatever unit the writer uses
pub type Timestamp = i64;

/// Value returned by the legacy accessors when a device has no recorded time.
pub const UNSET_TIME: Timestamp = -1;
