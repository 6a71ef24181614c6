//! Source composition for [`crate::config::EngineConfig`].

mod merge_policy;
pub mod service;
