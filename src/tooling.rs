//! Tooling & Integration Layer
//!
//! Command-line access to persisted file node bookkeeping.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
