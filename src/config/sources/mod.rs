//! Configuration sources, lowest precedence first.

pub mod environment;
pub mod file;
pub mod global_file;
