//! Integration tests for file node bookkeeping

mod cli_contracts;
mod lifecycle_scenario;
mod property_contracts;
