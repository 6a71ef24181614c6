//! Built-in defaults that every source is layered over.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

/// Builder seeded with defaults for keys whose absence would fail deserialization.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("storage.store_path", ".filenode/store")?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "file")
}
