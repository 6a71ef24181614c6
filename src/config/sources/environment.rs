//! Environment variable source: FILENODE_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses FILENODE_ prefix and __ as separator for nested keys,
/// e.g. `FILENODE_STORAGE__STORE_PATH`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("FILENODE")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("storage.tsfile_dirs")
            .try_parsing(true),
    );
    Ok(builder)
}
