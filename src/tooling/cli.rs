//! CLI Tooling
//!
//! Command-line interface for inspecting persisted file node records and the
//! storage roots they resolve against.

use crate::config::{ConfigLoader, EngineConfig};
use crate::directories::{ConfiguredDirectories, DirectoryRegistry};
use crate::error::ApiError;
use crate::filenode::FileNodeMetadata;
use crate::store::{FileNodeStore, SledFileNodeStore};
use crate::tooling::format::{format_dirs_text, format_record_list_text, format_record_text};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Filenode CLI - inspect time-series file bookkeeping
#[derive(Parser)]
#[command(name = "filenode")]
#[command(about = "Inspect per-file time range and overflow bookkeeping")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base directory that relative storage paths resolve against
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List configured storage roots
    Dirs {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List stored file node records
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one file node record
    Show {
        /// Record key
        key: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the absolute data file path of a record
    Resolve {
        /// Record key
        key: String,
    },
    /// Delete a record from the store
    Remove {
        /// Record key
        key: String,
    },
}

/// Resolved state a command runs against.
pub struct CliContext {
    config: EngineConfig,
    dirs: ConfiguredDirectories,
    store: Box<dyn FileNodeStore>,
}

impl CliContext {
    /// Load configuration and open the record store.
    pub fn new(base_dir: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load_optional(config_path.as_deref())?;
        Self::from_config(base_dir, config)
    }

    /// Open the record store described by an already loaded configuration.
    pub fn from_config(base_dir: PathBuf, config: EngineConfig) -> Result<Self, ApiError> {
        let (tsfile_dirs, store_path) = config.storage.resolve_paths(&base_dir)?;
        let store = SledFileNodeStore::open(&store_path)?;
        info!(store = %store_path.display(), roots = tsfile_dirs.len(), "Opened file node store");
        Ok(Self::with_parts(
            config,
            ConfiguredDirectories::new(tsfile_dirs),
            Box::new(store),
        ))
    }

    /// Build a context from already constructed parts.
    pub fn with_parts(
        config: EngineConfig,
        dirs: ConfiguredDirectories,
        store: Box<dyn FileNodeStore>,
    ) -> Self {
        Self {
            config,
            dirs,
            store,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn FileNodeStore {
        self.store.as_ref()
    }

    fn get_or_error(&self, key: &str) -> Result<FileNodeMetadata, ApiError> {
        self.store
            .get(key)?
            .ok_or_else(|| ApiError::NotFound(format!("file node record: {}", key)))
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Dirs { format } => {
                let roots = self.dirs.roots();
                match parse_output_format(format)? {
                    OutputFormat::Json => to_json(&json!({
                        "roots": roots
                            .iter()
                            .enumerate()
                            .map(|(index, path)| json!({ "index": index, "path": path }))
                            .collect::<Vec<_>>(),
                        "total": roots.len(),
                    })),
                    OutputFormat::Text => Ok(format_dirs_text(roots)),
                }
            }
            Commands::List { format } => {
                let records = self.store.list()?;
                match parse_output_format(format)? {
                    OutputFormat::Json => to_json(&json!({
                        "records": records
                            .iter()
                            .map(|(key, record)| record_json(key, record))
                            .collect::<Vec<_>>(),
                        "total": records.len(),
                    })),
                    OutputFormat::Text => Ok(format_record_list_text(&records)),
                }
            }
            Commands::Show { key, format } => {
                let record = self.get_or_error(key)?;
                match parse_output_format(format)? {
                    OutputFormat::Json => to_json(&record_json(key, &record)),
                    OutputFormat::Text => Ok(format_record_text(key, &record)),
                }
            }
            Commands::Resolve { key } => {
                let record = self.get_or_error(key)?;
                match record.resolve_path(&self.dirs)? {
                    Some(path) => Ok(path.display().to_string()),
                    None => Ok(format!("Record {} has no data file", key)),
                }
            }
            Commands::Remove { key } => {
                if self.store.delete(key)? {
                    info!(key = %key, "Removed file node record");
                    Ok(format!("Removed {}", key))
                } else {
                    Err(ApiError::NotFound(format!("file node record: {}", key)))
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_output_format(format: &str) -> Result<OutputFormat, ApiError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ApiError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

fn to_json(value: &serde_json::Value) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::ConfigError(format!("Failed to render JSON: {}", e)))
}

fn record_json(key: &str, record: &FileNodeMetadata) -> serde_json::Value {
    json!({
        "key": key,
        "base_dir_index": record.base_dir_index(),
        "relative_path": record.relative_path(),
        "overflow_change_state": record.overflow_change_state().to_string(),
        "closed": record.is_closed(),
        "start_time_map": record.start_time_map(),
        "end_time_map": record.end_time_map(),
        "merge_changed": record.merge_changed(),
    })
}
