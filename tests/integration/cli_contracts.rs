use std::fs;

use filenode::config::EngineConfig;
use filenode::tooling::cli::{CliContext, Commands};
use filenode::{
    ApiError, ConfiguredDirectories, FileNodeMetadata, FileNodeStore, OverflowChangeState,
    SledFileNodeStore,
};
use tempfile::TempDir;

fn context_with_record(temp: &TempDir) -> CliContext {
    let store = SledFileNodeStore::temporary().unwrap();
    let mut record = FileNodeMetadata::new(OverflowChangeState::NoChange, 1, "seq/1.tsfile");
    record.set_start_time("d1", 100);
    record.set_end_time("d1", 200);
    record.add_merge_changed("d1");
    store.put("seq/1.tsfile", &record).unwrap();

    let dirs = ConfiguredDirectories::new(vec![temp.path().join("r0"), temp.path().join("r1")]);
    CliContext::with_parts(EngineConfig::default(), dirs, Box::new(store))
}

#[test]
fn show_json_contract_has_all_fields() {
    let temp = TempDir::new().unwrap();
    let cli = context_with_record(&temp);

    let output = cli
        .execute(&Commands::Show {
            key: "seq/1.tsfile".to_string(),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["base_dir_index"].as_u64(), Some(1));
    assert_eq!(parsed["relative_path"].as_str(), Some("seq/1.tsfile"));
    assert_eq!(parsed["overflow_change_state"].as_str(), Some("NO_CHANGE"));
    assert_eq!(parsed["closed"].as_bool(), Some(true));
    assert_eq!(parsed["start_time_map"]["d1"].as_i64(), Some(100));
    assert_eq!(parsed["end_time_map"]["d1"].as_i64(), Some(200));
    assert_eq!(parsed["merge_changed"][0].as_str(), Some("d1"));
}

#[test]
fn resolve_joins_configured_root() {
    let temp = TempDir::new().unwrap();
    let cli = context_with_record(&temp);

    let output = cli
        .execute(&Commands::Resolve {
            key: "seq/1.tsfile".to_string(),
        })
        .unwrap();

    assert_eq!(
        output,
        temp.path().join("r1").join("seq/1.tsfile").display().to_string()
    );
    assert!(temp.path().join("r1").is_dir());
}

#[test]
fn list_and_remove() {
    let temp = TempDir::new().unwrap();
    let cli = context_with_record(&temp);

    let output = cli
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"].as_u64(), Some(1));

    cli.execute(&Commands::Remove {
        key: "seq/1.tsfile".to_string(),
    })
    .unwrap();
    assert!(cli.store().get("seq/1.tsfile").unwrap().is_none());

    let err = cli
        .execute(&Commands::Remove {
            key: "seq/1.tsfile".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
fn unknown_key_and_format_are_errors() {
    let temp = TempDir::new().unwrap();
    let cli = context_with_record(&temp);

    let err = cli
        .execute(&Commands::Show {
            key: "missing".to_string(),
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let err = cli
        .execute(&Commands::Dirs {
            format: "yaml".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::ConfigError(_)));
}

#[test]
fn context_from_config_file_uses_configured_paths() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    let root = temp.path().join("data0");
    let store_path = temp.path().join("store");
    fs::write(
        &config_path,
        format!(
            "[storage]\ntsfile_dirs = [{:?}]\nstore_path = {:?}\n",
            root.display().to_string(),
            store_path.display().to_string()
        ),
    )
    .unwrap();

    let cli = CliContext::new(temp.path().to_path_buf(), Some(config_path)).unwrap();
    assert_eq!(cli.config().storage.tsfile_dirs, vec![root.clone()]);

    let output = cli
        .execute(&Commands::Dirs {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"].as_u64(), Some(1));
    assert_eq!(
        parsed["roots"][0]["path"].as_str(),
        Some(root.display().to_string().as_str())
    );

    let listing = cli
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(listing, "No file node records.");
}
