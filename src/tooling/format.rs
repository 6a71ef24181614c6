//! Format storage roots and file node records as text.

use crate::filenode::FileNodeMetadata;
use crate::types::UNSET_TIME;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use std::collections::BTreeSet;
use std::path::PathBuf;

pub fn format_dirs_text(roots: &[PathBuf]) -> String {
    if roots.is_empty() {
        return "No storage roots configured.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Index", "Path", "Exists"]);
    for (index, root) in roots.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            root.display().to_string(),
            if root.is_dir() { "yes" } else { "no" }.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_record_list_text(records: &[(String, FileNodeMetadata)]) -> String {
    if records.is_empty() {
        return "No file node records.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Key", "Root", "Relative path", "Devices", "Closed", "Overflow"]);
    for (key, record) in records {
        table.add_row(vec![
            key.clone(),
            record.base_dir_index().to_string(),
            record.relative_path().unwrap_or("-").to_string(),
            device_ids(record).len().to_string(),
            if record.is_closed() { "yes" } else { "no" }.to_string(),
            record.overflow_change_state().to_string(),
        ]);
    }
    format!("{}\n\nTotal: {}", table, records.len())
}

/// Record header followed by one row per device.
pub fn format_record_text(key: &str, record: &FileNodeMetadata) -> String {
    let mut out = String::new();
    out.push_str(&format!("Record: {}\n", key));
    out.push_str(&format!("  Root index: {}\n", record.base_dir_index()));
    out.push_str(&format!(
        "  Relative path: {}\n",
        record.relative_path().unwrap_or("-")
    ));
    out.push_str(&format!("  Overflow: {}\n", record.overflow_change_state()));
    out.push_str(&format!(
        "  Closed: {}\n\n",
        if record.is_closed() { "yes" } else { "no" }
    ));

    let devices = device_ids(record);
    if devices.is_empty() {
        out.push_str("No devices recorded.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Device", "Start", "End", "Merge changed"]);
    for device in devices {
        table.add_row(vec![
            device.to_string(),
            time_cell(record.start_time_or_unset(device)),
            time_cell(record.end_time_or_unset(device)),
            if record.merge_changed().contains(device) { "yes" } else { "" }.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

fn device_ids(record: &FileNodeMetadata) -> BTreeSet<&str> {
    record
        .start_time_map()
        .keys()
        .chain(record.end_time_map().keys())
        .map(String::as_str)
        .collect()
}

fn time_cell(timestamp: i64) -> String {
    if timestamp == UNSET_TIME {
        "-".to_string()
    } else {
        timestamp.to_string()
    }
}
