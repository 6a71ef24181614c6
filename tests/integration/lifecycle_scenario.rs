use filenode::{
    ConfiguredDirectories, FileNodeMetadata, OverflowChangeState, ProcessorStatus,
    SharedFileNode, UNSET_TIME,
};
use std::thread;
use tempfile::TempDir;

#[test]
fn open_close_merge_clear_lifecycle() {
    let temp = TempDir::new().unwrap();
    let dirs = ConfiguredDirectories::new(vec![temp.path().join("seq0")]);

    let mut node = FileNodeMetadata::new(OverflowChangeState::NoChange, 0, "seq/1.tsfile");

    node.set_start_time("d1", 100);
    assert!(!node.check_empty());
    assert!(!node.is_closed());

    node.set_end_time("d1", 200);
    assert!(node.is_closed());

    node.advance_on_merge(ProcessorStatus::MergingWrite);
    assert_eq!(
        node.overflow_change_state(),
        OverflowChangeState::MergingChange
    );

    let resolved = node.resolve_path(&dirs).unwrap().unwrap();
    assert_eq!(resolved, temp.path().join("seq0").join("seq/1.tsfile"));

    node.clear();
    assert!(node.check_empty());
    assert_eq!(node.overflow_change_state(), OverflowChangeState::NoChange);
    assert_eq!(node.resolve_path(&dirs).unwrap(), None);
    assert_eq!(node.start_time_or_unset("d1"), UNSET_TIME);
}

#[test]
fn cleared_record_can_be_reused_for_another_file() {
    let temp = TempDir::new().unwrap();
    let dirs = ConfiguredDirectories::new(vec![temp.path().join("a"), temp.path().join("b")]);

    let mut node = FileNodeMetadata::new(OverflowChangeState::Changed, 0, "seq/1.tsfile");
    node.set_start_time("d1", 1);
    node.clear();

    node.set_base_dir_index(1);
    node.set_relative_path(Some("seq/2.tsfile".to_string()));
    node.set_start_time("d2", 5);

    assert_eq!(
        node.resolve_path(&dirs).unwrap(),
        Some(temp.path().join("b").join("seq/2.tsfile"))
    );
    assert_eq!(node.start_time("d1"), None);
    assert_eq!(node.start_time("d2"), Some(5));
}

#[test]
fn merge_thread_and_writer_share_one_record() {
    let shared = SharedFileNode::new(FileNodeMetadata::new(
        OverflowChangeState::NoChange,
        0,
        "seq/9.tsfile",
    ));

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 0..100 {
                shared.update(|m| m.set_start_time(format!("d{}", i), i));
            }
        })
    };
    let merger = {
        let shared = shared.clone();
        thread::spawn(move || {
            shared.advance_on_merge(ProcessorStatus::Waiting, ["d0", "d1"]);
        })
    };

    writer.join().unwrap();
    merger.join().unwrap();

    let backup = shared.snapshot();
    assert_eq!(backup.start_time_map().len(), 100);
    assert_eq!(backup.overflow_change_state(), OverflowChangeState::Changed);
    assert!(backup.merge_changed().is_empty());
    assert_eq!(shared.read().merge_changed().len(), 2);
}
