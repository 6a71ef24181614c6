use filenode::{FileNodeMetadata, OverflowChangeState, ProcessorStatus, UNSET_TIME};
use proptest::prelude::*;

fn device() -> impl Strategy<Value = String> {
    "d[0-9]{1,3}"
}

fn status() -> impl Strategy<Value = ProcessorStatus> {
    prop_oneof![
        Just(ProcessorStatus::None),
        Just(ProcessorStatus::MergingWrite),
        Just(ProcessorStatus::Waiting),
    ]
}

fn state() -> impl Strategy<Value = OverflowChangeState> {
    prop_oneof![
        Just(OverflowChangeState::NoChange),
        Just(OverflowChangeState::Changed),
        Just(OverflowChangeState::MergingChange),
    ]
}

fn populated() -> impl Strategy<Value = FileNodeMetadata> {
    (
        state(),
        0usize..4,
        prop::collection::btree_map(device(), any::<i64>(), 0..8),
        prop::collection::btree_map(device(), any::<i64>(), 0..8),
        prop::collection::btree_set(device(), 0..4),
    )
        .prop_map(|(state, index, starts, ends, merged)| {
            let mut node = FileNodeMetadata::with_times(
                starts,
                ends,
                state,
                index,
                Some("seq/1.tsfile".to_string()),
            );
            for device in merged {
                node.add_merge_changed(device);
            }
            node
        })
}

proptest! {
    #[test]
    fn unknown_devices_read_unset(node in populated(), probe in "x[a-z]{1,6}") {
        prop_assert_eq!(node.start_time_or_unset(&probe), UNSET_TIME);
        prop_assert_eq!(node.end_time_or_unset(&probe), UNSET_TIME);
    }

    #[test]
    fn set_then_get_returns_last_write(device in device(), first in any::<i64>(), second in any::<i64>()) {
        let mut node = FileNodeMetadata::new(OverflowChangeState::NoChange, 0, "seq/1.tsfile");
        node.set_start_time(device.clone(), first);
        prop_assert_eq!(node.start_time(&device), Some(first));
        node.set_start_time(device.clone(), second);
        prop_assert_eq!(node.start_time(&device), Some(second));
    }

    #[test]
    fn check_empty_tracks_both_maps(node in populated()) {
        prop_assert_eq!(
            node.check_empty(),
            node.start_time_map().is_empty() && node.end_time_map().is_empty()
        );
        prop_assert_eq!(node.is_closed(), !node.end_time_map().is_empty());

        let mut cleared = node.clone();
        cleared.clear();
        prop_assert!(cleared.check_empty());
        prop_assert!(!cleared.is_closed());
        prop_assert_eq!(cleared.overflow_change_state(), OverflowChangeState::NoChange);
        prop_assert_eq!(cleared.relative_path(), None);
    }

    #[test]
    fn advance_on_merge_follows_status(node in populated(), status in status()) {
        let mut node = node;
        node.advance_on_merge(status);
        let expected = if status == ProcessorStatus::MergingWrite {
            OverflowChangeState::MergingChange
        } else {
            OverflowChangeState::Changed
        };
        prop_assert_eq!(node.overflow_change_state(), expected);
    }

    #[test]
    fn snapshot_copies_time_ranges_but_not_merge_set(node in populated(), device in device(), ts in any::<i64>()) {
        let original = node.clone();
        let mut copy = node.snapshot();

        prop_assert_eq!(copy.overflow_change_state(), original.overflow_change_state());
        prop_assert_eq!(copy.base_dir_index(), original.base_dir_index());
        prop_assert_eq!(copy.relative_path(), original.relative_path());
        prop_assert_eq!(copy.start_time_map(), original.start_time_map());
        prop_assert_eq!(copy.end_time_map(), original.end_time_map());
        prop_assert!(copy.merge_changed().is_empty());

        copy.set_start_time(device.clone(), ts);
        copy.set_end_time(device, ts);
        prop_assert_eq!(&node, &original);
    }

    #[test]
    fn independently_built_records_are_equal(node in populated()) {
        let mut rebuilt = FileNodeMetadata::with_times(
            node.start_time_map().clone(),
            node.end_time_map().clone(),
            node.overflow_change_state(),
            node.base_dir_index(),
            node.relative_path().map(str::to_string),
        );
        for device in node.merge_changed() {
            rebuilt.add_merge_changed(device.clone());
        }
        prop_assert_eq!(rebuilt, node);
    }
}
