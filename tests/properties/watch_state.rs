//! Property tests for snapshot comparison.

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use goldrun::domain::value_objects::{WatchEntry, WatchState};

fn files() -> impl Strategy<Value = BTreeMap<String, u64>> {
    proptest::collection::btree_map("[a-z]{1,8}\\.c", 0u64..1_000, 0..8)
}

fn state(files: &BTreeMap<String, u64>) -> WatchState {
    WatchState::from_entries(files.iter().map(|(path, secs)| {
        WatchEntry::new(path, SystemTime::UNIX_EPOCH + Duration::from_secs(*secs))
    }))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: insertion order never matters.
    #[test]
    fn property_order_independent(files in files()) {
        let forward = state(&files);
        let reversed = WatchState::from_entries(files.iter().rev().map(|(path, secs)| {
            WatchEntry::new(path, SystemTime::UNIX_EPOCH + Duration::from_secs(*secs))
        }));
        prop_assert_eq!(&forward, &reversed);
        prop_assert!(forward.changed_paths(&reversed).is_empty());
    }

    /// PROPERTY: replacing one file with another is a change even though
    /// the number of watched files stays the same.
    #[test]
    fn property_swap_is_detected(
        files in files().prop_filter("non-empty", |f| !f.is_empty()),
        replacement in "[A-Z]{1,8}\\.c",
    ) {
        let before = state(&files);
        let mut swapped = files.clone();
        let (removed, secs) = swapped.pop_first().unwrap();
        swapped.insert(replacement.clone(), secs);
        let after = state(&swapped);

        prop_assert_eq!(before.len(), after.len());
        prop_assert_ne!(&before, &after);
        let changed = after.changed_paths(&before);
        prop_assert!(changed.iter().any(|p| p.to_str() == Some(removed.as_str())));
        prop_assert!(changed.iter().any(|p| p.to_str() == Some(replacement.as_str())));
    }

    /// PROPERTY: touching a file reports exactly that file.
    #[test]
    fn property_touch_reports_one_path(
        files in files().prop_filter("non-empty", |f| !f.is_empty()),
    ) {
        let before = state(&files);
        let mut touched = files.clone();
        let (path, secs) = touched.iter().next().map(|(p, s)| (p.clone(), *s)).unwrap();
        touched.insert(path.clone(), secs + 1);

        let changed = state(&touched).changed_paths(&before);
        prop_assert_eq!(changed.len(), 1);
        prop_assert_eq!(changed[0].to_str(), Some(path.as_str()));
    }
}
