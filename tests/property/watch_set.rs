// tests/property/watch_set.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use wstow_test_utils::recording::RecordingPrimitive;

use crate::common::watch_set_for;
use wstow::fs::mock::MockFileSystem;

/// Relative directory paths, up to three levels deep.
fn tree() -> impl Strategy<Value = BTreeSet<PathBuf>> {
    let segment = prop_oneof!["[a-c]", Just(".git".to_string())];
    proptest::collection::btree_set(
        proptest::collection::vec(segment, 1..4)
            .prop_map(|parts| parts.iter().collect::<PathBuf>()),
        0..16,
    )
}

proptest! {
    #[test]
    fn repeated_walks_register_each_directory_once(
        dirs in tree(),
        restarts in proptest::collection::vec(0usize..16, 0..6),
    ) {
        let fs = MockFileSystem::new();
        fs.add_dir("/src");
        for d in &dirs {
            fs.add_dir(Path::new("/src").join(d));
        }

        let primitive = RecordingPrimitive::new();
        let set = watch_set_for(&fs, primitive.clone());
        set.ensure_watched(Path::new("/src")).unwrap();

        let all: Vec<&PathBuf> = dirs.iter().collect();
        for i in restarts {
            if let Some(d) = all.get(i) {
                set.ensure_watched(&Path::new("/src").join(d)).unwrap();
            }
        }

        let counts = primitive.counts();
        prop_assert!(counts.values().all(|&n| n == 1));

        // Every directory outside `.git` at the top level is watched.
        for d in &dirs {
            let full = Path::new("/src").join(d);
            let under_git = d.starts_with(".git");
            prop_assert_eq!(set.contains(&full), !under_git, "{:?}", full);
        }
        prop_assert_eq!(set.len(), counts.len());
    }
}
