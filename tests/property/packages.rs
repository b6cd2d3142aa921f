// tests/property/packages.rs

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;
use wstow::fs::list_packages;
use wstow::fs::mock::MockFileSystem;

fn entry_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,6}",
        "\\.[a-z]{1,6}",
        Just(".git".to_string()),
        Just(".DS_Store".to_string()),
    ]
}

proptest! {
    #[test]
    fn packages_are_visible_unexcluded_and_sorted(
        dirs in proptest::collection::btree_set(entry_name(), 0..20),
        files in proptest::collection::btree_set("[a-z]{1,6}\\.txt", 0..5),
        excluded in proptest::collection::btree_set("[a-z]{1,6}", 0..4),
    ) {
        let fs = MockFileSystem::new();
        fs.add_dir("/src");
        for d in &dirs {
            fs.add_dir(Path::new("/src").join(d));
        }
        for f in &files {
            fs.add_file(Path::new("/src").join(f));
        }

        let pkgs = list_packages(&fs, Path::new("/src"), &excluded).unwrap();

        for p in &pkgs {
            prop_assert!(!p.starts_with('.'));
            prop_assert!(!excluded.contains(p));
            prop_assert!(dirs.contains(p), "{p} is not a directory");
        }
        prop_assert!(pkgs.windows(2).all(|w| w[0] < w[1]));

        let expected: BTreeSet<&String> = dirs
            .iter()
            .filter(|d| !d.starts_with('.') && !excluded.contains(*d))
            .collect();
        prop_assert_eq!(pkgs.iter().collect::<BTreeSet<_>>(), expected);
    }
}
