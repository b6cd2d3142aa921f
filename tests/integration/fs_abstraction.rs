// tests/integration/fs_abstraction.rs

use std::collections::BTreeSet;
use std::path::Path;

use wstow::fs::mock::MockFileSystem;
use wstow::fs::{list_packages, subdirectories, FileSystem, RealFileSystem};

fn default_exclude() -> BTreeSet<String> {
    [".git", ".DS_Store"].iter().map(|s| s.to_string()).collect()
}

#[test]
fn mock_and_real_agree_on_packages() {
    let layout_dirs = ["zsh", "nvim/.config/nvim", ".git/objects", ".DS_Store", "tmux"];
    let layout_files = ["README.md", "zsh/.zshrc"];

    let mock = MockFileSystem::new();
    for d in layout_dirs {
        mock.add_dir(Path::new("/src").join(d));
    }
    for f in layout_files {
        mock.add_file(Path::new("/src").join(f));
    }

    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    for d in layout_dirs {
        std::fs::create_dir_all(root.join(d)).unwrap();
    }
    for f in layout_files {
        std::fs::write(root.join(f), "").unwrap();
    }

    let from_mock = list_packages(&mock, Path::new("/src"), &default_exclude()).unwrap();
    let from_real = list_packages(&RealFileSystem, &root, &default_exclude()).unwrap();

    assert_eq!(from_mock, vec!["nvim", "tmux", "zsh"]);
    assert_eq!(from_mock, from_real);
}

#[test]
fn subdirectories_are_full_sorted_paths() {
    let fs = MockFileSystem::new();
    fs.add_dir("/src/b");
    fs.add_dir("/src/a/inner");
    fs.add_file("/src/c.txt");

    let dirs = subdirectories(&fs, Path::new("/src")).unwrap();
    assert_eq!(dirs, vec![Path::new("/src/a"), Path::new("/src/b")]);
}

#[test]
fn removed_subtree_disappears() {
    let fs = MockFileSystem::new();
    fs.add_dir("/src/nvim/.config/nvim");
    fs.remove("/src/nvim");

    assert!(!fs.is_dir(Path::new("/src/nvim/.config")));
    assert!(!fs.is_dir(Path::new("/src/nvim")));
    assert!(fs.read_dir(Path::new("/src")).unwrap().is_empty());
}

#[test]
fn unreadable_directory_errors() {
    let fs = MockFileSystem::new();
    fs.add_dir("/src/private");
    fs.deny_read("/src/private");

    assert!(fs.is_dir(Path::new("/src/private")));
    assert!(fs.read_dir(Path::new("/src/private")).is_err());
}
