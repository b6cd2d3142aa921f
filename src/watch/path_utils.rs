// src/watch/path_utils.rs

//! Path helpers for relating event paths to the watch root.

use std::path::{Path, PathBuf};

/// Return `path` relative to `root`.
///
/// A direct `strip_prefix(root)` is tried first. If that fails (e.g. due to
/// symlinks or different absolute prefixes such as macOS `/private/var`),
/// both paths are canonicalized and the strip is tried again.
///
/// Returns `None` if the path cannot be related to `root`.
pub fn relative_to(root: &Path, path: &Path) -> Option<PathBuf> {
    if let Ok(rel) = path.strip_prefix(root) {
        return Some(rel.to_path_buf());
    }

    if let (Ok(root_canon), Ok(path_canon)) = (root.canonicalize(), path.canonicalize()) {
        if let Ok(rel) = path_canon.strip_prefix(&root_canon) {
            return Some(rel.to_path_buf());
        }
    }

    None
}

/// True if `rel` equals one of `skip` or lies underneath it, compared
/// component-wise (so `.git` skips `.git/objects` but not `.github`).
pub fn is_under_any(rel: &Path, skip: &[PathBuf]) -> bool {
    skip.iter().any(|s| rel.starts_with(s))
}
