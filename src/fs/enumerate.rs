// src/fs/enumerate.rs

//! Directory enumeration: immediate subdirectories and stow packages.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::FileSystem;

/// List the immediate subdirectories of `dir` as full paths.
pub fn subdirectories(fs: &dyn FileSystem, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = fs
        .read_dir(dir)?
        .into_iter()
        .filter(|p| fs.is_dir(p))
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// List the packages under `root`: every direct subdirectory whose name is
/// neither in `exclude` nor hidden (leading `.`). Sorted by name.
pub fn list_packages(
    fs: &dyn FileSystem,
    root: &Path,
    exclude: &BTreeSet<String>,
) -> Result<Vec<String>> {
    let packages = subdirectories(fs, root)?
        .into_iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .filter(|name| is_package_name(name, exclude))
        .collect();
    Ok(packages)
}

fn is_package_name(name: &str, exclude: &BTreeSet<String>) -> bool {
    !exclude.contains(name) && !name.starts_with('.')
}
