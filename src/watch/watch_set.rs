// src/watch/watch_set.rs

//! The set of directories currently registered with the watch primitive.
//!
//! `notify` is used non-recursively here, so every directory in the tree
//! must be registered individually. [`WatchSet::ensure_watched`] walks a
//! subtree with an explicit worklist and registers each directory at most
//! once, even when several walks overlap (the initial walk racing a
//! "directory created" event, for instance).
//!
//! Entries are never removed when a directory is deleted. A stale entry is
//! a harmless no-op for the primitive, but a long-running process whose
//! tree churns through many directory names will keep growing the set.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::errors::{Result, WstowError};
use crate::fs::{FileSystem, subdirectories};
use crate::watch::path_utils::{is_under_any, relative_to};
use crate::watch::primitive::WatchPrimitive;

pub struct WatchSet<P: WatchPrimitive> {
    root: PathBuf,
    skip: Vec<PathBuf>,
    primitive: P,
    fs: Arc<dyn FileSystem>,
    watched: Mutex<HashSet<PathBuf>>,
}

impl<P: WatchPrimitive> std::fmt::Debug for WatchSet<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchSet")
            .field("root", &self.root)
            .field("skip", &self.skip)
            .field("watched", &self.len())
            .finish_non_exhaustive()
    }
}

impl<P: WatchPrimitive> WatchSet<P> {
    /// `skip` holds paths relative to `root` whose subtrees are never
    /// watched (typically `.git`).
    pub fn new(
        root: impl Into<PathBuf>,
        skip: Vec<PathBuf>,
        primitive: P,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        Self {
            root: root.into(),
            skip,
            primitive,
            fs,
            watched: Mutex::new(HashSet::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.lock().contains(path)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register `path` and every directory below it that is not already
    /// watched and not inside a skipped subtree.
    ///
    /// Returns the number of directories newly registered by this call.
    /// Failures below `path` are logged and that subtree is skipped; only a
    /// failure to register or read `path` itself is returned.
    pub fn ensure_watched(&self, path: &Path) -> Result<usize> {
        let start = path.to_path_buf();
        let mut pending = vec![start.clone()];
        let mut registered = 0;

        while let Some(dir) = pending.pop() {
            if self.is_skipped(&dir) || !self.claim(&dir) {
                continue;
            }

            if let Err(err) = self.primitive.add(&dir) {
                self.release(&dir);
                if dir == start {
                    return Err(WstowError::WatchRegistration { path: dir, source: err });
                }
                warn!(path = ?dir, error = %err, "failed to watch directory; skipping subtree");
                continue;
            }
            registered += 1;
            debug!(path = ?dir, "watching directory");

            match subdirectories(self.fs.as_ref(), &dir) {
                Ok(children) => pending.extend(children),
                Err(err) if dir == start => {
                    return Err(WstowError::WatchRegistration { path: dir, source: err });
                }
                Err(err) => {
                    warn!(path = ?dir, error = %err, "failed to list directory; skipping subtree");
                }
            }
        }

        Ok(registered)
    }

    fn is_skipped(&self, dir: &Path) -> bool {
        match relative_to(&self.root, dir) {
            Some(rel) => is_under_any(&rel, &self.skip),
            None => {
                warn!(path = ?dir, root = ?self.root, "path is outside the watch root; ignoring");
                true
            }
        }
    }

    /// Membership test and insert in one step; true if `dir` was not yet a
    /// member.
    fn claim(&self, dir: &Path) -> bool {
        self.lock().insert(dir.to_path_buf())
    }

    fn release(&self, dir: &Path) {
        self.lock().remove(dir);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<PathBuf>> {
        // The set stays consistent even if a holder panicked.
        self.watched
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
