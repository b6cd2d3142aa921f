// src/watch/primitive.rs

//! The watch primitive the watch set registers directories with.
//!
//! Production code uses [`NotifyPrimitive`](crate::watch::NotifyPrimitive),
//! which wraps a non-recursive `notify` watcher; tests record calls instead.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

/// Registers a single directory (non-recursively) for change events.
pub trait WatchPrimitive: Send + Sync {
    fn add(&self, path: &Path) -> Result<()>;
}

impl<P: WatchPrimitive + ?Sized> WatchPrimitive for Arc<P> {
    fn add(&self, path: &Path) -> Result<()> {
        (**self).add(path)
    }
}
