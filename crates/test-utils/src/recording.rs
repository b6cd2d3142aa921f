use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use wstow::watch::WatchPrimitive;

/// Watch primitive that records every registration.
///
/// An optional per-call delay widens race windows in concurrency tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingPrimitive {
    added: Arc<Mutex<Vec<PathBuf>>>,
    delay: Duration,
}

impl RecordingPrimitive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn added(&self) -> Vec<PathBuf> {
        self.added.lock().unwrap().clone()
    }

    /// How many times each path was registered.
    pub fn counts(&self) -> HashMap<PathBuf, usize> {
        let mut counts = HashMap::new();
        for p in self.added.lock().unwrap().iter() {
            *counts.entry(p.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl WatchPrimitive for RecordingPrimitive {
    fn add(&self, path: &Path) -> Result<()> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        self.added.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
