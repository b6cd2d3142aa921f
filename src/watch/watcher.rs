// src/watch/watcher.rs

use std::path::Path;
use std::sync::Mutex;

use anyhow::anyhow;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::errors::Result;
use crate::watch::event::WatchSignal;
use crate::watch::primitive::WatchPrimitive;

/// `notify`-backed watch primitive.
///
/// Each directory is registered non-recursively; the watch set is
/// responsible for discovering subdirectories. Dropping this value stops
/// file watching.
pub struct NotifyPrimitive {
    inner: Mutex<RecommendedWatcher>,
}

impl std::fmt::Debug for NotifyPrimitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifyPrimitive").finish()
    }
}

impl WatchPrimitive for NotifyPrimitive {
    fn add(&self, path: &Path) -> anyhow::Result<()> {
        let mut watcher = self
            .inner
            .lock()
            .map_err(|_| anyhow!("watcher mutex poisoned"))?;
        watcher.watch(path, RecursiveMode::NonRecursive)?;
        Ok(())
    }
}

/// Create the native filesystem watcher.
///
/// Returns the primitive used to register directories, and the receiving
/// end of the channel that every event and watch error is forwarded to.
pub fn spawn_watcher() -> Result<(NotifyPrimitive, mpsc::UnboundedReceiver<WatchSignal>)> {
    // Channel from the blocking notify callback into the async world.
    let (event_tx, event_rx) = mpsc::unbounded_channel::<WatchSignal>();

    // Closure called synchronously by notify whenever an event arrives.
    let watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            let signal = match res {
                Ok(event) => WatchSignal::Event(event),
                Err(err) => WatchSignal::Error(err),
            };
            if let Err(err) = event_tx.send(signal) {
                // The event loop is gone; nothing left to deliver to.
                eprintln!("wstow: failed to forward notify event: {err}");
            }
        },
        Config::default(),
    )?;

    Ok((
        NotifyPrimitive {
            inner: Mutex::new(watcher),
        },
        event_rx,
    ))
}
