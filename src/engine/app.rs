// src/engine/app.rs

//! Top-level lifecycle: Starting -> Watching -> ShuttingDown.
//!
//! - Starting: register the whole source tree, then stow once. Either
//!   failing is fatal; the process never watches an unsynchronized tree.
//! - Watching: the trigger scheduler runs on its own task while the event
//!   loop consumes watcher events on this one.
//! - ShuttingDown: entered on cancellation (signal, or a fatal restow) or
//!   when the scheduler task ends for any other reason.
//!   A restow already in flight is allowed to finish or time out.

use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::engine::event_loop::EventLoop;
use crate::engine::scheduler::TriggerScheduler;
use crate::errors::{Result, WstowError};
use crate::exec::SyncRunner;
use crate::fs::FileSystem;
use crate::types::{FailurePolicy, Phase};
use crate::watch::{WatchPrimitive, WatchSet, WatchSignal};

/// Options used by the engine once watching.
#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    pub debounce: Duration,
    pub on_failure: FailurePolicy,
}

pub struct App<P, R>
where
    P: WatchPrimitive + 'static,
    R: SyncRunner + 'static,
{
    watch_set: Arc<WatchSet<P>>,
    fs: Arc<dyn FileSystem>,
    runner: R,
    events: mpsc::UnboundedReceiver<WatchSignal>,
    options: AppOptions,
    cancel: CancellationToken,
}

impl<P, R> App<P, R>
where
    P: WatchPrimitive + 'static,
    R: SyncRunner + 'static,
{
    pub fn new(
        watch_set: Arc<WatchSet<P>>,
        fs: Arc<dyn FileSystem>,
        runner: R,
        events: mpsc::UnboundedReceiver<WatchSignal>,
        options: AppOptions,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            watch_set,
            fs,
            runner,
            events,
            options,
            cancel,
        }
    }

    pub async fn run(self) -> Result<()> {
        let App {
            watch_set,
            fs,
            mut runner,
            events,
            options,
            cancel,
        } = self;

        info!(phase = ?Phase::Starting, "registering watches");
        let root = watch_set.root().to_path_buf();
        let registered = {
            let watch_set = Arc::clone(&watch_set);
            tokio::task::spawn_blocking(move || watch_set.ensure_watched(&root))
                .await
                .map_err(|e| WstowError::Setup(format!("watch registration task failed: {e}")))?
                .map_err(|e| WstowError::Setup(format!("Failed to add watchers: {e}")))?
        };
        info!(directories = registered, "Watching {}", watch_set.root().display());

        if cancel.is_cancelled() {
            info!(phase = ?Phase::ShuttingDown, "cancelled during startup");
            return Ok(());
        }

        runner.run().await.map_err(WstowError::Bootstrap)?;

        info!(phase = ?Phase::Watching, debounce = ?options.debounce, "waiting for changes");
        let scheduler =
            TriggerScheduler::new(runner, options.debounce, options.on_failure, cancel.clone());
        let trigger = scheduler.handle();
        let mut scheduler_task = tokio::spawn(scheduler.run());

        let event_loop = EventLoop::new(watch_set, fs, trigger, events, cancel.clone()).run();
        tokio::pin!(event_loop);

        // If the scheduler ends first (fatal restow or panic), stop watching.
        let finished_early = tokio::select! {
            _ = &mut event_loop => None,
            joined = &mut scheduler_task => Some(joined),
        };

        info!(phase = ?Phase::ShuttingDown, "stopping");
        cancel.cancel();
        let joined = match finished_early {
            Some(joined) => {
                warn!("trigger scheduler stopped; leaving watch loop");
                joined
            }
            None => scheduler_task.await,
        };
        joined.map_err(|e| WstowError::Other(anyhow!("trigger scheduler task failed: {e}")))?
    }
}
