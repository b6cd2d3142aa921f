// src/engine/event_loop.rs

//! Turns raw watcher events into watch registrations and restow triggers.

use std::path::PathBuf;
use std::sync::Arc;

use notify::Event;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use crate::engine::pending::TriggerHandle;
use crate::errors::WstowError;
use crate::fs::FileSystem;
use crate::watch::{ChangeKind, WatchPrimitive, WatchSet, WatchSignal, registration_candidates};

pub struct EventLoop<P: WatchPrimitive + 'static> {
    watch_set: Arc<WatchSet<P>>,
    fs: Arc<dyn FileSystem>,
    trigger: TriggerHandle,
    events: mpsc::UnboundedReceiver<WatchSignal>,
    cancel: CancellationToken,
}

impl<P: WatchPrimitive + 'static> EventLoop<P> {
    pub fn new(
        watch_set: Arc<WatchSet<P>>,
        fs: Arc<dyn FileSystem>,
        trigger: TriggerHandle,
        events: mpsc::UnboundedReceiver<WatchSignal>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            watch_set,
            fs,
            trigger,
            events,
            cancel,
        }
    }

    /// Process events until cancelled or until the watcher goes away.
    pub async fn run(mut self) {
        let cancel = self.cancel.clone();

        loop {
            let signal = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("cancellation received; leaving watch loop");
                    break;
                }
                signal = self.events.recv() => signal,
            };

            match signal {
                Some(WatchSignal::Event(event)) => self.handle_event(event).await,
                Some(WatchSignal::Error(err)) => {
                    let err = WstowError::WatchStream(err.to_string());
                    warn!(error = %err, "Watch error");
                }
                None => {
                    warn!("watcher channel closed; leaving watch loop");
                    break;
                }
            }
        }
    }

    /// New directories are registered before the trigger is raised, so a
    /// directory created before its contents is watched by the time those
    /// contents' events are processed.
    async fn handle_event(&self, event: Event) {
        let kind = ChangeKind::of(&event.kind);
        if !kind.is_structural() {
            trace!(?kind, paths = ?event.paths, "ignoring non-structural event");
            return;
        }
        debug!(?kind, paths = ?event.paths, "structural change");

        let new_dirs: Vec<PathBuf> = registration_candidates(&event)
            .into_iter()
            .filter(|p| self.fs.is_dir(p))
            .map(|p| p.to_path_buf())
            .collect();
        for dir in new_dirs {
            self.register(dir).await;
        }

        if self.trigger.notify() {
            debug!("restow scheduled");
        } else {
            trace!("restow already pending; coalesced");
        }
    }

    async fn register(&self, dir: PathBuf) {
        let watch_set = Arc::clone(&self.watch_set);
        let walked = {
            let dir = dir.clone();
            tokio::task::spawn_blocking(move || watch_set.ensure_watched(&dir)).await
        };

        match walked {
            Ok(Ok(0)) => {}
            Ok(Ok(added)) => debug!(path = ?dir, added, "watching new directories"),
            Ok(Err(err)) => warn!(error = %err, "could not watch new directory"),
            Err(join_err) => warn!(path = ?dir, error = %join_err, "watch registration task failed"),
        }
    }
}
