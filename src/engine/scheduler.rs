// src/engine/scheduler.rs

//! Debounced trigger scheduler.
//!
//! Waits on three things: a filled pending slot, the debounce timer, and
//! cancellation. Every trigger restarts the single timer, so a run only
//! happens after a full debounce window with no new triggers. Runs are
//! awaited inline, which serializes them; triggers arriving meanwhile
//! coalesce in the pending slot and start a fresh window afterwards.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::engine::pending::{PendingTrigger, TriggerHandle};
use crate::errors::{Result, WstowError};
use crate::exec::SyncRunner;
use crate::types::FailurePolicy;

enum Wake {
    Cancelled,
    Triggered,
    TimerFired,
}

pub struct TriggerScheduler<R: SyncRunner> {
    runner: R,
    debounce: Duration,
    policy: FailurePolicy,
    pending: Arc<PendingTrigger>,
    cancel: CancellationToken,
}

impl<R: SyncRunner> std::fmt::Debug for TriggerScheduler<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerScheduler")
            .field("debounce", &self.debounce)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<R: SyncRunner> TriggerScheduler<R> {
    pub fn new(
        runner: R,
        debounce: Duration,
        policy: FailurePolicy,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            runner,
            debounce,
            policy,
            pending: Arc::new(PendingTrigger::new()),
            cancel,
        }
    }

    pub fn handle(&self) -> TriggerHandle {
        TriggerHandle::new(Arc::clone(&self.pending))
    }

    /// Run until cancelled.
    ///
    /// Returns an error only when a run fails under
    /// [`FailurePolicy::Exit`]; in that case the shared cancellation token
    /// is cancelled too, so the rest of the process winds down.
    pub async fn run(mut self) -> Result<()> {
        let cancel = self.cancel.clone();
        let pending = Arc::clone(&self.pending);

        let timer = tokio::time::sleep(self.debounce);
        tokio::pin!(timer);
        let mut armed = false;

        loop {
            let wake = tokio::select! {
                biased;
                _ = cancel.cancelled() => Wake::Cancelled,
                _ = pending.wait() => Wake::Triggered,
                _ = &mut timer, if armed => Wake::TimerFired,
            };

            match wake {
                Wake::Cancelled => {
                    debug!(abandoned = armed, "trigger scheduler cancelled");
                    return Ok(());
                }
                Wake::Triggered => {
                    let Some(deadline) = Instant::now().checked_add(self.debounce) else {
                        self.cancel.cancel();
                        return Err(WstowError::ConfigError(format!(
                            "debounce {:?} is too large",
                            self.debounce
                        )));
                    };
                    timer.as_mut().reset(deadline);
                    armed = true;
                }
                Wake::TimerFired => {
                    armed = false;
                    info!("Changes settled; restowing");
                    self.restow().await?;
                }
            }
        }
    }

    async fn restow(&mut self) -> Result<()> {
        match self.runner.run().await {
            Ok(outcome) => {
                debug!(?outcome, "restow finished");
                Ok(())
            }
            Err(err) => match self.policy {
                FailurePolicy::Exit => {
                    error!(error = %err, "Restow failed");
                    self.cancel.cancel();
                    Err(WstowError::Run(err))
                }
                FailurePolicy::Continue => {
                    warn!(error = %err, "Restow failed; retrying on the next change");
                    Ok(())
                }
            },
        }
    }
}
