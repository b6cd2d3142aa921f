// src/engine/pending.rs

//! Single-slot "a run is owed" signal.
//!
//! This is a bounded queue of capacity one with a non-blocking enqueue:
//! offering into a full slot is a no-op, so any burst of changes leaves at
//! most one outstanding trigger.

use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

#[derive(Debug, Default)]
pub struct PendingTrigger {
    slot: Mutex<bool>,
    wake: Notify,
}

impl PendingTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the slot. Never blocks. Returns false if it was already full.
    pub fn offer(&self) -> bool {
        {
            let mut slot = self.lock();
            if *slot {
                return false;
            }
            *slot = true;
        }
        self.wake.notify_one();
        true
    }

    /// Empty the slot, returning whether it was full.
    pub fn take(&self) -> bool {
        std::mem::replace(&mut *self.lock(), false)
    }

    pub fn is_set(&self) -> bool {
        *self.lock()
    }

    /// Wait until the slot is full, then empty it.
    ///
    /// Cancel safe: the slot is only emptied in the poll that completes.
    pub async fn wait(&self) {
        loop {
            if self.take() {
                return;
            }
            self.wake.notified().await;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, bool> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Cloneable, non-blocking handle used by the event loop to request a run.
#[derive(Debug, Clone)]
pub struct TriggerHandle {
    pending: Arc<PendingTrigger>,
}

impl TriggerHandle {
    pub fn new(pending: Arc<PendingTrigger>) -> Self {
        Self { pending }
    }

    /// Record that something changed. Coalesces with an outstanding
    /// trigger; returns true if this call filled the slot.
    pub fn notify(&self) -> bool {
        self.pending.offer()
    }

    /// True while a trigger is waiting to be picked up by the scheduler.
    pub fn is_pending(&self) -> bool {
        self.pending.is_set()
    }
}
