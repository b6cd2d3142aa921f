// src/engine/mod.rs

//! Orchestration engine for wstow.
//!
//! This module ties together:
//! - the single-slot pending trigger ([`pending`])
//! - the debounced trigger scheduler that serializes restows ([`scheduler`])
//! - the event loop that reacts to watcher events ([`event_loop`])
//! - the process lifecycle around them ([`app`])

pub mod app;
pub mod event_loop;
pub mod pending;
pub mod scheduler;

pub use app::{App, AppOptions};
pub use event_loop::EventLoop;
pub use pending::{PendingTrigger, TriggerHandle};
pub use scheduler::TriggerScheduler;
