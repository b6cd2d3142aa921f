// src/watch/mod.rs

//! File watching.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`).
//! - Keeping every directory of the source tree registered with it
//!   ([`WatchSet`]), since registrations are per directory.
//! - Classifying raw events into the structural changes that matter.
//!
//! It does **not** decide when to restow; that is the engine's job.

pub mod event;
pub mod path_utils;
pub mod primitive;
pub mod watch_set;
pub mod watcher;

pub use event::{ChangeKind, WatchSignal, registration_candidates};
pub use primitive::WatchPrimitive;
pub use watch_set::WatchSet;
pub use watcher::{NotifyPrimitive, spawn_watcher};
