// src/exec/backend.rs

//! Pluggable synchronization runner abstraction.
//!
//! The engine talks to a `SyncRunner` instead of spawning stow itself.
//! Production uses [`StowRunner`](crate::exec::StowRunner); tests provide
//! runners that record calls and return scripted outcomes.

use std::future::Future;
use std::pin::Pin;

use crate::errors::RunError;

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No packages found; stow was not invoked.
    NothingToDo,
    /// Dry-run mode; the invocation was only logged.
    DryRun,
    /// Stow ran and exited successfully.
    Stowed,
}

pub type RunFuture<'a> = Pin<Box<dyn Future<Output = Result<RunOutcome, RunError>> + Send + 'a>>;

/// Performs one synchronization of the source tree into the target.
///
/// Runs are never overlapped by the engine; implementations need not be
/// safe for concurrent use.
pub trait SyncRunner: Send {
    fn run(&mut self) -> RunFuture<'_>;
}
