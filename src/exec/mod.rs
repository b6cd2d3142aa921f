// src/exec/mod.rs

//! Synchronization layer.
//!
//! - [`args`] builds the stow argument vector from the config.
//! - [`stow`] enumerates packages and runs stow via `tokio::process::Command`
//!   with a timeout.
//! - [`backend`] provides the `SyncRunner` trait the engine drives, which
//!   tests replace with scripted fakes.

pub mod args;
pub mod backend;
pub mod stow;

pub use args::stow_args;
pub use backend::{RunFuture, RunOutcome, SyncRunner};
pub use stow::StowRunner;
