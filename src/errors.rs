// src/errors.rs

//! Crate-wide error types.
//!
//! The variants follow how each failure is treated at runtime:
//! - `Setup`: fatal, raised before the watcher starts.
//! - `WatchRegistration`: recoverable, the affected subtree is skipped.
//! - `WatchStream`: recoverable, the event loop logs it and carries on.
//! - `Run`: the external stow invocation failed.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WstowError {
    #[error("Setup error: {0}")]
    Setup(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("failed to watch {path:?}: {source}")]
    WatchRegistration {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("watch stream error: {0}")]
    WatchStream(String),

    #[error("Initial stow failed: {0}")]
    Bootstrap(#[source] RunError),

    #[error("Restow failed: {0}")]
    Run(#[from] RunError),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("notify error: {0}")]
    Notify(#[from] notify::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Why a single synchronization run failed.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("could not list packages: {0}")]
    Packages(#[source] anyhow::Error),

    #[error("could not spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stow exited with status {0}")]
    ExitStatus(i32),

    #[error("stow did not finish within {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, WstowError>;
