// src/exec/stow.rs

//! Runs GNU Stow over the current package list.

use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::errors::RunError;
use crate::exec::args::stow_args;
use crate::exec::backend::{RunFuture, RunOutcome, SyncRunner};
use crate::fs::{FileSystem, list_packages};

/// Production runner: enumerates packages and invokes stow.
///
/// Stow runs in the source directory and inherits this process's stdout
/// and stderr. It is killed if the configured timeout elapses or if the
/// run future is dropped.
#[derive(Debug, Clone)]
pub struct StowRunner {
    config: Arc<Config>,
    fs: Arc<dyn FileSystem>,
}

impl StowRunner {
    pub fn new(config: Arc<Config>, fs: Arc<dyn FileSystem>) -> Self {
        Self { config, fs }
    }

    async fn run_once(&self) -> Result<RunOutcome, RunError> {
        let cfg = &self.config;

        let packages = list_packages(self.fs.as_ref(), &cfg.src, &cfg.exclude)
            .map_err(RunError::Packages)?;
        if packages.is_empty() {
            info!("No packages to stow");
            return Ok(RunOutcome::NothingToDo);
        }

        let args = stow_args(cfg, &packages);
        let rendered = format!("{} {}", cfg.stow.display(), args.join(" "));

        if cfg.dry_run {
            info!("Dry run: {rendered}");
            return Ok(RunOutcome::DryRun);
        }

        info!("Running: {rendered}");

        let mut child = Command::new(&cfg.stow)
            .args(&args)
            .current_dir(&cfg.src)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunError::Spawn {
                program: cfg.stow.display().to_string(),
                source,
            })?;

        let waited = tokio::time::timeout(cfg.timeout, child.wait()).await;
        let status = match waited {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                return Err(RunError::Other(format!("waiting for stow: {e}")));
            }
            Err(_elapsed) => {
                if let Err(e) = child.kill().await {
                    warn!(error = %e, "failed to kill stow after timeout");
                }
                error!(timeout = ?cfg.timeout, "stow timed out");
                return Err(RunError::Timeout(cfg.timeout));
            }
        };

        if !status.success() {
            error!(exit_code = ?status.code(), "stow failed");
            return Err(RunError::ExitStatus(status.code().unwrap_or(-1)));
        }

        info!("Ran: {rendered}");
        Ok(RunOutcome::Stowed)
    }
}

impl SyncRunner for StowRunner {
    fn run(&mut self) -> RunFuture<'_> {
        Box::pin(self.run_once())
    }
}
