// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod signals;
pub mod types;
pub mod watch;

use std::sync::Arc;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::engine::{App, AppOptions};
use crate::exec::StowRunner;
use crate::fs::{FileSystem, RealFileSystem};
use crate::watch::{WatchSet, spawn_watcher};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (CLI over config file over defaults)
/// - the native watcher and the watch set
/// - the stow runner
/// - Ctrl-C / SIGTERM handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(args.config.as_deref(), args.to_raw_config())?;
    cfg.print();
    let cfg = Arc::new(cfg);

    let cancel = CancellationToken::new();
    let _signals = signals::spawn_signal_listener(cancel.clone());

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let (primitive, events) = spawn_watcher()?;
    let watch_set = Arc::new(WatchSet::new(
        cfg.src.clone(),
        cfg.watch_exclude.clone(),
        primitive,
        Arc::clone(&fs),
    ));
    let runner = StowRunner::new(Arc::clone(&cfg), Arc::clone(&fs));

    let options = AppOptions {
        debounce: cfg.debounce,
        on_failure: cfg.on_failure,
    };

    App::new(watch_set, fs, runner, events, options, cancel)
        .run()
        .await?;

    Ok(())
}
