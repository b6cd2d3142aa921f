// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::RawConfigFile;
use crate::types::FailurePolicy;

/// Command-line arguments for `wstow`.
///
/// Every value is optional so that an unset flag falls through to the
/// config file and then to the built-in default.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wstow",
    version,
    about = "Watch a dotfiles tree and keep it stowed.",
    long_about = None
)]
pub struct CliArgs {
    /// Source directory containing the packages.
    ///
    /// Default: `$HOME/Projects/dotfiles`.
    #[arg(long, value_name = "PATH")]
    pub src: Option<PathBuf>,

    /// Target directory to link packages into.
    ///
    /// Default: `$HOME`.
    #[arg(long, value_name = "PATH")]
    pub target: Option<PathBuf>,

    /// Adopt existing files at the target (`stow --adopt`). Default: true.
    #[arg(
        long = "override",
        alias = "adopt",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub adopt: Option<bool>,

    /// Pass `-v` to stow. Default: true.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub verbose: Option<bool>,

    /// Only log the stow invocations that would run.
    #[arg(long)]
    pub dry_run: bool,

    /// Timeout for a single stow invocation (e.g. `30s`).
    #[arg(long, value_name = "DURATION")]
    pub timeout: Option<String>,

    /// Quiet period after the last change before restowing (e.g. `800ms`).
    #[arg(long, value_name = "DURATION")]
    pub debounce: Option<String>,

    /// Comma-separated package names to exclude. Replaces the default
    /// `.git,.DS_Store`.
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Comma-separated paths (relative to the source) never to watch.
    /// Default: `.git`.
    #[arg(long, value_name = "PATHS", value_delimiter = ',')]
    pub watch_exclude: Option<Vec<String>>,

    /// What to do when a restow fails after startup (`exit` or `continue`).
    #[arg(long, value_name = "POLICY")]
    pub on_failure: Option<FailurePolicy>,

    /// Name or path of the stow executable.
    #[arg(long, value_name = "PATH")]
    pub stow: Option<PathBuf>,

    /// Path to a TOML config file.
    ///
    /// Default: `wstow/wstow.toml` in the user config directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WSTOW_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// The configuration values set on the command line.
    pub fn to_raw_config(&self) -> RawConfigFile {
        RawConfigFile {
            src: self.src.clone(),
            target: self.target.clone(),
            adopt: self.adopt,
            verbose: self.verbose,
            dry_run: self.dry_run.then_some(true),
            timeout: self.timeout.clone(),
            debounce: self.debounce.clone(),
            exclude: self.exclude.clone(),
            watch_exclude: self.watch_exclude.clone(),
            on_failure: self.on_failure,
            stow: self.stow.clone(),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
