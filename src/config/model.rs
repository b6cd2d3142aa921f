// src/config/model.rs

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::types::FailurePolicy;

/// Configuration as read from a TOML file, before defaults are applied.
///
/// ```toml
/// src = "~/Projects/dotfiles"
/// target = "~"
/// override = true
/// verbose = true
/// dry_run = false
/// timeout = "30s"
/// debounce = "800ms"
/// exclude = [".git", ".DS_Store"]
/// watch_exclude = [".git"]
/// on_failure = "exit"
/// stow = "stow"
/// ```
///
/// Every key is optional. Command-line flags take precedence over the file
/// (see [`RawConfigFile::overlay`]).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    /// Directory containing one subdirectory per stow package.
    #[serde(default)]
    pub src: Option<PathBuf>,

    /// Directory the packages are linked into.
    #[serde(default)]
    pub target: Option<PathBuf>,

    /// Pass `--adopt` to stow, absorbing conflicting target files into the
    /// source tree.
    #[serde(default, rename = "override", alias = "adopt")]
    pub adopt: Option<bool>,

    #[serde(default)]
    pub verbose: Option<bool>,

    #[serde(default)]
    pub dry_run: Option<bool>,

    /// Duration string, e.g. `"30s"`.
    #[serde(default)]
    pub timeout: Option<String>,

    /// Duration string, e.g. `"800ms"`.
    #[serde(default)]
    pub debounce: Option<String>,

    /// Top-level names that are never treated as packages. Replaces the
    /// default set when present.
    #[serde(default)]
    pub exclude: Option<Vec<String>>,

    /// Paths relative to `src` whose subtrees are never watched.
    #[serde(default)]
    pub watch_exclude: Option<Vec<String>>,

    #[serde(default)]
    pub on_failure: Option<FailurePolicy>,

    /// Name or path of the stow executable.
    #[serde(default)]
    pub stow: Option<PathBuf>,
}

impl RawConfigFile {
    /// Layer `top` over `self`: every value set in `top` wins.
    pub fn overlay(self, top: RawConfigFile) -> RawConfigFile {
        RawConfigFile {
            src: top.src.or(self.src),
            target: top.target.or(self.target),
            adopt: top.adopt.or(self.adopt),
            verbose: top.verbose.or(self.verbose),
            dry_run: top.dry_run.or(self.dry_run),
            timeout: top.timeout.or(self.timeout),
            debounce: top.debounce.or(self.debounce),
            exclude: top.exclude.or(self.exclude),
            watch_exclude: top.watch_exclude.or(self.watch_exclude),
            on_failure: top.on_failure.or(self.on_failure),
            stow: top.stow.or(self.stow),
        }
    }
}

pub const DEFAULT_TIMEOUT: &str = "30s";
pub const DEFAULT_DEBOUNCE: &str = "800ms";
pub const DEFAULT_EXCLUDE: &[&str] = &[".git", ".DS_Store"];
pub const DEFAULT_WATCH_EXCLUDE: &[&str] = &[".git"];
pub const DEFAULT_STOW: &str = "stow";

/// Resolved, validated configuration. Immutable after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Canonical path of the watched source tree.
    pub src: PathBuf,
    pub target: PathBuf,
    pub adopt: bool,
    pub verbose: bool,
    pub dry_run: bool,
    /// Upper bound on a single stow invocation.
    pub timeout: Duration,
    /// Quiet period required before a restow.
    pub debounce: Duration,
    pub exclude: BTreeSet<String>,
    pub watch_exclude: Vec<PathBuf>,
    pub on_failure: FailurePolicy,
    /// Resolved path of the stow executable.
    pub stow: PathBuf,
}

impl Config {
    /// Print the startup banner to stdout.
    pub fn print(&self) {
        println!("wstow - Watch and Stow dotfiles");
        println!("Src: {}", self.src.display());
        println!("Target: {}", self.target.display());
        println!("Override: {}", self.adopt);
        println!("Verbose: {}", self.verbose);
        println!("Dry Run: {}", self.dry_run);
        println!("Timeout: {:?}", self.timeout);
        println!("Debounce: {:?}", self.debounce);
        println!("On failure: {:?}", self.on_failure);
        for ex in &self.exclude {
            println!("Excluding package: {ex}");
        }
    }
}
