#![allow(dead_code)]

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use wstow::config::Config;
use wstow::types::FailurePolicy;

/// Builder for `Config` to simplify test setup.
///
/// Bypasses validation: paths are used as given and `stow` defaults to the
/// bare name `stow`.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new(src: impl AsRef<Path>, target: impl AsRef<Path>) -> Self {
        Self {
            config: Config {
                src: src.as_ref().to_path_buf(),
                target: target.as_ref().to_path_buf(),
                adopt: true,
                verbose: true,
                dry_run: false,
                timeout: Duration::from_secs(30),
                debounce: Duration::from_millis(800),
                exclude: [".git", ".DS_Store"].iter().map(|s| s.to_string()).collect(),
                watch_exclude: vec![PathBuf::from(".git")],
                on_failure: FailurePolicy::Exit,
                stow: PathBuf::from("stow"),
            },
        }
    }

    pub fn adopt(mut self, val: bool) -> Self {
        self.config.adopt = val;
        self
    }

    pub fn verbose(mut self, val: bool) -> Self {
        self.config.verbose = val;
        self
    }

    pub fn dry_run(mut self, val: bool) -> Self {
        self.config.dry_run = val;
        self
    }

    pub fn timeout(mut self, val: Duration) -> Self {
        self.config.timeout = val;
        self
    }

    pub fn debounce(mut self, val: Duration) -> Self {
        self.config.debounce = val;
        self
    }

    pub fn exclude(mut self, names: &[&str]) -> Self {
        self.config.exclude = names.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>();
        self
    }

    pub fn on_failure(mut self, val: FailurePolicy) -> Self {
        self.config.on_failure = val;
        self
    }

    pub fn stow(mut self, program: impl AsRef<Path>) -> Self {
        self.config.stow = program.as_ref().to_path_buf();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
