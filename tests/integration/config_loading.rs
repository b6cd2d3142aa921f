// tests/integration/config_loading.rs

use std::collections::BTreeSet;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tempfile::TempDir;

use wstow::cli::CliArgs;
use wstow::config::{load_and_validate, load_from_path, resolve_config, RawConfigFile};
use wstow::errors::WstowError;
use wstow::types::FailurePolicy;

use crate::common::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

/// A home directory with a dotfiles checkout and a stand-in stow binary.
struct Home {
    dir: TempDir,
}

impl Home {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Projects/dotfiles/zsh")).unwrap();
        std::fs::write(dir.path().join("stow"), "#!/bin/sh\n").unwrap();
        Self { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.path().canonicalize().unwrap()
    }

    fn dotfiles(&self) -> PathBuf {
        self.path().join("Projects/dotfiles")
    }

    fn stow(&self) -> PathBuf {
        self.path().join("stow")
    }

    fn write_config(&self, body: &str) -> PathBuf {
        let path = self.path().join("wstow.toml");
        std::fs::write(&path, body).unwrap();
        path
    }
}

#[test]
fn file_values_apply_and_cli_wins() -> TestResult {
    init_tracing();

    let home = Home::new();
    let config = home.write_config(&format!(
        r#"
src = '{src}'
target = '{target}'
override = false
debounce = "250ms"
exclude = ["work", " "]
on_failure = "continue"
stow = '{stow}'
"#,
        src = home.dotfiles().display(),
        target = home.path().display(),
        stow = home.stow().display(),
    ));

    let cli = RawConfigFile {
        debounce: Some("1s".to_string()),
        verbose: Some(false),
        ..RawConfigFile::default()
    };
    let cfg = load_and_validate(Some(config.as_path()), cli)?;

    assert_eq!(cfg.src, home.dotfiles());
    assert_eq!(cfg.target, home.path());
    assert!(!cfg.adopt);
    assert!(!cfg.verbose);
    assert!(!cfg.dry_run);
    assert_eq!(cfg.debounce, Duration::from_secs(1));
    assert_eq!(cfg.timeout, Duration::from_secs(30));
    assert_eq!(cfg.exclude, BTreeSet::from(["work".to_string()]));
    assert_eq!(cfg.watch_exclude, vec![PathBuf::from(".git")]);
    assert_eq!(cfg.on_failure, FailurePolicy::Continue);
    assert_eq!(cfg.stow, home.stow());
    Ok(())
}

#[test]
fn command_line_flags_override_the_file() -> TestResult {
    init_tracing();

    let home = Home::new();
    let config = home.write_config(&format!(
        "src = '{}'\ntarget = '{}'\nstow = '{}'\ndry_run = false\non_failure = \"continue\"\n",
        home.dotfiles().display(),
        home.path().display(),
        home.stow().display(),
    ));

    let args = CliArgs::try_parse_from([
        "wstow",
        "--dry-run",
        "--override",
        "--on-failure",
        "exit",
        "--watch-exclude",
        ".git,scratch",
    ])?;
    let cfg = load_and_validate(Some(config.as_path()), args.to_raw_config())?;

    assert!(cfg.dry_run);
    assert!(cfg.adopt);
    assert_eq!(cfg.on_failure, FailurePolicy::Exit);
    assert_eq!(
        cfg.watch_exclude,
        vec![PathBuf::from(".git"), PathBuf::from("scratch")]
    );
    Ok(())
}

#[test]
fn adopt_is_accepted_as_an_alias() -> TestResult {
    let home = Home::new();
    let path = home.write_config("adopt = false\n");

    let raw = load_from_path(&path)?;
    assert_eq!(raw.adopt, Some(false));
    Ok(())
}

#[test]
fn unknown_keys_are_rejected() {
    let home = Home::new();
    let path = home.write_config("sources = \"~/dotfiles\"\n");

    match load_from_path(&path) {
        Err(WstowError::TomlError(_)) => {}
        other => panic!("expected TomlError, got {other:?}"),
    }
}

#[test]
fn invalid_failure_policy_is_rejected() {
    let home = Home::new();
    let path = home.write_config("on_failure = \"retry\"\n");

    assert!(matches!(load_from_path(&path), Err(WstowError::TomlError(_))));
}

#[test]
fn explicit_config_must_exist() {
    let home = Home::new();
    let missing = home.path().join("nope.toml");

    let result = load_and_validate(Some(missing.as_path()), RawConfigFile::default());
    assert!(matches!(result, Err(WstowError::ConfigError(_))));
}

#[test]
fn defaults_come_from_home() -> TestResult {
    let home = Home::new();
    let raw = RawConfigFile {
        stow: Some(home.stow()),
        ..RawConfigFile::default()
    };

    let cfg = resolve_config(raw, Some(home.path().as_path()))?;

    assert_eq!(cfg.src, home.dotfiles());
    assert_eq!(cfg.target, home.path());
    assert!(cfg.adopt);
    assert!(cfg.verbose);
    assert!(!cfg.dry_run);
    assert_eq!(cfg.timeout, Duration::from_secs(30));
    assert_eq!(cfg.debounce, Duration::from_millis(800));
    assert_eq!(
        cfg.exclude,
        BTreeSet::from([".DS_Store".to_string(), ".git".to_string()])
    );
    assert_eq!(cfg.on_failure, FailurePolicy::Exit);
    Ok(())
}

#[test]
fn tilde_paths_expand_against_home() -> TestResult {
    let home = Home::new();
    let raw = RawConfigFile {
        src: Some(PathBuf::from("~/Projects/dotfiles")),
        target: Some(PathBuf::from("~/alt")),
        stow: Some(home.stow()),
        ..RawConfigFile::default()
    };

    let cfg = resolve_config(raw, Some(home.path().as_path()))?;
    assert_eq!(cfg.src, home.dotfiles());
    assert_eq!(cfg.target, home.path().join("alt"));
    Ok(())
}

#[test]
fn missing_source_is_a_config_error() {
    let home = Home::new();
    let raw = RawConfigFile {
        src: Some(home.path().join("no-such-dir")),
        stow: Some(home.stow()),
        ..RawConfigFile::default()
    };

    let err = resolve_config(raw, Some(home.path().as_path())).unwrap_err();
    assert!(matches!(err, WstowError::ConfigError(_)), "{err:?}");
}

#[test]
fn source_must_be_a_directory() {
    let home = Home::new();
    let raw = RawConfigFile {
        src: Some(home.stow()),
        stow: Some(home.stow()),
        ..RawConfigFile::default()
    };

    let err = resolve_config(raw, Some(home.path().as_path())).unwrap_err();
    assert!(err.to_string().contains("not a directory"), "{err}");
}

#[test]
fn missing_stow_is_a_setup_error() {
    let home = Home::new();
    let raw = RawConfigFile {
        stow: Some(home.path().join("bin/stow")),
        ..RawConfigFile::default()
    };

    let err = resolve_config(raw, Some(home.path().as_path())).unwrap_err();
    assert!(matches!(err, WstowError::Setup(_)), "{err:?}");
}

#[test]
fn zero_timeout_is_rejected() {
    let home = Home::new();
    let raw = RawConfigFile {
        timeout: Some("0s".to_string()),
        stow: Some(home.stow()),
        ..RawConfigFile::default()
    };

    let err = resolve_config(raw, Some(home.path().as_path())).unwrap_err();
    assert!(err.to_string().contains("timeout"), "{err}");
}

#[test]
fn unparseable_duration_is_rejected() {
    let home = Home::new();
    let raw = RawConfigFile {
        debounce: Some("soon".to_string()),
        stow: Some(home.stow()),
        ..RawConfigFile::default()
    };

    let err = resolve_config(raw, Some(home.path().as_path())).unwrap_err();
    assert!(matches!(err, WstowError::ConfigError(_)), "{err:?}");
}

#[test]
fn oversized_debounce_is_rejected() {
    let home = Home::new();
    for value in ["18446744073709551615s", "9999999999999999h", "25h"] {
        let raw = RawConfigFile {
            debounce: Some(value.to_string()),
            stow: Some(home.stow()),
            ..RawConfigFile::default()
        };

        let err = resolve_config(raw, Some(home.path().as_path())).unwrap_err();
        assert!(matches!(err, WstowError::ConfigError(_)), "{value}: {err:?}");
    }
}
