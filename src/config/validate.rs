// src/config/validate.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::model::{
    Config, RawConfigFile, DEFAULT_DEBOUNCE, DEFAULT_EXCLUDE, DEFAULT_STOW, DEFAULT_TIMEOUT,
    DEFAULT_WATCH_EXCLUDE,
};
use crate::errors::{Result, WstowError};

impl TryFrom<RawConfigFile> for Config {
    type Error = crate::errors::WstowError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        resolve_config(raw, dirs::home_dir().as_deref())
    }
}

/// Apply defaults to `raw` and validate the result.
///
/// `home` is used for the default source (`~/Projects/dotfiles`), the
/// default target (`~`) and `~` expansion in configured paths.
pub fn resolve_config(raw: RawConfigFile, home: Option<&Path>) -> Result<Config> {
    let src = match raw.src {
        Some(p) => expand_home(&p, home)?,
        None => require_home(home)?.join("Projects").join("dotfiles"),
    };
    let src = validate_src(&src)?;

    let target = match raw.target {
        Some(p) => expand_home(&p, home)?,
        None => require_home(home)?.to_path_buf(),
    };

    let timeout = parse_nonzero("timeout", raw.timeout.as_deref().unwrap_or(DEFAULT_TIMEOUT))?;
    let debounce =
        parse_nonzero("debounce", raw.debounce.as_deref().unwrap_or(DEFAULT_DEBOUNCE))?;

    let exclude: BTreeSet<String> = match raw.exclude {
        Some(list) => clean_names(list).collect(),
        None => DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
    };
    let watch_exclude: Vec<PathBuf> = match raw.watch_exclude {
        Some(list) => clean_names(list).map(PathBuf::from).collect(),
        None => DEFAULT_WATCH_EXCLUDE.iter().map(PathBuf::from).collect(),
    };

    let stow = resolve_stow(raw.stow.as_deref().unwrap_or(Path::new(DEFAULT_STOW)))?;

    Ok(Config {
        src,
        target,
        adopt: raw.adopt.unwrap_or(true),
        verbose: raw.verbose.unwrap_or(true),
        dry_run: raw.dry_run.unwrap_or(false),
        timeout,
        debounce,
        exclude,
        watch_exclude,
        on_failure: raw.on_failure.unwrap_or_default(),
        stow,
    })
}

fn require_home(home: Option<&Path>) -> Result<&Path> {
    home.ok_or_else(|| WstowError::ConfigError("could not determine home directory".to_string()))
}

fn expand_home(path: &Path, home: Option<&Path>) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(require_home(home)?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

fn validate_src(src: &Path) -> Result<PathBuf> {
    let canonical = src.canonicalize().map_err(|e| {
        WstowError::ConfigError(format!("source directory {:?} is not accessible: {e}", src))
    })?;
    if !canonical.is_dir() {
        return Err(WstowError::ConfigError(format!(
            "source {:?} is not a directory",
            canonical
        )));
    }
    Ok(canonical)
}

fn clean_names(list: Vec<String>) -> impl Iterator<Item = String> {
    list.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Locate the stow executable. Bare names are looked up on `PATH`; anything
/// containing a path separator must exist as given.
fn resolve_stow(program: &Path) -> Result<PathBuf> {
    if program.components().count() > 1 {
        if program.is_file() {
            return Ok(program.to_path_buf());
        }
        return Err(WstowError::Setup(format!(
            "stow executable {:?} does not exist",
            program
        )));
    }
    which::which(program).map_err(|e| {
        WstowError::Setup(format!(
            "GNU Stow is not installed or not found in PATH: {e}"
        ))
    })
}

/// Upper bound for `debounce` and `timeout`.
pub const MAX_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

fn parse_nonzero(field: &str, s: &str) -> Result<Duration> {
    let d = parse_duration(s)
        .map_err(|e| WstowError::ConfigError(format!("invalid {field} '{s}': {e}")))?;
    if d.is_zero() {
        return Err(WstowError::ConfigError(format!("{field} must be greater than zero")));
    }
    if d > MAX_DURATION {
        return Err(WstowError::ConfigError(format!(
            "{field} '{s}' exceeds the maximum of {:?}",
            MAX_DURATION
        )));
    }
    Ok(d)
}

/// Parse durations such as `"800ms"`, `"30s"`, `"2m"` or `"1h"`.
pub fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let idx = s
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| "duration missing unit suffix".to_string())?;
    let (num_part, unit_part) = s.split_at(idx);
    let value: u64 = num_part
        .parse()
        .map_err(|e| format!("invalid duration number '{num_part}': {e}"))?;

    let secs_per_unit = match unit_part.trim().to_lowercase().as_str() {
        "ms" => return Ok(Duration::from_millis(value)),
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        other => {
            return Err(format!(
                "unsupported duration unit '{other}'; expected ms, s, m, or h"
            ));
        }
    };
    value
        .checked_mul(secs_per_unit)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("duration '{s}' is too large"))
}
