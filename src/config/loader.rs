// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{Config, RawConfigFile};
use crate::errors::{Result, WstowError};

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; defaults and validation are
/// applied by [`load_and_validate`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        WstowError::ConfigError(format!("reading config file {:?}: {e}", path))
    })?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Build the final configuration from command-line values and an optional
/// config file.
///
/// - An explicit `config_path` must exist.
/// - Otherwise [`default_config_path`] is used if it exists.
/// - Values in `cli` override values from the file.
pub fn load_and_validate(config_path: Option<&Path>, cli: RawConfigFile) -> Result<Config> {
    let file = match config_path {
        Some(path) => load_from_path(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => {
                debug!(path = ?path, "loading default config file");
                load_from_path(&path)?
            }
            _ => RawConfigFile::default(),
        },
    };

    Config::try_from(file.overlay(cli))
}

/// `<config dir>/wstow/wstow.toml`, e.g. `~/.config/wstow/wstow.toml` on
/// Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wstow").join("wstow.toml"))
}
