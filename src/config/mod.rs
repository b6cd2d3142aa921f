// src/config/mod.rs

//! Configuration loading and validation for wstow.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the resolved `Config` (`model.rs`).
//! - Load a config file from disk and layer CLI values over it (`loader.rs`).
//! - Apply defaults and validate paths, durations and the stow binary
//!   (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{Config, RawConfigFile};
pub use validate::{parse_duration, resolve_config};
