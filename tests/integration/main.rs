// tests/integration/main.rs

#[path = "../common/mod.rs"]
mod common;

mod config_loading;
mod fs_abstraction;
