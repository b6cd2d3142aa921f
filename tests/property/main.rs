// tests/property/main.rs

#[path = "../common/mod.rs"]
mod common;

mod packages;
mod watch_set;
