// src/exec/args.rs

//! Argument vector for the stow invocation.

use crate::config::Config;

/// Build `-t <target> [-R|-nR][v] [--adopt] <package>...`.
///
/// Verbosity, dry-run and adopt are independent: each only contributes its
/// own letter or flag.
pub fn stow_args(cfg: &Config, packages: &[String]) -> Vec<String> {
    let mut args = vec!["-t".to_string(), cfg.target.to_string_lossy().into_owned()];

    let mut mode = String::from("-");
    if cfg.dry_run {
        mode.push('n');
    }
    mode.push('R');
    if cfg.verbose {
        mode.push('v');
    }
    args.push(mode);

    if cfg.adopt {
        args.push("--adopt".to_string());
    }

    args.extend(packages.iter().cloned());
    args
}
