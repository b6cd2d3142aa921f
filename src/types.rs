use std::str::FromStr;
use serde::Deserialize;

/// What to do when a restow fails after the initial bootstrap run.
///
/// - `Exit`: stop watching and exit with a non-zero status (default).
/// - `Continue`: log the failure and keep watching; the next change will
///   trigger another attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    Exit,
    Continue,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exit" => Ok(FailurePolicy::Exit),
            "continue" => Ok(FailurePolicy::Continue),
            other => Err(format!(
                "invalid on_failure: {other} (expected \"exit\" or \"continue\")"
            )),
        }
    }
}

/// Lifecycle phase of the watcher process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial watch registration and bootstrap stow.
    Starting,
    /// Reacting to filesystem events.
    Watching,
    /// Cancellation observed; workers are winding down.
    ShuttingDown,
}
