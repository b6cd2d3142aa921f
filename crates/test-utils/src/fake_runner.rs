use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;
use wstow::errors::RunError;
use wstow::exec::{RunFuture, RunOutcome, SyncRunner};

#[derive(Debug, Default)]
struct State {
    started: Mutex<Vec<Instant>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    failing: Mutex<HashSet<usize>>,
    panicking: Mutex<HashSet<usize>>,
    delay: Mutex<Duration>,
}

/// A fake runner that:
/// - records when each run started
/// - tracks how many runs overlap
/// - optionally sleeps to simulate a slow stow
/// - fails the runs whose (zero-based) index was marked with `fail_run`
///   and panics in those marked with `panic_run`.
///
/// Clones share state, so a test can keep one while the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    state: Arc<State>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        *self.state.delay.lock().unwrap() = delay;
        self
    }

    pub fn fail_run(self, index: usize) -> Self {
        self.state.failing.lock().unwrap().insert(index);
        self
    }

    pub fn panic_run(self, index: usize) -> Self {
        self.state.panicking.lock().unwrap().insert(index);
        self
    }

    pub fn run_count(&self) -> usize {
        self.state.started.lock().unwrap().len()
    }

    pub fn run_times(&self) -> Vec<Instant> {
        self.state.started.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }
}

impl SyncRunner for FakeRunner {
    fn run(&mut self) -> RunFuture<'_> {
        let state = Arc::clone(&self.state);

        Box::pin(async move {
            let index = {
                let mut started = state.started.lock().unwrap();
                started.push(Instant::now());
                started.len() - 1
            };
            let now = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            state.max_in_flight.fetch_max(now, Ordering::SeqCst);

            let delay = *state.delay.lock().unwrap();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            state.in_flight.fetch_sub(1, Ordering::SeqCst);

            if state.panicking.lock().unwrap().contains(&index) {
                panic!("fake runner: scripted panic in run {index}");
            }

            if state.failing.lock().unwrap().contains(&index) {
                Err(RunError::ExitStatus(1))
            } else {
                Ok(RunOutcome::Stowed)
            }
        })
    }
}
