// src/watch/event.rs

//! Classification of raw `notify` events.

use std::path::Path;

use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind};

/// Item delivered by the watcher callback to the event loop.
#[derive(Debug)]
pub enum WatchSignal {
    Event(Event),
    Error(notify::Error),
}

/// Coarse operation kind of a filesystem event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Create,
    Remove,
    Rename,
    Write,
    Chmod,
    Other,
}

impl ChangeKind {
    pub fn of(kind: &EventKind) -> Self {
        match kind {
            EventKind::Create(_) => ChangeKind::Create,
            EventKind::Remove(_) => ChangeKind::Remove,
            EventKind::Modify(ModifyKind::Name(_)) => ChangeKind::Rename,
            EventKind::Modify(ModifyKind::Metadata(_)) => ChangeKind::Chmod,
            EventKind::Modify(_) => ChangeKind::Write,
            EventKind::Access(_) | EventKind::Any | EventKind::Other => ChangeKind::Other,
        }
    }

    /// Only changes to the shape of the tree trigger a restow.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            ChangeKind::Create | ChangeKind::Remove | ChangeKind::Rename
        )
    }
}

/// Paths of `event` that may be new directories needing registration.
///
/// Creations contribute all their paths. Renames contribute their
/// destination (the last path) unless the event only describes the source
/// side of the move.
pub fn registration_candidates(event: &Event) -> Vec<&Path> {
    match event.kind {
        EventKind::Create(_) => event.paths.iter().map(|p| p.as_path()).collect(),
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => Vec::new(),
        EventKind::Modify(ModifyKind::Name(_)) => {
            event.paths.last().map(|p| p.as_path()).into_iter().collect()
        }
        _ => Vec::new(),
    }
}
