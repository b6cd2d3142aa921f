#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use notify::Event;
use notify::event::{CreateKind, EventKind};
use tokio::sync::mpsc;
use wstow::fs::FileSystem;
use wstow::fs::mock::MockFileSystem;
use wstow::watch::{WatchSet, WatchSignal};
use wstow_test_utils::recording::RecordingPrimitive;

pub use wstow_test_utils::builders::ConfigBuilder;
pub use wstow_test_utils::fake_runner::FakeRunner;
pub use wstow_test_utils::{init_tracing, with_timeout};

/// A small dotfiles tree rooted at `/src`.
pub fn dotfiles_tree() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_dir("/src/zsh");
    fs.add_file("/src/zsh/.zshrc");
    fs.add_dir("/src/nvim/.config/nvim");
    fs.add_dir("/src/.git/objects");
    fs
}

pub fn watch_set_for(
    fs: &MockFileSystem,
    primitive: RecordingPrimitive,
) -> Arc<WatchSet<RecordingPrimitive>> {
    let fs: Arc<dyn FileSystem> = Arc::new(fs.clone());
    Arc::new(WatchSet::new("/src", vec![PathBuf::from(".git")], primitive, fs))
}

pub fn created_dir(path: impl AsRef<Path>) -> WatchSignal {
    WatchSignal::Event(
        Event::new(EventKind::Create(CreateKind::Folder)).add_path(path.as_ref().to_path_buf()),
    )
}

pub fn event_channel() -> (
    mpsc::UnboundedSender<WatchSignal>,
    mpsc::UnboundedReceiver<WatchSignal>,
) {
    mpsc::unbounded_channel()
}
