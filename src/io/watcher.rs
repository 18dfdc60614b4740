use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the file watcher to the refresh loop.
#[derive(Debug)]
pub enum FileEvent {
    /// The watched snapshot file was written or replaced.
    Changed(PathBuf),
}

/// Watches a single snapshot file for refreshes.
///
/// The parent directory is watched rather than the file itself, since atomic
/// writers replace the file and a direct watch would go stale.
pub struct ListWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl ListWatcher {
    pub fn start(list_path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let target = list_path.to_path_buf();
        let target_name = target.file_name().map(|n| n.to_os_string());
        let dir = match list_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };

                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) => {}
                    _ => return,
                }

                let hit = event
                    .paths
                    .iter()
                    .any(|p| p.file_name().map(|n| n.to_os_string()) == target_name);
                if hit {
                    let _ = tx.send(FileEvent::Changed(target.clone()));
                }
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        Ok(ListWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Block until the next change, or `timeout` elapses. Bursts of events
    /// (editors often write several times) collapse into one.
    pub fn wait(&self, timeout: Duration) -> Option<FileEvent> {
        let first = self.rx.recv_timeout(timeout).ok()?;
        while self.rx.try_recv().is_ok() {}
        Some(first)
    }
}
