use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Watches the config file and sends a unit notification on every change.
///
/// The parent directory is watched rather than the file itself so that
/// editors which save by rename-over still trigger a reload.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let (_watcher, mut rx) = sbar_config::ConfigWatcher::spawn("/home/user/.config/sbar/sbar.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed, reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = event_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        warn!("Not watching '{}': {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = event_rx.recv().await {
        match event {
            Ok(e) => {
                if !matches!(e.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    continue;
                }
                if !e.paths.iter().any(|p| p.file_name() == path.file_name()) {
                    continue;
                }
                debug!("Config change detected: {:?}", e.kind);
                // A full channel already has a reload pending.
                if let Err(mpsc::error::TrySendError::Closed(())) = tx.try_send(()) {
                    break;
                }
            }
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(500);
    const PATIENCE: Duration = Duration::from_secs(10);

    #[tokio::test(flavor = "multi_thread")]
    async fn notifies_only_for_the_watched_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sbar.toml");
        std::fs::write(&path, "").unwrap();

        let (watcher, mut rx) = ConfigWatcher::spawn(&path);
        assert_eq!(watcher.path(), path.as_path());
        // Give the watch loop time to register with the OS.
        tokio::time::sleep(QUIET).await;

        std::fs::write(dir.path().join("other.toml"), "x = 1").unwrap();
        assert!(tokio::time::timeout(QUIET, rx.recv()).await.is_err());

        std::fs::write(&path, "[global]\nwidth = 40\n").unwrap();
        let fired = tokio::time::timeout(PATIENCE, rx.recv()).await;
        assert_eq!(fired.ok().flatten(), Some(()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn bursts_of_writes_coalesce() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sbar.toml");
        std::fs::write(&path, "").unwrap();

        let (_watcher, mut rx) = ConfigWatcher::spawn(&path);
        tokio::time::sleep(QUIET).await;

        for i in 0..20 {
            std::fs::write(&path, format!("# edit {i}\n")).unwrap();
        }
        let first = tokio::time::timeout(PATIENCE, rx.recv()).await;
        assert_eq!(first.ok().flatten(), Some(()));

        // Let the remaining events drain; at most one more reload is queued.
        tokio::time::sleep(QUIET).await;
        let mut pending = 0;
        while rx.try_recv().is_ok() {
            pending += 1;
        }
        assert!(pending <= 1);
    }
}
