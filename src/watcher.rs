//! File watcher for continuous manifest builds
//!
//! Implements the `watch` command with:
//! - Debouncing (configurable, 100ms by default)
//! - Rebuild on any change under the asset root
//! - Graceful Ctrl+C shutdown
//! - NDJSON output for CI

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use serde::Serialize;

use crate::application::{BuildOptions, BuildUseCase};
use crate::error::{FolioError, FolioResult};
use crate::infrastructure::ignore::IGNORE_FILE;
use crate::infrastructure::scanner::is_hidden;
use crate::infrastructure::FsAssetScanner;

/// Poll interval of the event loop
const POLL_MS: u64 = 50;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub scanner: FsAssetScanner,
    pub build: BuildOptions,
    pub debounce: Duration,
}

/// Watch event types, printed as text or NDJSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    Started {
        source: String,
    },
    FileChanged {
        path: String,
    },
    BuildStarted,
    BuildComplete {
        projects: usize,
        written: bool,
        fingerprint: String,
    },
    Error {
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"event":"error"}"#.to_string())
    }
}

/// Debounce state: collects changed paths until things go quiet
struct WatcherState {
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
    debounce: Duration,
}

impl WatcherState {
    fn new(debounce: Duration) -> Self {
        Self {
            pending_changes: HashSet::new(),
            last_change: None,
            debounce,
        }
    }

    fn add_change(&mut self, path: PathBuf, now: Instant) -> bool {
        self.last_change = Some(now);
        self.pending_changes.insert(path)
    }

    fn should_build(&self, now: Instant) -> bool {
        match self.last_change {
            Some(last) => {
                !self.pending_changes.is_empty() && now.duration_since(last) >= self.debounce
            }
            None => false,
        }
    }

    fn take_changes(&mut self) -> Vec<PathBuf> {
        self.last_change = None;
        self.pending_changes.drain().collect()
    }
}

/// Build once, then rebuild whenever the asset root changes, until
/// `running` is cleared.
pub fn watch(
    options: WatchOptions,
    running: Arc<AtomicBool>,
    event_callback: impl Fn(WatchEvent),
) -> FolioResult<()> {
    let root = options.scanner.root().to_path_buf();
    if !root.is_dir() {
        return Err(FolioError::AssetRootNotFound { path: root });
    }

    event_callback(WatchEvent::Started {
        source: root.display().to_string(),
    });

    let watched_root = absolute(&root);
    let output = absolute(&options.build.output);
    let use_case = BuildUseCase::new(options.scanner.clone());
    run_build(&use_case, &options.build, &event_callback);

    let (tx, rx) = channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                for path in event.paths {
                    let _ = tx.send(path);
                }
            }
        },
        Config::default(),
    )
    .map_err(|e| FolioError::Watch(e.to_string()))?;

    watcher
        .watch(&root, RecursiveMode::Recursive)
        .map_err(|e| FolioError::Watch(e.to_string()))?;
    tracing::info!(root = %root.display(), "watching for changes");

    let mut state = WatcherState::new(options.debounce);

    while running.load(Ordering::SeqCst) {
        if let Ok(path) = rx.recv_timeout(Duration::from_millis(POLL_MS)) {
            if is_relevant_change(&watched_root, &output, &path)
                && state.add_change(path.clone(), Instant::now())
            {
                event_callback(WatchEvent::FileChanged {
                    path: path.display().to_string(),
                });
            }
        }

        if state.should_build(Instant::now()) {
            let changes = state.take_changes();
            tracing::debug!(changes = changes.len(), "rebuilding");
            run_build(&use_case, &options.build, &event_callback);
        }
    }

    event_callback(WatchEvent::Shutdown);
    Ok(())
}

/// Build errors are reported and the watch continues.
fn run_build(
    use_case: &BuildUseCase<FsAssetScanner>,
    options: &BuildOptions,
    callback: &impl Fn(WatchEvent),
) {
    callback(WatchEvent::BuildStarted);
    match use_case.execute(options) {
        Ok(result) => callback(WatchEvent::BuildComplete {
            projects: result.manifest.projects.len(),
            written: result.written,
            fingerprint: result.manifest.fingerprint.to_string(),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "build failed");
            callback(WatchEvent::Error {
                message: e.to_string(),
            });
        }
    }
}

/// Whether a change can affect the manifest. The output file and hidden
/// entries (including atomic-write temp files) are skipped; the ignore file
/// is not.
fn is_relevant_change(root: &Path, output: &Path, path: &Path) -> bool {
    let path = absolute(path);
    if path == output {
        return false;
    }
    let Ok(rel) = path.strip_prefix(root) else {
        return true;
    };
    if rel == Path::new(IGNORE_FILE) {
        return true;
    }
    !rel
        .components()
        .any(|c| is_hidden(Path::new(c.as_os_str())))
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
