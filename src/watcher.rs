//! File watcher for continuous rebuilds
//!
//! Implements the `watch` command with:
//! - Debouncing (100ms)
//! - Full rebuild on any content, config or static file change
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

use crate::build::{build, Source, WriteOptions};
use crate::config::{CONFIG_FILE, CONTENT_FILE};
use crate::error::FolioResult;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory holding `site.toml`
    pub source: PathBuf,
    /// Rewrite unchanged outputs on every rebuild
    pub force: bool,
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        source: String,
    },
    FileChanged {
        path: String,
    },
    BuildStarted,
    BuildComplete {
        written: usize,
        skipped: usize,
        errors: usize,
    },
    Error {
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Watcher state for debouncing
struct WatcherState {
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
}

impl WatcherState {
    fn new() -> Self {
        Self {
            pending_changes: HashSet::new(),
            last_change: None,
        }
    }

    fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    fn should_build(&self) -> bool {
        match self.last_change {
            Some(last) => {
                !self.pending_changes.is_empty() && last.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
            }
            None => false,
        }
    }

    fn take_changes(&mut self) -> Vec<PathBuf> {
        let changes: Vec<_> = self.pending_changes.drain().collect();
        self.last_change = None;
        changes
    }
}

/// Directories a rebuild depends on, re-read from `folio.toml` each time
#[derive(Debug, Clone)]
struct Layout {
    root: PathBuf,
    static_dir: PathBuf,
    output_dir: PathBuf,
}

impl Layout {
    fn resolve(root: &Path) -> Self {
        match Source::load(root) {
            Ok(source) => Self {
                root: root.to_path_buf(),
                static_dir: source.static_dir(),
                output_dir: source.output_dir(),
            },
            Err(_) => Self {
                root: root.to_path_buf(),
                static_dir: root.join("static"),
                output_dir: root.join("dist"),
            },
        }
    }

    /// Content, config and static files trigger a rebuild. The output
    /// directory lives inside the source directory and is ignored.
    fn is_relevant(&self, path: &Path) -> bool {
        if path.starts_with(&self.output_dir) {
            return false;
        }
        if path.starts_with(&self.static_dir) {
            return true;
        }
        path.parent() == Some(self.root.as_path())
            && path
                .file_name()
                .map(|name| name == CONTENT_FILE || name == CONFIG_FILE)
                .unwrap_or(false)
    }
}

/// Start watching for file changes
pub fn watch(options: WatchOptions, running: Arc<AtomicBool>, event_callback: impl Fn(WatchEvent)) -> FolioResult<()> {
    let root = options.source.canonicalize()?;
    event_callback(WatchEvent::WatchStarted {
        source: root.display().to_string(),
    });

    // Initial build
    do_build(&root, &options, &event_callback);
    let mut layout = Layout::resolve(&root);

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
    )?;
    watcher.watch(&root, RecursiveMode::Recursive)?;

    let mut state = WatcherState::new();

    while running.load(Ordering::SeqCst) {
        if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
            if layout.is_relevant(&path) {
                event_callback(WatchEvent::FileChanged {
                    path: path
                        .strip_prefix(&root)
                        .unwrap_or(&path)
                        .display()
                        .to_string(),
                });
                state.add_change(path);
            }
        }

        if state.should_build() {
            let changes = state.take_changes();
            tracing::debug!(count = changes.len(), "rebuilding after changes");
            do_build(&root, &options, &event_callback);
            layout = Layout::resolve(&root);
        }
    }

    event_callback(WatchEvent::Shutdown);
    Ok(())
}

/// Build once and report. Failures are reported as events so the watcher
/// keeps running until the content is fixed.
fn do_build(root: &Path, options: &WatchOptions, callback: &impl Fn(WatchEvent)) {
    callback(WatchEvent::BuildStarted);

    let result = Source::load(root).and_then(|source| {
        build(
            &source,
            WriteOptions {
                force: options.force,
                dry_run: false,
            },
        )
    });

    match result {
        Ok(result) => callback(WatchEvent::BuildComplete {
            written: result.written.len(),
            skipped: result.skipped.len(),
            errors: result.errors.len(),
        }),
        Err(e) => callback(WatchEvent::Error {
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_event_json() {
        let event = WatchEvent::BuildComplete {
            written: 3,
            skipped: 1,
            errors: 0,
        };
        assert_eq!(
            event.to_json(),
            r#"{"event":"build_complete","written":3,"skipped":1,"errors":0}"#
        );
        assert_eq!(WatchEvent::Shutdown.to_json(), r#"{"event":"shutdown"}"#);
        assert_eq!(WatchEvent::BuildStarted.to_json(), r#"{"event":"build_started"}"#);
    }

    #[test]
    fn test_debounce() {
        let mut state = WatcherState::new();
        assert!(!state.should_build());

        state.add_change(PathBuf::from("site.toml"));
        state.add_change(PathBuf::from("site.toml"));
        assert!(!state.should_build());

        std::thread::sleep(Duration::from_millis(DEBOUNCE_MS + 20));
        assert!(state.should_build());
        assert_eq!(state.take_changes().len(), 1);
        assert!(!state.should_build());
    }

    #[test]
    fn test_relevant_paths() {
        let layout = Layout {
            root: PathBuf::from("/p"),
            static_dir: PathBuf::from("/p/static"),
            output_dir: PathBuf::from("/p/dist"),
        };
        assert!(layout.is_relevant(Path::new("/p/site.toml")));
        assert!(layout.is_relevant(Path::new("/p/folio.toml")));
        assert!(layout.is_relevant(Path::new("/p/static/img/a.png")));
        assert!(!layout.is_relevant(Path::new("/p/dist/index.html")));
        assert!(!layout.is_relevant(Path::new("/p/notes.md")));
        assert!(!layout.is_relevant(Path::new("/p/nested/site.toml")));
    }

    #[test]
    fn test_stopped_watcher_builds_once() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONTENT_FILE), crate::models::STARTER_SITE).unwrap();

        let events = RefCell::new(Vec::new());
        let running = Arc::new(AtomicBool::new(false));
        watch(
            WatchOptions {
                source: dir.path().to_path_buf(),
                force: false,
            },
            running,
            |e| events.borrow_mut().push(e),
        )
        .unwrap();

        let events = events.into_inner();
        assert!(matches!(events[0], WatchEvent::WatchStarted { .. }));
        assert_eq!(events[1], WatchEvent::BuildStarted);
        assert!(matches!(events[2], WatchEvent::BuildComplete { errors: 0, .. }));
        assert_eq!(events.last(), Some(&WatchEvent::Shutdown));
        assert!(dir.path().join("dist/index.html").exists());
    }

    #[test]
    fn test_broken_content_reports_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONTENT_FILE), "roles = [").unwrap();

        let events = RefCell::new(Vec::new());
        let running = Arc::new(AtomicBool::new(false));
        watch(
            WatchOptions {
                source: dir.path().to_path_buf(),
                force: false,
            },
            running,
            |e| events.borrow_mut().push(e),
        )
        .unwrap();

        assert!(events.borrow().iter().any(|e| matches!(e, WatchEvent::Error { .. })));
    }
}
