//! Watch Use Case implementation

use std::collections::HashMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::application::plugin::{Plugin, TriggerOutcome};
use crate::domain::ports::RunEvent;
use crate::error::TcResult;

use super::event::{WatchOptions, WatcherState, STARTUP_COOLDOWN_MS};
use super::filter::PathFilter;

/// Poll interval of the watch loop
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Input to the watch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchSignal {
    /// A file system entry changed
    Changed(PathBuf),
    /// The user asked for a full-project run
    RunAll,
}

/// Watch Use Case
///
/// Drives a `Plugin` from file system events.
/// This is the main entry point for the `tcwatch watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
}

impl WatchUseCase {
    /// Create a new WatchUseCase
    pub fn new(options: WatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Absolute watched roots
    pub fn roots(&self) -> Vec<PathBuf> {
        self.options.absolute_roots()
    }

    /// Start watching (blocking)
    ///
    /// This method blocks until the running flag is set to false.
    /// Use the callback to receive events.
    pub fn start<P, F>(&self, plugin: &P, running: Arc<AtomicBool>, on_event: F) -> TcResult<()>
    where
        P: Plugin,
        F: Fn(RunEvent),
    {
        let roots = self.roots();

        on_event(RunEvent::WatchStarted {
            watching: roots.iter().map(|r| self.options.display_path(r)).collect(),
        });

        let (tx, rx) = channel();

        let watcher_tx = tx.clone();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    for path in event.paths {
                        let _ = watcher_tx.send(WatchSignal::Changed(path));
                    }
                }
                Err(e) => debug!("watcher error: {}", e),
            },
            Config::default(),
        )?;

        for root in &roots {
            watcher.watch(root, RecursiveMode::Recursive)?;
        }

        if self.options.interactive {
            spawn_stdin_reader(tx);
        } else {
            drop(tx);
        }

        // Startup cooldown: notify sometimes reports existing files when a
        // watch is first registered
        let cooldown_end = Instant::now() + Duration::from_millis(STARTUP_COOLDOWN_MS);
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(POLL_INTERVAL);
        }

        self.run(plugin, &rx, &running, &on_event);
        drop(watcher);
        Ok(())
    }

    /// Event loop over an existing signal channel.
    ///
    /// Runs `on_start`, then serves signals until `running` is cleared or
    /// every sender is gone. Pending changes are flushed before returning.
    pub(crate) fn run<P, F>(
        &self,
        plugin: &P,
        rx: &Receiver<WatchSignal>,
        running: &AtomicBool,
        on_event: &F,
    ) where
        P: Plugin,
        F: Fn(RunEvent),
    {
        let filter = PathFilter::new(&self.options);
        let mut state = WatcherState::with_debounce(self.options.debounce);
        let mut content_hashes: HashMap<PathBuf, String> = HashMap::new();

        report(plugin.on_start(), on_event);

        while running.load(Ordering::SeqCst) {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(WatchSignal::Changed(path)) => {
                    if filter.matches(&path) && content_changed(&mut content_hashes, &path) {
                        state.add_change(path);
                    }
                }
                Ok(WatchSignal::RunAll) => {
                    // a full run covers whatever was pending
                    state.take_changes();
                    report(plugin.on_run_all(), on_event);
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    if state.has_pending() {
                        self.flush(plugin, &mut state, on_event);
                    }
                    break;
                }
            }

            if state.should_sync() {
                self.flush(plugin, &mut state, on_event);
            }
        }

        report(plugin.on_quit(), on_event);
        on_event(RunEvent::Shutdown);
    }

    fn flush<P, F>(&self, plugin: &P, state: &mut WatcherState, on_event: &F)
    where
        P: Plugin,
        F: Fn(RunEvent),
    {
        let changes = state.take_changes();
        on_event(RunEvent::PathsChanged {
            paths: changes
                .iter()
                .map(|p| self.options.display_path(p))
                .collect(),
        });
        report(plugin.on_paths_changed(&changes), on_event);
    }
}

/// Failures never stop the loop; the next change retriggers.
fn report<F: Fn(RunEvent)>(result: TcResult<TriggerOutcome>, on_event: &F) {
    match result {
        Ok(outcome) => debug!(?outcome, "trigger finished"),
        Err(e) => {
            warn!("{}", e);
            on_event(RunEvent::Error {
                message: e.to_string(),
            });
        }
    }
}

/// Whether `path` differs from the last content seen for it.
///
/// Unreadable paths (deleted, directories) always count as changed.
fn content_changed(hashes: &mut HashMap<PathBuf, String>, path: &Path) -> bool {
    let Ok(content) = std::fs::read(path) else {
        hashes.remove(path);
        return true;
    };

    let new_hash = compute_content_hash(&content);
    if hashes.get(path) == Some(&new_hash) {
        debug!(path = %path.display(), "content unchanged, skipping");
        return false;
    }
    hashes.insert(path.to_path_buf(), new_hash);
    true
}

/// SHA-256 of file content, hex encoded
pub fn compute_content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Each line on stdin (Enter) requests a full run.
fn spawn_stdin_reader(tx: Sender<WatchSignal>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            if line.is_err() || tx.send(WatchSignal::RunAll).is_err() {
                break;
            }
        }
    });
}
