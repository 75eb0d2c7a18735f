//! Watch options and debounce state

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::WatchConfig;
use crate::domain::services::absolutize;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Events arriving this long after the watcher is registered are discarded
pub const STARTUP_COOLDOWN_MS: u64 = 500;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Project root; relative roots and displayed paths are resolved against it
    pub project_root: PathBuf,
    /// Directories watched recursively
    pub roots: Vec<PathBuf>,
    /// Extensions (without the dot) that count as changes; empty accepts all
    pub extensions: Vec<String>,
    /// Directory names never reported
    pub ignore: Vec<String>,
    /// Honour `.gitignore` at the project root
    pub respect_gitignore: bool,
    /// Quiet period before a batch is flushed
    pub debounce: Duration,
    /// Read Enter presses from stdin as run-all requests
    pub interactive: bool,
}

impl WatchOptions {
    /// Create new watch options with minimal required fields
    pub fn new(project_root: PathBuf) -> Self {
        Self::from_config(project_root, &WatchConfig::default())
    }

    /// Options from the `[watch]` configuration section
    pub fn from_config(project_root: PathBuf, config: &WatchConfig) -> Self {
        Self {
            project_root,
            roots: config.paths.clone(),
            extensions: config.extensions.clone(),
            ignore: config.ignore.clone(),
            respect_gitignore: config.respect_gitignore,
            debounce: Duration::from_millis(config.debounce_ms),
            interactive: false,
        }
    }

    /// Replace the watched roots (ignored when empty)
    pub fn with_roots(mut self, roots: Vec<PathBuf>) -> Self {
        if !roots.is_empty() {
            self.roots = roots;
        }
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Watched roots resolved against the project root
    pub fn absolute_roots(&self) -> Vec<PathBuf> {
        let home = dirs::home_dir();
        self.roots
            .iter()
            .map(|root| absolutize(root, &self.project_root, home.as_deref()))
            .collect()
    }

    /// Path as shown to the user: relative to the project root when under it
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.project_root) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
            Ok(_) => ".".to_string(),
            Err(_) => path.display().to_string(),
        }
    }
}

/// Watcher state for debouncing
///
/// Changes are kept in arrival order, each path once.
#[derive(Debug)]
pub struct WatcherState {
    pending_changes: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
    last_change: Option<Instant>,
    debounce: Duration,
}

impl Default for WatcherState {
    fn default() -> Self {
        Self::new()
    }
}

impl WatcherState {
    /// Create a new watcher state with the default debounce
    pub fn new() -> Self {
        Self::with_debounce(Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            pending_changes: Vec::new(),
            seen: HashSet::new(),
            last_change: None,
            debounce,
        }
    }

    /// Add a file change to pending changes
    pub fn add_change(&mut self, path: PathBuf) {
        if self.seen.insert(path.clone()) {
            self.pending_changes.push(path);
        }
        self.last_change = Some(Instant::now());
    }

    /// Check if debounce period has passed and we have pending changes
    pub fn should_sync(&self) -> bool {
        match self.last_change {
            Some(last) => !self.pending_changes.is_empty() && last.elapsed() >= self.debounce,
            None => false,
        }
    }

    /// Take all pending changes, resetting state
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        self.seen.clear();
        self.last_change = None;
        std::mem::take(&mut self.pending_changes)
    }

    /// Check if there are pending changes
    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}
