//! Watch Use Case
//!
//! Continuous type checking driven by file system events.
//! It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default)
//! - Filtering by extension, ignored directories and `.gitignore`
//! - Skipping saves that did not change file content
//! - Plugin hooks (`on_start`, `on_paths_changed`, `on_run_all`, `on_quit`)
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::from_config(project_root, &config.watch);
//! let use_case = WatchUseCase::new(options);
//! use_case.start(&plugin, running, |event| { ... })?;
//! ```

mod event;
mod filter;
mod use_case;


pub use event::{WatchOptions, WatcherState, DEBOUNCE_MS, STARTUP_COOLDOWN_MS};
pub use filter::PathFilter;
pub use use_case::{compute_content_hash, WatchSignal, WatchUseCase};
