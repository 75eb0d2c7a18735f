//! tcwatch - file-watch-triggered type checking
//!
//! Watches a project tree, reduces each batch of changed paths to a minimal
//! existing set, runs the type checker (`srb tc` by default) over that set or
//! over the whole project, and reports the outcome to the terminal, to the
//! caller and optionally as a desktop notification.
//!
//! ## Layers
//!
//! - `domain` - value objects, ports and the path reducer
//! - `application` - check runner, plugin hooks and the watch loop
//! - `infrastructure` - process, file system and desktop adapters
//! - `config` - TOML configuration with env overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CheckRunner, Plugin, RunResult, TriggerOutcome, TypecheckPlugin};
pub use config::{Config, RunOptions, WatchConfig};
pub use domain::services::PathReducer;
pub use domain::value_objects::{CommandVector, ExtraArgs, NotificationMode, PathSet};
pub use error::{TcError, TcResult};
