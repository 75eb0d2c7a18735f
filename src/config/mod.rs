//! Configuration module for tcwatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TCWATCH_*)
//! 3. Project config (.tcwatch.toml)
//! 4. User config ($XDG_CONFIG_HOME/tcwatch/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod loader;
mod types;

pub use crate::domain::value_objects::{ConfigWarning, ExtraArgs, NotificationMode};
pub use loader::PROJECT_CONFIG_FILE;
pub use types::{Config, RunOptions, WatchConfig, DEFAULT_COLORIZE, DEFAULT_COMMAND};
