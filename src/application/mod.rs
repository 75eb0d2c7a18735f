//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckRunner` - One checker run: argv, process, notification
//! - `TypecheckPlugin` - Host hooks wiring path reduction to check runs
//! - `WatchUseCase` - Drives a plugin from file system events

pub mod check;
pub mod plugin;
pub mod watch;

pub use check::{build_command, CheckRunner, RunResult, NOTIFICATION_TITLE};
pub use plugin::{Plugin, TriggerOutcome, TypecheckPlugin};
pub use watch::{WatchOptions, WatchSignal, WatchUseCase, WatcherState};
