//! Check Module
//!
//! One checker invocation: argv construction, process execution, outcome
//! classification and the notification policy.
//!
//! ## Structure
//!
//! - `command` - argv construction (`build_command`)
//! - `result` - outcome of a run (`RunResult`)
//! - `runner` - execution and notification (`CheckRunner`)
//!
//! ## Usage
//!
//! ```ignore
//! use tcwatch::application::check::CheckRunner;
//!
//! let runner = CheckRunner::new(options, LocalProcessRunner::new(), notifier, opener);
//! let result = runner.execute(&paths, false)?;
//! ```

mod command;
mod result;
mod runner;

pub use command::{
    build_command, COLOR_FLAG, DIR_FLAG, FULL_PROJECT_DIR, INCREMENTAL_DIR, NO_CONFIG_FLAG,
    SUBCOMMAND,
};
pub use result::RunResult;
pub use runner::{CheckRunner, NOTIFICATION_TITLE};
