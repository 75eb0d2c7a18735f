//! Domain Value Objects
//!
//! Immutable value types passed between the reducer, the runner and the host.

mod command_vector;
mod config_warning;
mod extra_args;
mod notification_mode;
mod path_set;

pub use command_vector::CommandVector;
pub use config_warning::ConfigWarning;
pub use extra_args::ExtraArgs;
pub use notification_mode::NotificationMode;
pub use path_set::PathSet;
