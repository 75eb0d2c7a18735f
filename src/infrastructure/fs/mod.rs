//! File System Implementations
//!
//! Concrete implementations of the PathProbe port plus directory helpers.

mod home;
mod local;

pub use home::{user_config_dir, TCWATCH_CONFIG_HOME_VAR};
pub use local::LocalProbe;
