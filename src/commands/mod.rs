pub mod check;
mod common;
pub mod config;
pub mod watch;
