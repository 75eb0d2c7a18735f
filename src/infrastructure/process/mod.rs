//! Process Execution
//!
//! Implements the ProcessRunner port with direct argv execution.

mod local;

pub use local::LocalProcessRunner;
