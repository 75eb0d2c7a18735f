//! Check Result
//!
//! Outcome of a single checker invocation. Never persisted.

use crate::domain::ports::ProcessOutput;

/// Result of one check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Merged stdout/stderr, or the spawn error message
    pub output_text: String,
    /// Exit code 0 from a normally terminated process
    pub succeeded: bool,
    /// `None` for signals and spawn failures
    pub exit_code: Option<i32>,
}

impl RunResult {
    pub fn from_process(output: ProcessOutput) -> Self {
        Self {
            succeeded: output.status.success(),
            exit_code: output.status.code(),
            output_text: output.output,
        }
    }

    pub fn spawn_failure(message: impl Into<String>) -> Self {
        Self {
            output_text: message.into(),
            succeeded: false,
            exit_code: None,
        }
    }
}
