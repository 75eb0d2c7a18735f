//! ProcessRunner port - executes a command vector and captures its output

use crate::domain::value_objects::CommandVector;

/// How a child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitState {
    /// Normal termination with an exit code
    Exited(i32),
    /// Killed by a signal or otherwise terminated without a code
    Abnormal,
}

impl ExitState {
    pub fn success(self) -> bool {
        matches!(self, ExitState::Exited(0))
    }

    pub fn code(self) -> Option<i32> {
        match self {
            ExitState::Exited(code) => Some(code),
            ExitState::Abnormal => None,
        }
    }
}

impl From<std::process::ExitStatus> for ExitState {
    fn from(status: std::process::ExitStatus) -> Self {
        match status.code() {
            Some(code) => ExitState::Exited(code),
            None => ExitState::Abnormal,
        }
    }
}

/// Captured result of one child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// stdout and stderr merged in arrival order
    pub output: String,
    pub status: ExitState,
}

/// Runs a command to completion, blocking the caller
///
/// The error case covers failures to start the process only; a process that
/// starts and fails is an `Ok` with a non-success status.
pub trait ProcessRunner {
    fn run(&self, command: &CommandVector) -> std::io::Result<ProcessOutput>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for Box<T> {
    fn run(&self, command: &CommandVector) -> std::io::Result<ProcessOutput> {
        (**self).run(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_zero_exit_is_success() {
        assert!(ExitState::Exited(0).success());
        assert!(!ExitState::Exited(1).success());
        assert!(!ExitState::Abnormal.success());
    }

    #[test]
    fn abnormal_has_no_code() {
        assert_eq!(ExitState::Abnormal.code(), None);
        assert_eq!(ExitState::Exited(7).code(), Some(7));
    }
}
