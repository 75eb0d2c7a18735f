//! Check Runner
//!
//! Runs the checker once over a path set (or the whole project), classifies
//! the exit status and applies the notification policy.

use tracing::{error, info};

use crate::config::RunOptions;
use crate::domain::ports::{FileOpener, Notifier, NotifyImage, ProcessRunner};
use crate::domain::value_objects::{CommandVector, PathSet};
use crate::error::{TcError, TcResult};

use super::command::build_command;
use super::result::RunResult;

/// Title of every notification
pub const NOTIFICATION_TITLE: &str = "Sorbet results";

/// Check runner - one blocking checker invocation per `execute`
///
/// Parameterized by its ports so tests can substitute the process,
/// notification and file-opening backends.
pub struct CheckRunner<R, N, O>
where
    R: ProcessRunner,
    N: Notifier,
    O: FileOpener,
{
    options: RunOptions,
    process: R,
    notifier: N,
    opener: O,
}

impl<R, N, O> CheckRunner<R, N, O>
where
    R: ProcessRunner,
    N: Notifier,
    O: FileOpener,
{
    pub fn new(options: RunOptions, process: R, notifier: N, opener: O) -> Self {
        Self {
            options,
            process,
            notifier,
            opener,
        }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Build the argv for a run without executing it
    pub fn build_command(&self, paths: &PathSet, full_project: bool) -> TcResult<CommandVector> {
        build_command(&self.options, paths, full_project)
    }

    /// Run the checker and report the outcome.
    ///
    /// Configuration errors return `Err` before anything is spawned.
    /// A checker that cannot be started yields a failed `RunResult`, not an
    /// error. Exactly one notification is sent per run at most.
    pub fn execute(&self, paths: &PathSet, full_project: bool) -> TcResult<RunResult> {
        let command = self.build_command(paths, full_project)?;
        info!(command = %command, full_project, "running checker");

        let result = match self.process.run(&command) {
            Ok(output) => RunResult::from_process(output),
            Err(source) => {
                let err = TcError::Spawn {
                    program: command.program().to_string(),
                    source,
                };
                error!("{}", err);
                RunResult::spawn_failure(err.to_string())
            }
        };

        info!(
            succeeded = result.succeeded,
            exit_code = ?result.exit_code,
            "checker finished"
        );

        if self.options.notification.should_notify(result.succeeded) {
            self.notifier.notify(
                &result.output_text,
                NOTIFICATION_TITLE,
                NotifyImage::from_outcome(result.succeeded),
            );
        }

        self.open_results_file_if_needed();

        Ok(result)
    }

    fn open_results_file_if_needed(&self) {
        let Some(path) = &self.options.open_results_file else {
            return;
        };
        if path.exists() {
            self.opener.open(path);
        }
    }
}
