//! Typecheck Plugin
//!
//! The host-facing interface. A host (the watch loop, the `check` command)
//! calls these hooks directly and inspects the returned `TriggerOutcome` to
//! decide whether to keep going.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::ports::{
    FileOpener, NoopEventSink, Notifier, PathProbe, ProcessRunner, RunEvent, RunEventSink,
};
use crate::domain::services::PathReducer;
use crate::domain::value_objects::PathSet;
use crate::error::TcResult;

use super::check::{CheckRunner, RunResult};

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Nothing to check; no process was spawned
    Skipped,
    Passed,
    Failed,
}

impl TriggerOutcome {
    pub fn from_result(result: &RunResult) -> Self {
        if result.succeeded {
            TriggerOutcome::Passed
        } else {
            TriggerOutcome::Failed
        }
    }

    pub fn is_failure(self) -> bool {
        self == TriggerOutcome::Failed
    }
}

/// Lifecycle hooks a host calls
///
/// `Err` is reserved for configuration problems found before spawning.
pub trait Plugin {
    /// Host started
    fn on_start(&self) -> TcResult<TriggerOutcome>;

    /// A batch of raw changed paths arrived
    fn on_paths_changed(&self, raw_paths: &[PathBuf]) -> TcResult<TriggerOutcome>;

    /// Manual request to check everything
    fn on_run_all(&self) -> TcResult<TriggerOutcome>;

    /// Host is shutting down
    fn on_quit(&self) -> TcResult<TriggerOutcome>;
}

/// Plugin wiring path reduction to check runs
pub struct TypecheckPlugin<P, R, N, O>
where
    P: PathProbe,
    R: ProcessRunner,
    N: Notifier,
    O: FileOpener,
{
    reducer: PathReducer<P>,
    runner: CheckRunner<R, N, O>,
    cwd: PathBuf,
    events: Arc<dyn RunEventSink>,
}

impl<P, R, N, O> TypecheckPlugin<P, R, N, O>
where
    P: PathProbe,
    R: ProcessRunner,
    N: Notifier,
    O: FileOpener,
{
    /// `cwd` is only used to shorten paths in emitted events.
    pub fn new(reducer: PathReducer<P>, runner: CheckRunner<R, N, O>, cwd: PathBuf) -> Self {
        Self {
            reducer,
            runner,
            cwd,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_event_sink(mut self, events: Arc<dyn RunEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn runner(&self) -> &CheckRunner<R, N, O> {
        &self.runner
    }

    /// Run over an already reduced set
    pub fn trigger(&self, paths: &PathSet, full_project: bool) -> TcResult<TriggerOutcome> {
        let shown = if full_project {
            Vec::new()
        } else {
            paths.display_relative(&self.cwd)
        };
        self.events.on_event(RunEvent::CheckStarted {
            full_project,
            paths: shown,
        });

        let result = self.runner.execute(paths, full_project)?;

        let output = if self.runner.options().hide_output {
            None
        } else {
            Some(result.output_text.clone())
        };
        self.events.on_event(RunEvent::CheckFinished {
            passed: result.succeeded,
            exit_code: result.exit_code,
            output,
        });

        Ok(TriggerOutcome::from_result(&result))
    }
}

impl<P, R, N, O> Plugin for TypecheckPlugin<P, R, N, O>
where
    P: PathProbe,
    R: ProcessRunner,
    N: Notifier,
    O: FileOpener,
{
    fn on_start(&self) -> TcResult<TriggerOutcome> {
        if !self.runner.options().all_on_start {
            return Ok(TriggerOutcome::Skipped);
        }
        self.trigger(&PathSet::empty(), true)
    }

    fn on_paths_changed(&self, raw_paths: &[PathBuf]) -> TcResult<TriggerOutcome> {
        let paths = self.reducer.reduce(raw_paths);
        if paths.is_empty() {
            return Ok(TriggerOutcome::Skipped);
        }
        self.trigger(&paths, false)
    }

    fn on_run_all(&self) -> TcResult<TriggerOutcome> {
        self.trigger(&PathSet::empty(), true)
    }

    fn on_quit(&self) -> TcResult<TriggerOutcome> {
        Ok(TriggerOutcome::Skipped)
    }
}
