//! Local process runner
//!
//! Spawns the program directly (no shell) with stdout and stderr pointed at
//! the write end of a single pipe, so the captured text keeps the child's own
//! interleaving of the two streams.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{ExitState, ProcessOutput, ProcessRunner};
use crate::domain::value_objects::CommandVector;

/// Runs commands on the local machine
#[derive(Debug, Clone, Default)]
pub struct LocalProcessRunner {
    working_dir: Option<PathBuf>,
}

impl LocalProcessRunner {
    pub fn new() -> Self {
        Self { working_dir: None }
    }

    /// Run children from `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl ProcessRunner for LocalProcessRunner {
    fn run(&self, command: &CommandVector) -> std::io::Result<ProcessOutput> {
        let (mut reader, writer) = os_pipe::pipe()?;
        let writer_clone = writer.try_clone()?;

        let mut cmd = Command::new(command.program());
        cmd.args(command.args())
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(writer_clone);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        debug!(command = %command, "spawning checker");
        let mut child = cmd.spawn()?;

        // `cmd` still owns the write ends; drop it or the read never sees EOF.
        drop(cmd);

        let mut raw = Vec::new();
        let read_result = reader.read_to_end(&mut raw);
        let status = child.wait()?;
        read_result?;

        Ok(ProcessOutput {
            output: String::from_utf8_lossy(&raw).into_owned(),
            status: ExitState::from(status),
        })
    }
}
