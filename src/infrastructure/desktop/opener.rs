//! Open files with the desktop's default application

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::FileOpener;

/// Opener using `open` (macOS), `cmd /C start` (Windows) or `xdg-open`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(path: &Path) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) {
        let result = Self::command(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) if !status.success() => {
                debug!(path = %path.display(), ?status, "opener exited unsuccessfully")
            }
            Err(e) => debug!(path = %path.display(), error = %e, "no file opener available"),
            Ok(_) => {}
        }
    }
}
