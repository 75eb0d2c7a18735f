//! Common test utilities for tcwatch CLI tests.
//!
//! Provides `TestEnv`: an isolated project directory, an isolated user
//! config directory, and a stub checker script that records its argv.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a tcwatch CLI command
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    pub bin_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            config_home: TempDir::new().unwrap(),
            bin_dir: TempDir::new().unwrap(),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();
    }

    /// Install a checker stub that appends each argument to `argv.txt`
    /// next to itself, prints a line and exits with `exit_code`.
    #[cfg(unix)]
    pub fn stub_checker(&self, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.path().join("srb-stub");
        let script = format!(
            "#!/bin/sh\n\
             for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> \"$(dirname \"$0\")/argv.txt\"; done\n\
             echo \"stub checker ran\"\n\
             exit {exit_code}\n"
        );
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Arguments the stub received, one per line, across all runs
    pub fn recorded_argv(&self) -> Vec<String> {
        std::fs::read_to_string(self.bin_dir.path().join("argv.txt"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run tcwatch in the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tcwatch"));
        cmd.current_dir(cwd)
            .args(args)
            .env("TCWATCH_CONFIG_HOME", self.config_home.path())
            .env_remove("RUST_LOG");
        for var in [
            "TCWATCH_COMMAND",
            "TCWATCH_NOTIFICATION",
            "TCWATCH_HIDE_OUTPUT",
            "TCWATCH_EXTRA_ARGS",
            "TCWATCH_COLORIZE",
        ] {
            cmd.env_remove(var);
        }

        let output = cmd.output().expect("Failed to execute tcwatch");
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
