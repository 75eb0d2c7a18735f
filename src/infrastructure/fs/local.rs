//! Local File System Probe
//!
//! Implements the PathProbe port against the real disk.

use std::path::{Path, PathBuf};

use crate::domain::ports::PathProbe;

/// Real file system probe
///
/// Symlinks are followed. Metadata errors (permissions, broken links,
/// races) read as "absent".
#[derive(Debug, Clone, Default)]
pub struct LocalProbe {
    cwd: Option<PathBuf>,
}

impl LocalProbe {
    /// Probe resolving relative paths against the process working directory
    pub fn new() -> Self {
        Self { cwd: None }
    }

    /// Probe resolving relative paths against `cwd`
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }
}

impl PathProbe for LocalProbe {
    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    fn current_dir(&self) -> PathBuf {
        match &self.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}
