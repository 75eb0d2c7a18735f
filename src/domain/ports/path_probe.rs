//! PathProbe port - read-only file system queries used by path reduction
//!
//! Implementations must never fail: an access error reads as "absent" or
//! "not a directory".

use std::path::{Path, PathBuf};

/// Abstract existence and type queries
///
/// Implementations:
/// - `LocalProbe` - real file system
/// - in-memory probes in tests
pub trait PathProbe {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Directory relative paths are resolved against
    fn current_dir(&self) -> PathBuf;

    /// Home directory used for `~` expansion, if known
    fn home_dir(&self) -> Option<PathBuf>;
}

impl<T: PathProbe + ?Sized> PathProbe for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn current_dir(&self) -> PathBuf {
        (**self).current_dir()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}
