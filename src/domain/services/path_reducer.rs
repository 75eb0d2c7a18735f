//! Path reduction
//!
//! Turns a raw batch of changed paths into the minimal `PathSet` worth
//! checking. Steps run in a fixed order:
//!
//! 1. absolutize (lexically, `~` expanded, no symlink resolution)
//! 2. de-duplicate, first occurrence wins
//! 3. drop paths that do not exist
//! 4. drop paths inside another surviving directory

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::domain::ports::PathProbe;
use crate::domain::value_objects::PathSet;

/// Reduces raw path batches against a file system probe
pub struct PathReducer<P: PathProbe> {
    probe: P,
}

impl<P: PathProbe> PathReducer<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Reduce `raw_paths` to an ordered, minimal set of existing paths.
    pub fn reduce<S: AsRef<Path>>(&self, raw_paths: &[S]) -> PathSet {
        if raw_paths.is_empty() {
            return PathSet::empty();
        }

        let cwd = self.probe.current_dir();
        let home = self.probe.home_dir();

        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(raw_paths.len());
        for raw in raw_paths {
            let abs = absolutize(raw.as_ref(), &cwd, home.as_deref());
            if seen.insert(abs.clone()) {
                unique.push(abs);
            }
        }

        let existing: Vec<PathBuf> = unique
            .into_iter()
            .filter(|p| {
                let exists = self.probe.exists(p);
                if !exists {
                    debug!(path = %p.display(), "dropping missing path");
                }
                exists
            })
            .collect();

        let dirs: Vec<&PathBuf> = existing.iter().filter(|p| self.probe.is_dir(p)).collect();

        let reduced: Vec<PathBuf> = existing
            .iter()
            .filter(|p| {
                let covered = dirs.iter().any(|d| *d != *p && p.starts_with(d));
                if covered {
                    debug!(path = %p.display(), "dropping path covered by a directory");
                }
                !covered
            })
            .cloned()
            .collect();

        PathSet::from_reduced(reduced)
    }
}

/// Absolute, lexically normalized form of `path`.
///
/// `.` segments vanish and `..` pops a segment (never above the root).
/// An empty input resolves to `cwd`.
pub fn absolutize(path: &Path, cwd: &Path, home: Option<&Path>) -> PathBuf {
    let joined = match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ if path.is_absolute() => path.to_path_buf(),
        _ => cwd.join(path),
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to remove the root
                out.pop();
            }
            Component::Normal(seg) => out.push(seg),
        }
    }
    out
}
