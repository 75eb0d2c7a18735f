//! Change filter
//!
//! Decides which raw watcher paths are worth a check run.

use std::path::{Component, Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::warn;

use super::event::WatchOptions;

/// Path filter built from watch options
pub struct PathFilter {
    root: PathBuf,
    watched: Vec<PathBuf>,
    extensions: Vec<String>,
    ignore: Vec<String>,
    gitignore: Option<Gitignore>,
}

impl PathFilter {
    pub fn new(options: &WatchOptions) -> Self {
        let root = options.project_root.clone();
        let gitignore = if options.respect_gitignore {
            load_gitignore(&root)
        } else {
            None
        };

        Self {
            root,
            watched: options.absolute_roots(),
            extensions: options.extensions.clone(),
            ignore: options.ignore.clone(),
            gitignore,
        }
    }

    /// Whether a change to `path` should be reported
    pub fn matches(&self, path: &Path) -> bool {
        self.has_watched_extension(path) && !self.in_ignored_dir(path) && !self.git_ignored(path)
    }

    fn has_watched_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|w| w.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }

    fn in_ignored_dir(&self, path: &Path) -> bool {
        let rel = self.relative_to_base(path);
        let mut components = rel.components().peekable();
        while let Some(component) = components.next() {
            // the file name itself is not a directory
            if components.peek().is_none() {
                break;
            }
            if let Component::Normal(name) = component {
                if self.ignore.iter().any(|i| name == i.as_str()) {
                    return true;
                }
            }
        }
        false
    }

    /// `path` below the project root, or below the watched root holding it.
    /// Directories above the base never count as ignored.
    fn relative_to_base<'a>(&self, path: &'a Path) -> &'a Path {
        std::iter::once(&self.root)
            .chain(&self.watched)
            .find_map(|base| path.strip_prefix(base).ok())
            .unwrap_or(path)
    }

    fn git_ignored(&self, path: &Path) -> bool {
        let Some(gitignore) = &self.gitignore else {
            return false;
        };
        // the matcher panics on paths outside its root
        if !path.starts_with(&self.root) {
            return false;
        }
        gitignore
            .matched_path_or_any_parents(path, path.is_dir())
            .is_ignore()
    }
}

fn load_gitignore(root: &Path) -> Option<Gitignore> {
    let path = root.join(".gitignore");
    if !path.is_file() {
        return None;
    }

    let mut builder = GitignoreBuilder::new(root);
    if let Some(err) = builder.add(&path) {
        warn!("partially loaded {}: {}", path.display(), err);
    }
    match builder.build() {
        Ok(gitignore) => Some(gitignore),
        Err(e) => {
            warn!("ignoring {}: {}", path.display(), e);
            None
        }
    }
}
